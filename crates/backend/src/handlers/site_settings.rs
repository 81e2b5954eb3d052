use axum::{http::StatusCode, Json};
use contracts::domain::site_settings::{SiteSettings, SiteSettingsPatch};

use crate::domain::site_settings;

/// GET /api/site_settings
pub async fn get() -> Result<Json<SiteSettings>, StatusCode> {
    match site_settings::service::get().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// PUT /api/site_settings
pub async fn update(
    Json(patch): Json<SiteSettingsPatch>,
) -> Result<Json<SiteSettings>, StatusCode> {
    match site_settings::service::update(patch).await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
