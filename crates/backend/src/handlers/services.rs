use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::service::{Service, ServiceDraft, ServicePatch};

use crate::domain::services;

/// GET /api/services
pub async fn list_all() -> Result<Json<Vec<Service>>, StatusCode> {
    match services::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/services/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Service>, StatusCode> {
    match services::service::get_by_id(&id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/services
pub async fn create(Json(draft): Json<ServiceDraft>) -> Result<Json<Service>, StatusCode> {
    match services::service::create(draft).await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// PATCH /api/services/:id
pub async fn update(
    Path(id): Path<String>,
    Json(patch): Json<ServicePatch>,
) -> Result<Json<Service>, StatusCode> {
    match services::service::update(&id, patch).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// DELETE /api/services/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), StatusCode> {
    match services::service::delete(&id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
