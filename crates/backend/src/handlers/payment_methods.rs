use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::payment_method::{PaymentMethod, PaymentMethodDraft, PaymentMethodPatch};

use crate::domain::payment_methods;

/// GET /api/payment_methods
pub async fn list_all() -> Result<Json<Vec<PaymentMethod>>, StatusCode> {
    match payment_methods::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/payment_methods/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<PaymentMethod>, StatusCode> {
    match payment_methods::service::get_by_id(&id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/payment_methods
pub async fn create(
    Json(draft): Json<PaymentMethodDraft>,
) -> Result<Json<PaymentMethod>, StatusCode> {
    match payment_methods::service::create(draft).await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// PATCH /api/payment_methods/:id
pub async fn update(
    Path(id): Path<String>,
    Json(patch): Json<PaymentMethodPatch>,
) -> Result<Json<PaymentMethod>, StatusCode> {
    match payment_methods::service::update(&id, patch).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// DELETE /api/payment_methods/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), StatusCode> {
    match payment_methods::service::delete(&id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
