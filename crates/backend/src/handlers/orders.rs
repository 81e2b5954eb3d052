use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::order::{Order, OrderDraft, OrderPatch};

use crate::domain::orders;

/// GET /api/orders
pub async fn list_all() -> Result<Json<Vec<Order>>, StatusCode> {
    match orders::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/orders/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Order>, StatusCode> {
    match orders::service::get_by_id(&id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/orders (public: the landing-page order form posts here)
pub async fn create(Json(draft): Json<OrderDraft>) -> Result<Json<Order>, StatusCode> {
    match orders::service::create(draft).await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// PATCH /api/orders/:id (also used to flip `archived`)
pub async fn update(
    Path(id): Path<String>,
    Json(patch): Json<OrderPatch>,
) -> Result<Json<Order>, StatusCode> {
    match orders::service::update(&id, patch).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// DELETE /api/orders/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), StatusCode> {
    match orders::service::delete(&id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
