use axum::{http::StatusCode, Json};
use contracts::system::auth::{ChangePasswordRequest, LoginRequest, LoginResponse};
use serde_json::json;

use crate::system::{auth::jwt, auth::password, initialization};

/// POST /api/auth/login
///
/// Verifies the shared admin password against the stored argon2 hash and
/// hands back a short-lived bearer token.
pub async fn login(Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>, StatusCode> {
    let hash = initialization::admin_password_hash()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let ok = password::verify_password(&request.password, &hash)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    if !ok {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let access_token = jwt::generate_access_token("admin")
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(LoginResponse { access_token }))
}

/// POST /api/auth/change-password (requires a bearer token)
pub async fn change_password(
    Json(request): Json<ChangePasswordRequest>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    match initialization::set_admin_password(&request.new_password).await {
        Ok(()) => Ok(Json(json!({"ok": true}))),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
