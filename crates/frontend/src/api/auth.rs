use contracts::system::auth::{ChangePasswordRequest, LoginRequest, LoginResponse};

use super::client;

/// Exchange the shared admin password for a bearer token and remember it for
/// the rest of this page load.
pub async fn login(password: String) -> Result<(), String> {
    let response: LoginResponse = client::require()?
        .post_json("/api/auth/login", &LoginRequest { password })
        .await
        .map_err(|_| "Wrong password or server unavailable".to_string())?;
    client::set_access_token(Some(response.access_token));
    Ok(())
}

pub fn logout() {
    client::set_access_token(None);
}

pub fn is_logged_in() -> bool {
    client::access_token().is_some()
}

pub async fn change_password(new_password: String) -> Result<(), String> {
    let _: serde_json::Value = client::require()?
        .post_json(
            "/api/auth/change-password",
            &ChangePasswordRequest { new_password },
        )
        .await?;
    Ok(())
}
