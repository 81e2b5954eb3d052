use crate::system::{auth::password, settings};

const ADMIN_PASSWORD_HASH_KEY: &str = "admin_password_hash";

/// Initial credential, replaced by hashing it into sys_settings on first
/// start. Change it from the admin panel afterwards.
const DEFAULT_ADMIN_PASSWORD: &str = "admin123123";

/// Seed the shared admin credential if none is stored yet.
pub async fn ensure_admin_credential_exists() -> anyhow::Result<()> {
    if settings::get(ADMIN_PASSWORD_HASH_KEY).await?.is_some() {
        return Ok(());
    }

    let hash = password::hash_password(DEFAULT_ADMIN_PASSWORD)?;
    settings::set(ADMIN_PASSWORD_HASH_KEY, &hash).await?;
    tracing::warn!("Seeded default admin credential; change it after first login");
    Ok(())
}

/// Stored admin password hash, if seeded.
pub async fn admin_password_hash() -> anyhow::Result<Option<String>> {
    settings::get(ADMIN_PASSWORD_HASH_KEY).await
}

/// Replace the admin password.
pub async fn set_admin_password(new_password: &str) -> anyhow::Result<()> {
    if new_password.trim().len() < 8 {
        return Err(anyhow::anyhow!("Password must be at least 8 characters"));
    }
    let hash = password::hash_password(new_password)?;
    settings::set(ADMIN_PASSWORD_HASH_KEY, &hash).await
}
