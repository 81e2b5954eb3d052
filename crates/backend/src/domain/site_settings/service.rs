use super::repository;
use contracts::domain::site_settings::{SiteSettings, SiteSettingsPatch};

/// Current site copy; seeds the default on first call.
pub async fn get() -> anyhow::Result<SiteSettings> {
    repository::get_or_create().await
}

pub async fn update(patch: SiteSettingsPatch) -> anyhow::Result<SiteSettings> {
    repository::update(&patch).await
}
