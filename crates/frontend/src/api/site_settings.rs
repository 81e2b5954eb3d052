use contracts::domain::site_settings::{SiteSettings, SiteSettingsPatch};

use super::client;

pub async fn get() -> Result<SiteSettings, String> {
    client::require()?.get_json("/api/site_settings").await
}

pub async fn update(patch: &SiteSettingsPatch) -> Result<SiteSettings, String> {
    client::require()?
        .put_json("/api/site_settings", patch)
        .await
}
