use contracts::domain::service::{Service, ServiceDraft, ServicePatch};

use super::client;

pub async fn get_all() -> Result<Vec<Service>, String> {
    client::require()?.get_json("/api/services").await
}

pub async fn create(draft: &ServiceDraft) -> Result<Service, String> {
    client::require()?.post_json("/api/services", draft).await
}

pub async fn update(id: &str, patch: &ServicePatch) -> Result<Service, String> {
    client::require()?
        .patch_json(&format!("/api/services/{}", id), patch)
        .await
}

pub async fn delete(id: &str) -> Result<(), String> {
    client::require()?
        .delete(&format!("/api/services/{}", id))
        .await
}
