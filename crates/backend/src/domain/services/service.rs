use super::repository;
use contracts::domain::service::{Service, ServiceDraft, ServicePatch};

/// Create a new service
pub async fn create(draft: ServiceDraft) -> anyhow::Result<Service> {
    draft
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    repository::insert(&draft).await
}

/// Partially update an existing service
pub async fn update(id: &str, patch: ServicePatch) -> anyhow::Result<Option<Service>> {
    if let Some(ref name) = patch.name {
        if name.trim().is_empty() {
            return Err(anyhow::anyhow!("Validation failed: name cannot be empty"));
        }
    }
    if let Some(ref price) = patch.price {
        if price.trim().is_empty() {
            return Err(anyhow::anyhow!("Validation failed: price cannot be empty"));
        }
    }
    repository::update_partial(id, &patch).await
}

/// Delete a service outright. Orders referencing its name are left alone.
pub async fn delete(id: &str) -> anyhow::Result<bool> {
    repository::delete(id).await
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<Service>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Service>> {
    repository::list_all().await
}
