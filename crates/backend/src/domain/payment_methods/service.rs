use super::repository;
use contracts::domain::payment_method::{PaymentMethod, PaymentMethodDraft, PaymentMethodPatch};

/// Create a new payment method
pub async fn create(draft: PaymentMethodDraft) -> anyhow::Result<PaymentMethod> {
    draft
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    repository::insert(&draft).await
}

/// Partially update an existing payment method
pub async fn update(id: &str, patch: PaymentMethodPatch) -> anyhow::Result<Option<PaymentMethod>> {
    if let Some(ref name) = patch.name {
        if name.trim().is_empty() {
            return Err(anyhow::anyhow!("Validation failed: name cannot be empty"));
        }
    }
    repository::update_partial(id, &patch).await
}

pub async fn delete(id: &str) -> anyhow::Result<bool> {
    repository::delete(id).await
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<PaymentMethod>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<PaymentMethod>> {
    repository::list_all().await
}
