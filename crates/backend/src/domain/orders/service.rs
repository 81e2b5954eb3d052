use super::repository;
use contracts::domain::order::{Order, OrderDraft, OrderPatch};

/// Create a new order. `service_name` is taken as-is; nothing checks that a
/// service with that name still exists.
pub async fn create(draft: OrderDraft) -> anyhow::Result<Order> {
    draft
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    repository::insert(&draft).await
}

/// Partially update an existing order (also used to flip `archived`)
pub async fn update(id: &str, patch: OrderPatch) -> anyhow::Result<Option<Order>> {
    if let Some(ref customer_name) = patch.customer_name {
        if customer_name.trim().is_empty() {
            return Err(anyhow::anyhow!(
                "Validation failed: customer name cannot be empty"
            ));
        }
    }
    repository::update_partial(id, &patch).await
}

pub async fn delete(id: &str) -> anyhow::Result<bool> {
    repository::delete(id).await
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<Order>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Order>> {
    repository::list_all().await
}
