use contracts::domain::order::{Order, OrderDraft, OrderPatch};

use super::client;

pub async fn get_all() -> Result<Vec<Order>, String> {
    client::require()?.get_json("/api/orders").await
}

pub async fn create(draft: &OrderDraft) -> Result<Order, String> {
    client::require()?.post_json("/api/orders", draft).await
}

pub async fn update(id: &str, patch: &OrderPatch) -> Result<Order, String> {
    client::require()?
        .patch_json(&format!("/api/orders/{}", id), patch)
        .await
}

pub async fn delete(id: &str) -> Result<(), String> {
    client::require()?
        .delete(&format!("/api/orders/{}", id))
        .await
}
