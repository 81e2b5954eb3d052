use contracts::domain::payment_method::{PaymentMethod, PaymentMethodDraft, PaymentMethodPatch};

use super::client;

pub async fn get_all() -> Result<Vec<PaymentMethod>, String> {
    client::require()?.get_json("/api/payment_methods").await
}

pub async fn create(draft: &PaymentMethodDraft) -> Result<PaymentMethod, String> {
    client::require()?
        .post_json("/api/payment_methods", draft)
        .await
}

pub async fn update(id: &str, patch: &PaymentMethodPatch) -> Result<PaymentMethod, String> {
    client::require()?
        .patch_json(&format!("/api/payment_methods/{}", id), patch)
        .await
}

pub async fn delete(id: &str) -> Result<(), String> {
    client::require()?
        .delete(&format!("/api/payment_methods/{}", id))
        .await
}
