use serde::{Deserialize, Serialize};

/// A way customers can pay: mobile wallet number, crypto address, etc.
/// `details` is free-form text rendered verbatim on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: String,
    pub name: String,
    pub details: String,
    pub active: bool,
}

impl PaymentMethod {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Payment method name cannot be empty".into());
        }
        if self.details.trim().is_empty() {
            return Err("Payment method details cannot be empty".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodDraft {
    pub name: String,
    pub details: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl PaymentMethodDraft {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Payment method name cannot be empty".into());
        }
        if self.details.trim().is_empty() {
            return Err("Payment method details cannot be empty".into());
        }
        Ok(())
    }
}

fn default_active() -> bool {
    true
}
