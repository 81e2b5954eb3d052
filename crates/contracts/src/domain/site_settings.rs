use serde::{Deserialize, Serialize};

/// Singleton site copy record. One row; created on first access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub title: String,
    pub description: String,
    /// Text shown to customers right after they place an order.
    pub order_notice: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: "KYC Trust".into(),
            description: "Digital financial services and account brokerage".into(),
            order_notice: "Thank you for your order. We will contact you within 24 hours."
                .into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_notice: Option<String>,
}
