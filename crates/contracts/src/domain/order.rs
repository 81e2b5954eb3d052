use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer order for a named service.
///
/// `service_name` references `Service::name` by string only. Deleting a
/// service does not touch its orders, and nothing checks that the name
/// still exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub service_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Creation instant, assigned by the persistence layer. Serialized as an
    /// ISO-8601 string and re-hydrated on the way back.
    pub timestamp: DateTime<Utc>,
    /// Marks the order handled. The de-facto soft-delete flag.
    pub archived: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub customer_name: String,
    pub service_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

impl OrderDraft {
    pub fn validate(&self) -> Result<(), String> {
        if self.customer_name.trim().is_empty() {
            return Err("Customer name cannot be empty".into());
        }
        if self.service_name.trim().is_empty() {
            return Err("Service name cannot be empty".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_round_trips_as_iso_string() {
        let order = Order {
            id: "o1".into(),
            customer_name: "Ali".into(),
            service_name: "PayPal".into(),
            notes: None,
            timestamp: "2025-06-01T10:30:00Z".parse().unwrap(),
            archived: false,
        };
        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains("2025-06-01T10:30:00Z"));
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(back.timestamp, order.timestamp);
    }

    #[test]
    fn draft_requires_customer_and_service() {
        let draft = OrderDraft {
            customer_name: "Ali".into(),
            service_name: "".into(),
            notes: None,
        };
        assert!(draft.validate().is_err());
    }
}
