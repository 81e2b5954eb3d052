use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// A brokered financial service shown on the landing page.
///
/// `name` doubles as the reference key used by orders; there is no id-based
/// foreign key between the two tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    /// Free-form display price ("15$", "starts at 30$"); no numeric format
    /// is guaranteed.
    pub price: String,
    /// Display rank on the landing page. Not unique, not contiguous.
    pub order: i32,
    /// Inactive services are hidden from the landing page but stay visible
    /// in admin listings.
    pub active: bool,

    // Extended editor fields. The advanced admin editor reads and writes
    // these, but the remote mapping layer never persists them, so they are
    // empty again after a reload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Service {
    /// Validate the canonical fields.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Service name cannot be empty".into());
        }
        if self.price.trim().is_empty() {
            return Err("Service price cannot be empty".into());
        }
        Ok(())
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create payload: the canonical persisted fields minus the server-assigned id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDraft {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Partial update: absent fields leave the stored row untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl ServiceDraft {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Service name cannot be empty".into());
        }
        if self.price.trim().is_empty() {
            return Err("Service price cannot be empty".into());
        }
        Ok(())
    }
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_is_camel_case() {
        let service = Service {
            id: "abc".into(),
            name: "PayPal".into(),
            price: "15$".into(),
            order: 12,
            active: true,
            description: None,
            category: None,
            features: vec![],
            processing_time: None,
            featured: false,
            original_price: None,
            tags: vec![],
            image_url: None,
        };
        let json = serde_json::to_value(&service).unwrap();
        assert_eq!(json["order"], 12);
        assert_eq!(json["active"], true);
        // Extended fields are absent from the wire when unset.
        assert!(json.get("imageUrl").is_none());
        assert!(json.get("processingTime").is_none());
    }

    #[test]
    fn extended_fields_default_when_missing() {
        // A row coming back from the remote mapping layer carries only the
        // canonical columns.
        let json = r#"{"id":"1","name":"Wise","price":"20$","order":3,"active":false}"#;
        let service: Service = serde_json::from_str(json).unwrap();
        assert_eq!(service.name, "Wise");
        assert!(!service.active);
        assert!(service.features.is_empty());
        assert!(service.description.is_none());
        assert!(!service.featured);
    }

    #[test]
    fn draft_validation_rejects_blank_name() {
        let draft = ServiceDraft {
            name: "  ".into(),
            price: "5$".into(),
            ..Default::default()
        };
        assert!(draft.validate().is_err());
    }
}
