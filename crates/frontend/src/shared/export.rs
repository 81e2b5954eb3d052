//! CSV and JSON-backup export, plus backup parsing for restore.
//!
//! Downloads are plain in-browser blobs behind a temporary anchor click;
//! there is no server-side export endpoint.

use contracts::domain::order::Order;
use contracts::domain::payment_method::PaymentMethod;
use contracts::domain::service::Service;
use contracts::domain::site_settings::SiteSettings;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

// ============================================================================
// CSV
// ============================================================================

/// Types exportable as CSV rows.
pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;
    fn to_csv_row(&self) -> Vec<String>;
}

impl CsvExportable for Order {
    fn headers() -> Vec<&'static str> {
        vec!["Customer", "Service", "Notes", "Created", "Archived"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.customer_name.clone(),
            self.service_name.clone(),
            self.notes.clone().unwrap_or_default(),
            self.timestamp.to_rfc3339(),
            if self.archived { "yes" } else { "no" }.to_string(),
        ]
    }
}

/// Build the CSV text. A UTF-8 BOM keeps Excel happy with Arabic content.
pub fn build_csv<T: CsvExportable>(data: &[T]) -> String {
    let mut csv_content = String::new();
    csv_content.push('\u{FEFF}');

    csv_content.push_str(&T::headers().join(";"));
    csv_content.push('\n');

    for item in data {
        let escaped_row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv_content.push_str(&escaped_row.join(";"));
        csv_content.push('\n');
    }

    csv_content
}

/// Export a list to a CSV file and trigger the download.
pub fn export_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Nothing to export".to_string());
    }
    let content = build_csv(data);
    let blob = create_blob(&content, "text/csv;charset=utf-8;")?;
    download_blob(&blob, filename)
}

/// Quote a cell when it contains the separator, quotes, or line breaks.
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

// ============================================================================
// JSON backup
// ============================================================================

/// Full snapshot of the four domains. Every key is required: a file missing
/// one of them is rejected during restore.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    pub services: Vec<Service>,
    pub payment_methods: Vec<PaymentMethod>,
    pub orders: Vec<Order>,
    pub site_settings: SiteSettings,
}

/// Parse and validate a backup file. Nothing is applied here; the caller
/// only touches storage after this succeeds.
pub fn parse_backup(json: &str) -> Result<Backup, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid backup file: {}", e))
}

/// Download the backup as a JSON file.
pub fn export_backup(backup: &Backup, filename: &str) -> Result<(), String> {
    let json = serde_json::to_string_pretty(backup).map_err(|e| format!("{e}"))?;
    let blob = create_blob(&json, "application/json;charset=utf-8;")?;
    download_blob(&blob, filename)
}

// ============================================================================
// Blob plumbing
// ============================================================================

fn create_blob(content: &str, mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(customer: &str, notes: Option<&str>) -> Order {
        Order {
            id: "o1".into(),
            customer_name: customer.into(),
            service_name: "PayPal Personal Account".into(),
            notes: notes.map(Into::into),
            timestamp: "2025-06-01T10:30:00Z".parse().unwrap(),
            archived: false,
        }
    }

    #[test]
    fn csv_escapes_separator_and_quotes() {
        let csv = build_csv(&[order("Ali; \"the client\"", Some("line1\nline2"))]);
        assert!(csv.starts_with('\u{FEFF}'));
        assert!(csv.contains("\"Ali; \"\"the client\"\"\""));
        assert!(csv.contains("\"line1\nline2\""));
    }

    #[test]
    fn csv_has_header_and_one_line_per_order() {
        let csv = build_csv(&[order("Ali", None), order("Sara", None)]);
        assert_eq!(csv.lines().count(), 3);
        assert!(csv.lines().next().unwrap().contains("Customer"));
    }

    #[test]
    fn backup_round_trips() {
        let backup = Backup {
            services: crate::shared::defaults::default_services(),
            payment_methods: crate::shared::defaults::default_payment_methods(),
            orders: vec![order("Ali", Some("asap"))],
            site_settings: SiteSettings::default(),
        };
        let json = serde_json::to_string(&backup).unwrap();
        let back = parse_backup(&json).unwrap();
        assert_eq!(back.services.len(), 17);
        assert_eq!(back.orders[0].customer_name, "Ali");
    }

    #[test]
    fn backup_missing_key_is_rejected() {
        // No "services" key: the restore path must refuse the file outright.
        let json = r#"{"paymentMethods":[],"orders":[],"siteSettings":{"title":"t","description":"d","orderNotice":"n"}}"#;
        assert!(parse_backup(json).is_err());
    }

    #[test]
    fn backup_malformed_json_is_rejected() {
        assert!(parse_backup("{not json").is_err());
    }
}
