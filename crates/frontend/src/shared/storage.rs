//! Typed helpers over browser localStorage.
//!
//! Every collection the data store holds is mirrored here under a fixed key;
//! the mirrors feed the offline fallback at initial load. Storage being
//! unavailable (private mode, no window) degrades to a no-op.

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::window;

pub mod keys {
    pub const SERVICES: &str = "kyctrust_services";
    pub const PAYMENT_METHODS: &str = "kyctrust_payment_methods";
    pub const SITE_SETTINGS: &str = "kyctrust_site_settings";
    pub const ORDERS: &str = "kyctrust_orders";
    pub const CUSTOMIZATION: &str = "kyctrust_customization";
    pub const THEME: &str = "kyctrust_theme";
    pub const LANGUAGE: &str = "kyctrust_language";
}

fn storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load and deserialize a snapshot; `None` on absence or parse failure.
pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = storage()?.get_item(key).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

/// Serialize and store a snapshot. Returns false when nothing was written.
pub fn save<T: Serialize>(key: &str, value: &T) -> bool {
    let Some(storage) = storage() else {
        return false;
    };
    let Ok(json) = serde_json::to_string(value) else {
        return false;
    };
    storage.set_item(key, &json).is_ok()
}

pub fn load_string(key: &str) -> Option<String> {
    storage()?.get_item(key).ok().flatten()
}

pub fn save_string(key: &str, value: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(key, value);
    }
}
