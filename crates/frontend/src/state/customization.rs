//! Customization store.
//!
//! Same shape as the data store but with no remote side at all: the whole
//! aggregate lives under one localStorage key. Every mutation merges into
//! the in-memory object and writes the full object back.

use contracts::customization::Customization;
use leptos::prelude::*;

use crate::shared::storage::{self, keys};

#[derive(Clone, Copy)]
pub struct CustomizationStore {
    pub customization: RwSignal<Customization>,
    pub error: RwSignal<Option<String>>,
}

impl CustomizationStore {
    /// Load the stored object, or start from the rich default.
    pub fn load() -> Self {
        let customization = storage::load(keys::CUSTOMIZATION).unwrap_or_default();
        Self {
            customization: RwSignal::new(customization),
            error: RwSignal::new(None),
        }
    }

    fn persist(&self) {
        if !storage::save(keys::CUSTOMIZATION, &self.customization.get_untracked()) {
            self.error
                .set(Some("Could not save customization".to_string()));
        }
    }

    /// Merge a partial edit into the aggregate and write it back whole.
    pub fn update(&self, edit: impl FnOnce(&mut Customization)) {
        self.customization.update(edit);
        self.persist();
    }

    /// Back to the defaults, persisted immediately.
    pub fn reset(&self) {
        self.customization.set(Customization::default());
        self.persist();
    }
}

pub fn use_customization() -> CustomizationStore {
    use_context::<CustomizationStore>()
        .expect("CustomizationStore not found. Provide it at the app root.")
}
