//! The data aggregation store.
//!
//! Holds the four remote-backed collections plus loading/error state.
//! Initial load fetches all four concurrently and falls back, per domain, to
//! the local-storage snapshot or the hardcoded dataset when the backend is
//! unreachable. Every successful mutation recomputes the in-memory
//! collection, mirrors it to its storage key, and raises a toast; a failed
//! mutation only raises a toast. State stays as it was: nothing was applied
//! optimistically, so there is nothing to roll back.
//!
//! There is deliberately no request queue and no ordering guarantee between
//! overlapping mutations: the last response to arrive wins.

use contracts::domain::order::{Order, OrderDraft, OrderPatch};
use contracts::domain::payment_method::{PaymentMethod, PaymentMethodDraft, PaymentMethodPatch};
use contracts::domain::service::{Service, ServiceDraft, ServicePatch};
use contracts::domain::site_settings::{SiteSettings, SiteSettingsPatch};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::shared::defaults;
use crate::shared::export::Backup;
use crate::shared::i18n::{t, Key};
use crate::shared::storage::{self, keys};
use crate::shared::toast::ToastService;
use crate::state::collections::{remove_by_id, replace_by_id};
use crate::state::source::select;
use crate::state::theme::AppearanceStore;

#[derive(Clone, Copy)]
pub struct DataStore {
    pub services: RwSignal<Vec<Service>>,
    pub payment_methods: RwSignal<Vec<PaymentMethod>>,
    pub orders: RwSignal<Vec<Order>>,
    pub site_settings: RwSignal<SiteSettings>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    toasts: ToastService,
    appearance: AppearanceStore,
}

impl DataStore {
    pub fn new(toasts: ToastService, appearance: AppearanceStore) -> Self {
        Self {
            services: RwSignal::new(Vec::new()),
            payment_methods: RwSignal::new(Vec::new()),
            orders: RwSignal::new(Vec::new()),
            site_settings: RwSignal::new(SiteSettings::default()),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            toasts,
            appearance,
        }
    }

    fn tr(&self, key: Key) -> String {
        t(self.appearance.language.get_untracked(), key).to_string()
    }

    // ------------------------------------------------------------------
    // Initial load
    // ------------------------------------------------------------------

    /// Fetch all four domains concurrently. On combined failure the error
    /// banner is set and each domain falls back to its snapshot or default.
    pub fn refresh(self) {
        self.loading.set(true);
        self.error.set(None);

        spawn_local(async move {
            let (services, payment_methods, orders, settings) = futures::join!(
                api::services::get_all(),
                api::payment_methods::get_all(),
                api::orders::get_all(),
                api::site_settings::get(),
            );

            // Site settings carries its own fallback and never fails the
            // combined load.
            let combined_ok = services.is_ok() && payment_methods.is_ok() && orders.is_ok();

            if combined_ok {
                self.services.set(services.unwrap_or_default());
                self.payment_methods.set(payment_methods.unwrap_or_default());
                self.orders.set(orders.unwrap_or_default());
                self.site_settings
                    .set(settings.unwrap_or_else(|_| defaults::default_site_settings()));
            } else {
                self.error.set(Some(self.tr(Key::LoadFailed)));

                self.services.set(
                    select(
                        services,
                        storage::load(keys::SERVICES),
                        defaults::default_services(),
                    )
                    .into_inner(),
                );
                self.payment_methods.set(
                    select(
                        payment_methods,
                        storage::load(keys::PAYMENT_METHODS),
                        defaults::default_payment_methods(),
                    )
                    .into_inner(),
                );
                self.orders.set(
                    select(orders, storage::load(keys::ORDERS), Vec::new()).into_inner(),
                );
                self.site_settings.set(
                    select(
                        settings,
                        storage::load(keys::SITE_SETTINGS),
                        defaults::default_site_settings(),
                    )
                    .into_inner(),
                );
            }

            self.loading.set(false);
        });
    }

    // ------------------------------------------------------------------
    // Storage mirrors
    // ------------------------------------------------------------------

    fn mirror_services(&self) {
        storage::save(keys::SERVICES, &self.services.get_untracked());
    }

    fn mirror_payment_methods(&self) {
        storage::save(keys::PAYMENT_METHODS, &self.payment_methods.get_untracked());
    }

    fn mirror_orders(&self) {
        storage::save(keys::ORDERS, &self.orders.get_untracked());
    }

    fn mirror_site_settings(&self) {
        storage::save(keys::SITE_SETTINGS, &self.site_settings.get_untracked());
    }

    // ------------------------------------------------------------------
    // Services
    // ------------------------------------------------------------------

    pub fn add_service(self, draft: ServiceDraft) {
        spawn_local(async move {
            match api::services::create(&draft).await {
                Ok(created) => {
                    self.services.update(|list| list.push(created));
                    self.mirror_services();
                    self.toasts.success(self.tr(Key::Saved));
                }
                Err(e) => self.toasts.error(format!("{}: {}", self.tr(Key::SaveFailed), e)),
            }
        });
    }

    pub fn update_service(self, id: String, patch: ServicePatch) {
        spawn_local(async move {
            match api::services::update(&id, &patch).await {
                Ok(updated) => {
                    self.services.update(|list| replace_by_id(list, updated));
                    self.mirror_services();
                    self.toasts.success(self.tr(Key::Saved));
                }
                Err(e) => self.toasts.error(format!("{}: {}", self.tr(Key::SaveFailed), e)),
            }
        });
    }

    /// Advanced editor path. Canonical fields go to the backend; the
    /// extended fields stay on the in-memory copy (and its mirror) only.
    /// The remote table has no columns for them, so they are gone after the
    /// next full reload from the backend.
    pub fn save_service_details(self, updated: Service) {
        let patch = ServicePatch {
            name: Some(updated.name.clone()),
            price: Some(updated.price.clone()),
            order: Some(updated.order),
            active: Some(updated.active),
        };
        spawn_local(async move {
            match api::services::update(&updated.id, &patch).await {
                Ok(_remote) => {
                    self.services.update(|list| replace_by_id(list, updated));
                    self.mirror_services();
                    self.toasts.success(self.tr(Key::Saved));
                }
                Err(e) => self.toasts.error(format!("{}: {}", self.tr(Key::SaveFailed), e)),
            }
        });
    }

    pub fn delete_service(self, id: String) {
        spawn_local(async move {
            match api::services::delete(&id).await {
                Ok(()) => {
                    self.services.update(|list| remove_by_id(list, &id));
                    self.mirror_services();
                    self.toasts.success(self.tr(Key::Deleted));
                }
                Err(e) => self.toasts.error(format!("{}: {}", self.tr(Key::DeleteFailed), e)),
            }
        });
    }

    // ------------------------------------------------------------------
    // Payment methods
    // ------------------------------------------------------------------

    pub fn add_payment_method(self, draft: PaymentMethodDraft) {
        spawn_local(async move {
            match api::payment_methods::create(&draft).await {
                Ok(created) => {
                    self.payment_methods.update(|list| list.push(created));
                    self.mirror_payment_methods();
                    self.toasts.success(self.tr(Key::Saved));
                }
                Err(e) => self.toasts.error(format!("{}: {}", self.tr(Key::SaveFailed), e)),
            }
        });
    }

    pub fn update_payment_method(self, id: String, patch: PaymentMethodPatch) {
        spawn_local(async move {
            match api::payment_methods::update(&id, &patch).await {
                Ok(updated) => {
                    self.payment_methods.update(|list| replace_by_id(list, updated));
                    self.mirror_payment_methods();
                    self.toasts.success(self.tr(Key::Saved));
                }
                Err(e) => self.toasts.error(format!("{}: {}", self.tr(Key::SaveFailed), e)),
            }
        });
    }

    pub fn delete_payment_method(self, id: String) {
        spawn_local(async move {
            match api::payment_methods::delete(&id).await {
                Ok(()) => {
                    self.payment_methods.update(|list| remove_by_id(list, &id));
                    self.mirror_payment_methods();
                    self.toasts.success(self.tr(Key::Deleted));
                }
                Err(e) => self.toasts.error(format!("{}: {}", self.tr(Key::DeleteFailed), e)),
            }
        });
    }

    // ------------------------------------------------------------------
    // Orders
    // ------------------------------------------------------------------

    /// Landing-page order placement. Public: no admin token involved.
    pub fn add_order(self, draft: OrderDraft) {
        spawn_local(async move {
            match api::orders::create(&draft).await {
                Ok(created) => {
                    // Newest first, matching the backend ordering.
                    self.orders.update(|list| list.insert(0, created));
                    self.mirror_orders();
                    self.toasts.success(self.tr(Key::OrderPlaced));
                }
                Err(e) => self.toasts.error(format!("{}: {}", self.tr(Key::OrderFailed), e)),
            }
        });
    }

    pub fn set_order_archived(self, id: String, archived: bool) {
        let patch = OrderPatch {
            archived: Some(archived),
            ..Default::default()
        };
        spawn_local(async move {
            match api::orders::update(&id, &patch).await {
                Ok(updated) => {
                    self.orders.update(|list| replace_by_id(list, updated));
                    self.mirror_orders();
                    self.toasts.success(self.tr(Key::Saved));
                }
                Err(e) => self.toasts.error(format!("{}: {}", self.tr(Key::SaveFailed), e)),
            }
        });
    }

    pub fn delete_order(self, id: String) {
        spawn_local(async move {
            match api::orders::delete(&id).await {
                Ok(()) => {
                    self.orders.update(|list| remove_by_id(list, &id));
                    self.mirror_orders();
                    self.toasts.success(self.tr(Key::Deleted));
                }
                Err(e) => self.toasts.error(format!("{}: {}", self.tr(Key::DeleteFailed), e)),
            }
        });
    }

    // ------------------------------------------------------------------
    // Site settings
    // ------------------------------------------------------------------

    pub fn update_site_settings(self, patch: SiteSettingsPatch) {
        spawn_local(async move {
            match api::site_settings::update(&patch).await {
                Ok(updated) => {
                    self.site_settings.set(updated);
                    self.mirror_site_settings();
                    self.toasts.success(self.tr(Key::Saved));
                }
                Err(e) => self.toasts.error(format!("{}: {}", self.tr(Key::SaveFailed), e)),
            }
        });
    }

    // ------------------------------------------------------------------
    // Backup restore
    // ------------------------------------------------------------------

    /// Apply an already-validated backup to state and all four mirrors.
    pub fn restore_backup(self, backup: Backup) {
        self.services.set(backup.services);
        self.payment_methods.set(backup.payment_methods);
        self.orders.set(backup.orders);
        self.site_settings.set(backup.site_settings);
        self.mirror_services();
        self.mirror_payment_methods();
        self.mirror_orders();
        self.mirror_site_settings();
        self.toasts.success(self.tr(Key::BackupRestored));
    }
}

pub fn use_data() -> DataStore {
    use_context::<DataStore>().expect("DataStore not found. Provide it at the app root.")
}
