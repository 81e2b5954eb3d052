//! Backup screen: download the four domains as one JSON file; restore from
//! a previously downloaded file. A malformed file is rejected before any
//! state or storage is touched.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

use crate::shared::export::{self, Backup};
use crate::shared::i18n::{t, Key};
use crate::shared::toast::use_toasts;
use crate::state::data::use_data;
use crate::state::theme::use_appearance;

#[component]
pub fn BackupPanel() -> impl IntoView {
    let data = use_data();
    let appearance = use_appearance();
    let toasts = use_toasts();

    let download = move |_| {
        let backup = Backup {
            services: data.services.get_untracked(),
            payment_methods: data.payment_methods.get_untracked(),
            orders: data.orders.get_untracked(),
            site_settings: data.site_settings.get_untracked(),
        };
        if let Err(e) = export::export_backup(&backup, "kyctrust-backup.json") {
            toasts.error(e);
        }
    };

    let restore = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        spawn_local(async move {
            let text = match wasm_bindgen_futures::JsFuture::from(file.text()).await {
                Ok(js) => js.as_string().unwrap_or_default(),
                Err(_) => {
                    toasts.error("Could not read the selected file");
                    return;
                }
            };
            // Validate first; nothing is applied on failure.
            match export::parse_backup(&text) {
                Ok(backup) => data.restore_backup(backup),
                Err(e) => toasts.error(e),
            }
        });
    };

    view! {
        <div class="panel backup-panel">
            <button on:click=download>
                {move || t(appearance.language.get(), Key::ExportBackup)}
            </button>

            <label>{move || t(appearance.language.get(), Key::ImportBackup)}</label>
            <input type="file" accept="application/json" on:change=restore />
        </div>
    }
}
