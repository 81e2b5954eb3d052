//! Site settings editor plus the admin password change form.

use contracts::domain::site_settings::SiteSettingsPatch;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::shared::i18n::{t, Key};
use crate::shared::toast::use_toasts;
use crate::state::data::use_data;
use crate::state::theme::use_appearance;

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let data = use_data();
    let appearance = use_appearance();
    let toasts = use_toasts();

    let current = data.site_settings.get_untracked();
    let title = RwSignal::new(current.title);
    let description = RwSignal::new(current.description);
    let order_notice = RwSignal::new(current.order_notice);

    let save = move |_| {
        data.update_site_settings(SiteSettingsPatch {
            title: Some(title.get_untracked()),
            description: Some(description.get_untracked()),
            order_notice: Some(order_notice.get_untracked()),
        });
    };

    let new_password = RwSignal::new(String::new());
    let change_password = move |_| {
        let candidate = new_password.get_untracked();
        spawn_local(async move {
            match api::auth::change_password(candidate).await {
                Ok(()) => {
                    toasts.success(t(appearance.language.get_untracked(), Key::Saved));
                    new_password.set(String::new());
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    view! {
        <div class="panel settings-panel">
            <label>{move || t(appearance.language.get(), Key::Title)}</label>
            <input
                type="text"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />

            <label>{move || t(appearance.language.get(), Key::Description)}</label>
            <input
                type="text"
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            />

            <label>{move || t(appearance.language.get(), Key::OrderNotice)}</label>
            <input
                type="text"
                prop:value=move || order_notice.get()
                on:input=move |ev| order_notice.set(event_target_value(&ev))
            />

            <button on:click=save>{move || t(appearance.language.get(), Key::Save)}</button>

            <hr />

            <label>{move || t(appearance.language.get(), Key::ChangePassword)}</label>
            <input
                type="password"
                prop:value=move || new_password.get()
                on:input=move |ev| new_password.set(event_target_value(&ev))
            />
            <button on:click=change_password>
                {move || t(appearance.language.get(), Key::ChangePassword)}
            </button>
        </div>
    }
}
