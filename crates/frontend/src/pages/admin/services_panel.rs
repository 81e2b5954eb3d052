//! Services manager: add, inline edit (including the extended fields that
//! only live client-side), quick active toggle, delete.

use contracts::domain::service::{Service, ServiceDraft, ServicePatch};
use leptos::prelude::*;

use crate::shared::i18n::{t, Key};
use crate::state::data::use_data;
use crate::state::theme::use_appearance;

#[component]
pub fn ServicesPanel() -> impl IntoView {
    let data = use_data();
    let appearance = use_appearance();

    let new_name = RwSignal::new(String::new());
    let new_price = RwSignal::new(String::new());
    let new_order = RwSignal::new(String::new());

    let add = move |_| {
        let draft = ServiceDraft {
            name: new_name.get_untracked().trim().to_string(),
            price: new_price.get_untracked().trim().to_string(),
            order: new_order.get_untracked().trim().parse().unwrap_or(0),
            active: true,
        };
        if draft.validate().is_err() {
            return;
        }
        data.add_service(draft);
        new_name.set(String::new());
        new_price.set(String::new());
        new_order.set(String::new());
    };

    view! {
        <div class="panel services-panel">
            <div class="add-form">
                <input
                    type="text"
                    placeholder=move || t(appearance.language.get(), Key::Name)
                    prop:value=move || new_name.get()
                    on:input=move |ev| new_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder=move || t(appearance.language.get(), Key::Price)
                    prop:value=move || new_price.get()
                    on:input=move |ev| new_price.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder=move || t(appearance.language.get(), Key::Rank)
                    prop:value=move || new_order.get()
                    on:input=move |ev| new_order.set(event_target_value(&ev))
                />
                <button on:click=add>{move || t(appearance.language.get(), Key::Add)}</button>
            </div>

            {move || {
                data.services
                    .get()
                    .into_iter()
                    .map(|service| view! { <ServiceRow service=service /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn ServiceRow(service: Service) -> impl IntoView {
    let data = use_data();
    let appearance = use_appearance();

    let editing = RwSignal::new(false);

    let id = StoredValue::new(service.id.clone());
    let original = StoredValue::new(service.clone());

    let name = RwSignal::new(service.name.clone());
    let price = RwSignal::new(service.price.clone());
    let order = RwSignal::new(service.order.to_string());
    let description = RwSignal::new(service.description.clone().unwrap_or_default());
    let category = RwSignal::new(service.category.clone().unwrap_or_default());
    let processing_time = RwSignal::new(service.processing_time.clone().unwrap_or_default());

    let toggle_active = move |_| {
        let patch = ServicePatch {
            active: Some(!original.get_value().active),
            ..Default::default()
        };
        data.update_service(id.get_value(), patch);
    };

    let save = move |_| {
        // Canonical fields reach the backend; the rest rides along in
        // memory only.
        let mut updated = original.get_value();
        updated.name = name.get_untracked().trim().to_string();
        updated.price = price.get_untracked().trim().to_string();
        updated.order = order.get_untracked().trim().parse().unwrap_or(updated.order);
        updated.description = non_empty(description.get_untracked());
        updated.category = non_empty(category.get_untracked());
        updated.processing_time = non_empty(processing_time.get_untracked());
        if updated.validate().is_err() {
            return;
        }
        data.save_service_details(updated);
        editing.set(false);
    };

    view! {
        <div class="service-row">
            <div class="row-summary">
                <strong>{service.name.clone()}</strong>
                <span>{service.price.clone()}</span>
                <span class="rank">{service.order}</span>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=service.active
                        on:change=toggle_active
                    />
                    {move || t(appearance.language.get(), Key::Active)}
                </label>
                <button on:click=move |_| editing.update(|e| *e = !*e)>
                    {move || t(appearance.language.get(), Key::Details)}
                </button>
                <button on:click=move |_| data.delete_service(id.get_value())>
                    {move || t(appearance.language.get(), Key::Delete)}
                </button>
            </div>

            <Show when=move || editing.get()>
                <div class="row-editor">
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        prop:value=move || order.get()
                        on:input=move |ev| order.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder=move || t(appearance.language.get(), Key::Description)
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Category"
                        prop:value=move || category.get()
                        on:input=move |ev| category.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Processing time"
                        prop:value=move || processing_time.get()
                        on:input=move |ev| processing_time.set(event_target_value(&ev))
                    />
                    <button on:click=save>{move || t(appearance.language.get(), Key::Save)}</button>
                </div>
            </Show>
        </div>
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
