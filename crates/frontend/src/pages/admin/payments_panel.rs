//! Payment methods manager.

use contracts::domain::payment_method::{PaymentMethod, PaymentMethodDraft, PaymentMethodPatch};
use leptos::prelude::*;

use crate::shared::i18n::{t, Key};
use crate::state::data::use_data;
use crate::state::theme::use_appearance;

#[component]
pub fn PaymentsPanel() -> impl IntoView {
    let data = use_data();
    let appearance = use_appearance();

    let new_name = RwSignal::new(String::new());
    let new_details = RwSignal::new(String::new());

    let add = move |_| {
        let draft = PaymentMethodDraft {
            name: new_name.get_untracked().trim().to_string(),
            details: new_details.get_untracked().trim().to_string(),
            active: true,
        };
        if draft.validate().is_err() {
            return;
        }
        data.add_payment_method(draft);
        new_name.set(String::new());
        new_details.set(String::new());
    };

    view! {
        <div class="panel payments-panel">
            <div class="add-form">
                <input
                    type="text"
                    placeholder=move || t(appearance.language.get(), Key::Name)
                    prop:value=move || new_name.get()
                    on:input=move |ev| new_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder=move || t(appearance.language.get(), Key::Details)
                    prop:value=move || new_details.get()
                    on:input=move |ev| new_details.set(event_target_value(&ev))
                />
                <button on:click=add>{move || t(appearance.language.get(), Key::Add)}</button>
            </div>

            {move || {
                data.payment_methods
                    .get()
                    .into_iter()
                    .map(|method| view! { <PaymentMethodRow method=method /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn PaymentMethodRow(method: PaymentMethod) -> impl IntoView {
    let data = use_data();
    let appearance = use_appearance();

    let id = StoredValue::new(method.id.clone());
    let active = method.active;
    let details = RwSignal::new(method.details.clone());

    let toggle_active = move |_| {
        data.update_payment_method(
            id.get_value(),
            PaymentMethodPatch {
                active: Some(!active),
                ..Default::default()
            },
        );
    };

    let save_details = move |_| {
        let value = details.get_untracked().trim().to_string();
        if value.is_empty() {
            return;
        }
        data.update_payment_method(
            id.get_value(),
            PaymentMethodPatch {
                details: Some(value),
                ..Default::default()
            },
        );
    };

    view! {
        <div class="payment-row">
            <strong>{method.name.clone()}</strong>
            <input
                type="text"
                prop:value=move || details.get()
                on:input=move |ev| details.set(event_target_value(&ev))
            />
            <button on:click=save_details>
                {move || t(appearance.language.get(), Key::Save)}
            </button>
            <label>
                <input type="checkbox" prop:checked=active on:change=toggle_active />
                {move || t(appearance.language.get(), Key::Active)}
            </label>
            <button on:click=move |_| data.delete_payment_method(id.get_value())>
                {move || t(appearance.language.get(), Key::Delete)}
            </button>
        </div>
    }
}
