//! Small shared widgets.

use leptos::prelude::*;

use crate::shared::i18n::{t, Key};
use crate::state::theme::use_appearance;

#[component]
pub fn Spinner() -> impl IntoView {
    let appearance = use_appearance();
    view! {
        <div class="spinner">
            <div class="spinner-circle"></div>
            <p>{move || t(appearance.language.get(), Key::Loading)}</p>
        </div>
    }
}

/// Error banner with a retry hook.
#[component]
pub fn ErrorBox(message: String, #[prop(into)] on_retry: Callback<()>) -> impl IntoView {
    let appearance = use_appearance();
    view! {
        <div class="error-box">
            <p>{message}</p>
            <button on:click=move |_| on_retry.run(())>
                {move || t(appearance.language.get(), Key::Retry)}
            </button>
        </div>
    }
}
