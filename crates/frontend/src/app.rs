use leptos::prelude::*;

use crate::routes::AppRoutes;
use crate::shared::toast::{ToastHost, ToastService};
use crate::state::customization::CustomizationStore;
use crate::state::data::DataStore;
use crate::state::theme::AppearanceStore;

#[component]
pub fn App() -> impl IntoView {
    // Appearance first: the data store reads the language for its toasts.
    let appearance = AppearanceStore::load();
    provide_context(appearance);

    let toasts = ToastService::new();
    provide_context(toasts);

    let data = DataStore::new(toasts, appearance);
    provide_context(data);
    data.refresh();

    provide_context(CustomizationStore::load());

    view! {
        <AppRoutes />
        <ToastHost />
    }
}
