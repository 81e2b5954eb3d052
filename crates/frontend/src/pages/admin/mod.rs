//! Admin panel: login gate plus the manager screens.
//!
//! "Authenticated" is nothing more than component state holding a bearer
//! token in memory; reloading the page logs out.

pub mod backup;
pub mod customizer;
pub mod dashboard;
pub mod login;
pub mod orders_panel;
pub mod payments_panel;
pub mod services_panel;
pub mod settings_panel;

use leptos::prelude::*;

use crate::api;
use crate::shared::i18n::{t, Key};
use crate::state::theme::use_appearance;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Dashboard,
    Services,
    Payments,
    Orders,
    Settings,
    Customizer,
    Backup,
}

impl AdminTab {
    fn label(&self) -> Key {
        match self {
            AdminTab::Dashboard => Key::Dashboard,
            AdminTab::Services => Key::Services,
            AdminTab::Payments => Key::Payments,
            AdminTab::Orders => Key::Orders,
            AdminTab::Settings => Key::Settings,
            AdminTab::Customizer => Key::Customizer,
            AdminTab::Backup => Key::Backup,
        }
    }

    fn all() -> [AdminTab; 7] {
        [
            AdminTab::Dashboard,
            AdminTab::Services,
            AdminTab::Payments,
            AdminTab::Orders,
            AdminTab::Settings,
            AdminTab::Customizer,
            AdminTab::Backup,
        ]
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let authenticated = RwSignal::new(api::auth::is_logged_in());

    view! {
        <Show
            when=move || authenticated.get()
            fallback=move || {
                view! {
                    <login::LoginGate on_login=Callback::new(move |_| authenticated.set(true)) />
                }
            }
        >
            <AdminShell on_logout=Callback::new(move |_| {
                api::auth::logout();
                authenticated.set(false);
            }) />
        </Show>
    }
}

#[component]
fn AdminShell(#[prop(into)] on_logout: Callback<()>) -> impl IntoView {
    let appearance = use_appearance();
    let active_tab = RwSignal::new(AdminTab::Dashboard);

    view! {
        <div class="admin">
            <header class="admin-header">
                <h1>{move || t(appearance.language.get(), Key::AdminPanel)}</h1>
                <button on:click=move |_| on_logout.run(())>
                    {move || t(appearance.language.get(), Key::Logout)}
                </button>
            </header>

            <nav class="admin-nav">
                {AdminTab::all()
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class=move || {
                                    if active_tab.get() == tab { "tab active" } else { "tab" }
                                }
                                on:click=move |_| active_tab.set(tab)
                            >
                                {move || t(appearance.language.get(), tab.label())}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <main class="admin-body">
                {move || match active_tab.get() {
                    AdminTab::Dashboard => view! { <dashboard::DashboardPanel /> }.into_any(),
                    AdminTab::Services => view! { <services_panel::ServicesPanel /> }.into_any(),
                    AdminTab::Payments => view! { <payments_panel::PaymentsPanel /> }.into_any(),
                    AdminTab::Orders => view! { <orders_panel::OrdersPanel /> }.into_any(),
                    AdminTab::Settings => view! { <settings_panel::SettingsPanel /> }.into_any(),
                    AdminTab::Customizer => view! { <customizer::CustomizerPanel /> }.into_any(),
                    AdminTab::Backup => view! { <backup::BackupPanel /> }.into_any(),
                }}
            </main>
        </div>
    }
}
