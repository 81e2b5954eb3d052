//! Simple derived statistics over the already-loaded collections.

use leptos::prelude::*;
use std::collections::HashMap;

use crate::shared::i18n::{t, Key};
use crate::state::data::use_data;
use crate::state::theme::use_appearance;

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let data = use_data();
    let appearance = use_appearance();

    let total_services = move || data.services.get().len();
    let active_services = move || data.services.get().iter().filter(|s| s.active).count();
    let total_orders = move || data.orders.get().len();
    let new_orders = move || data.orders.get().iter().filter(|o| !o.archived).count();

    // Orders per service name, busiest first.
    let top_services = move || {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for order in data.orders.get() {
            *counts.entry(order.service_name).or_insert(0) += 1;
        }
        let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(5);
        ranked
    };

    view! {
        <div class="dashboard">
            <div class="stat-cards">
                <div class="stat-card">
                    <span class="stat-value">{total_services}</span>
                    <span class="stat-label">
                        {move || t(appearance.language.get(), Key::TotalServices)}
                    </span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{active_services}</span>
                    <span class="stat-label">
                        {move || t(appearance.language.get(), Key::ActiveServices)}
                    </span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{total_orders}</span>
                    <span class="stat-label">
                        {move || t(appearance.language.get(), Key::TotalOrders)}
                    </span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{new_orders}</span>
                    <span class="stat-label">
                        {move || t(appearance.language.get(), Key::NewOrders)}
                    </span>
                </div>
            </div>

            <table class="top-services">
                <tbody>
                    {move || {
                        top_services()
                            .into_iter()
                            .map(|(name, count)| {
                                view! {
                                    <tr>
                                        <td>{name}</td>
                                        <td>{count}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
