//! Orders manager: filter, archive toggle, delete, CSV export.

use leptos::prelude::*;

use crate::shared::export;
use crate::shared::i18n::{t, Key};
use crate::shared::toast::use_toasts;
use crate::state::data::use_data;
use crate::state::theme::use_appearance;

#[derive(Clone, Copy, PartialEq, Eq)]
enum OrderFilter {
    All,
    New,
    Archived,
}

#[component]
pub fn OrdersPanel() -> impl IntoView {
    let data = use_data();
    let appearance = use_appearance();
    let toasts = use_toasts();

    let filter = RwSignal::new(OrderFilter::New);

    let visible_orders = move || {
        let orders = data.orders.get();
        match filter.get() {
            OrderFilter::All => orders,
            OrderFilter::New => orders.into_iter().filter(|o| !o.archived).collect(),
            OrderFilter::Archived => orders.into_iter().filter(|o| o.archived).collect(),
        }
    };

    let export_csv = move |_| {
        if let Err(e) = export::export_csv(&data.orders.get_untracked(), "orders.csv") {
            toasts.error(e);
        }
    };

    view! {
        <div class="panel orders-panel">
            <div class="orders-toolbar">
                <button on:click=move |_| filter.set(OrderFilter::New)>
                    {move || t(appearance.language.get(), Key::NewOrders)}
                </button>
                <button on:click=move |_| filter.set(OrderFilter::Archived)>
                    {move || t(appearance.language.get(), Key::Archive)}
                </button>
                <button on:click=move |_| filter.set(OrderFilter::All)>
                    {move || t(appearance.language.get(), Key::Orders)}
                </button>
                <button on:click=export_csv>
                    {move || t(appearance.language.get(), Key::ExportCsv)}
                </button>
            </div>

            <table class="orders-table">
                <thead>
                    <tr>
                        <th>{move || t(appearance.language.get(), Key::CustomerName)}</th>
                        <th>{move || t(appearance.language.get(), Key::ServiceLabel)}</th>
                        <th>{move || t(appearance.language.get(), Key::Notes)}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        visible_orders()
                            .into_iter()
                            .map(|order| {
                                let id_archive = order.id.clone();
                                let id_delete = order.id.clone();
                                let archived = order.archived;
                                view! {
                                    <tr class=if archived { "archived" } else { "" }>
                                        <td>{order.customer_name.clone()}</td>
                                        <td>{order.service_name.clone()}</td>
                                        <td>{order.notes.clone().unwrap_or_default()}</td>
                                        <td>
                                            <span class="timestamp">
                                                {order.timestamp.format("%Y-%m-%d %H:%M").to_string()}
                                            </span>
                                            <button on:click=move |_| {
                                                data.set_order_archived(id_archive.clone(), !archived)
                                            }>
                                                {move || {
                                                    let key = if archived {
                                                        Key::Unarchive
                                                    } else {
                                                        Key::Archive
                                                    };
                                                    t(appearance.language.get(), key)
                                                }}
                                            </button>
                                            <button on:click=move |_| {
                                                data.delete_order(id_delete.clone())
                                            }>
                                                {move || t(appearance.language.get(), Key::Delete)}
                                            </button>
                                        </td>
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
