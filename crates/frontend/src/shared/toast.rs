//! Toast notifications.
//!
//! Provided once at the app root; every store mutation reports success or
//! failure through here. Toasts dismiss themselves after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

const DISMISS_AFTER_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|list| {
            list.push(Toast { id, kind, message });
        });

        let toasts = self.toasts;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    pub fn list(&self) -> RwSignal<Vec<Toast>> {
        self.toasts
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found. Provide it at the app root.")
}

/// Renders the active toasts in a fixed corner stack.
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toasts();
    let toasts = service.list();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast-success",
                            ToastKind::Error => "toast toast-error",
                        };
                        let id = toast.id;
                        view! {
                            <div class=class on:click=move |_| service.dismiss(id)>
                                {toast.message.clone()}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
