use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::shared::i18n::{t, Key};
use crate::state::theme::use_appearance;

#[component]
pub fn LoginGate(#[prop(into)] on_login: Callback<()>) -> impl IntoView {
    let appearance = use_appearance();
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    let submit = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        let candidate = password.get_untracked();
        spawn_local(async move {
            match api::auth::login(candidate).await {
                Ok(()) => on_login.run(()),
                Err(e) => error.set(Some(e)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-gate">
            <h1>{move || t(appearance.language.get(), Key::AdminPanel)}</h1>
            <label>{move || t(appearance.language.get(), Key::Password)}</label>
            <input
                type="password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button disabled=move || busy.get() on:click=submit>
                {move || t(appearance.language.get(), Key::Login)}
            </button>
        </div>
    }
}
