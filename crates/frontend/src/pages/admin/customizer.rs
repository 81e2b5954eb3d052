//! Landing-page customizer: hero copy, section visibility, colors.
//! All edits go through the storage-only customization store.

use leptos::prelude::*;

use crate::shared::i18n::{t, Key};
use crate::state::customization::use_customization;
use crate::state::theme::use_appearance;

#[component]
pub fn CustomizerPanel() -> impl IntoView {
    let custom = use_customization();
    let appearance = use_appearance();

    let hero = custom.customization.get_untracked().hero;
    let title_ar = RwSignal::new(hero.title_ar);
    let title_en = RwSignal::new(hero.title_en);
    let subtitle_ar = RwSignal::new(hero.subtitle_ar);
    let subtitle_en = RwSignal::new(hero.subtitle_en);

    let save_hero = move |_| {
        custom.update(|c| {
            c.hero.title_ar = title_ar.get_untracked();
            c.hero.title_en = title_en.get_untracked();
            c.hero.subtitle_ar = subtitle_ar.get_untracked();
            c.hero.subtitle_en = subtitle_en.get_untracked();
        });
    };

    let styles = custom.customization.get_untracked().styles;
    let primary_color = RwSignal::new(styles.primary_color);
    let accent_color = RwSignal::new(styles.accent_color);

    let save_styles = move |_| {
        custom.update(|c| {
            c.styles.primary_color = primary_color.get_untracked();
            c.styles.accent_color = accent_color.get_untracked();
        });
    };

    view! {
        <div class="panel customizer-panel">
            <h3>"Hero"</h3>
            <input
                type="text"
                dir="rtl"
                prop:value=move || title_ar.get()
                on:input=move |ev| title_ar.set(event_target_value(&ev))
            />
            <input
                type="text"
                dir="ltr"
                prop:value=move || title_en.get()
                on:input=move |ev| title_en.set(event_target_value(&ev))
            />
            <input
                type="text"
                dir="rtl"
                prop:value=move || subtitle_ar.get()
                on:input=move |ev| subtitle_ar.set(event_target_value(&ev))
            />
            <input
                type="text"
                dir="ltr"
                prop:value=move || subtitle_en.get()
                on:input=move |ev| subtitle_en.set(event_target_value(&ev))
            />
            <button on:click=save_hero>{move || t(appearance.language.get(), Key::Save)}</button>

            <h3>"Sections"</h3>
            {move || {
                custom
                    .customization
                    .get()
                    .sections
                    .into_iter()
                    .map(|section| {
                        let key = section.key.clone();
                        let toggle_key = section.key.clone();
                        view! {
                            <label class="section-toggle">
                                <input
                                    type="checkbox"
                                    prop:checked=section.visible
                                    on:change=move |_| {
                                        let key = toggle_key.clone();
                                        custom.update(move |c| {
                                            if let Some(s) =
                                                c.sections.iter_mut().find(|s| s.key == key)
                                            {
                                                s.visible = !s.visible;
                                            }
                                        });
                                    }
                                />
                                {key}
                            </label>
                        }
                    })
                    .collect_view()
            }}

            <h3>"Colors"</h3>
            <input
                type="color"
                prop:value=move || primary_color.get()
                on:input=move |ev| primary_color.set(event_target_value(&ev))
            />
            <input
                type="color"
                prop:value=move || accent_color.get()
                on:input=move |ev| accent_color.set(event_target_value(&ev))
            />
            <button on:click=save_styles>{move || t(appearance.language.get(), Key::Save)}</button>

            <hr />
            <button class="danger" on:click=move |_| custom.reset()>
                {move || t(appearance.language.get(), Key::ResetDefaults)}
            </button>
        </div>
    }
}
