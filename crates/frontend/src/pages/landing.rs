//! Public landing page: hero, services grid, testimonials, payment methods,
//! order form. Section visibility and ordering come from the customization
//! store; the content comes from the data store.

use contracts::domain::order::OrderDraft;
use leptos::prelude::*;

use crate::shared::components::{ErrorBox, Spinner};
use crate::shared::i18n::{t, Key};
use crate::state::customization::use_customization;
use crate::state::data::use_data;
use crate::state::theme::{use_appearance, Language};

#[component]
pub fn LandingPage() -> impl IntoView {
    let data = use_data();
    let appearance = use_appearance();
    let custom = use_customization();

    let lang = appearance.language;

    // Landing sections in customizer order, hidden ones dropped.
    let sections = move || {
        let mut sections = custom.customization.get().sections;
        sections.retain(|s| s.visible);
        sections.sort_by_key(|s| s.rank);
        sections
    };

    view! {
        <div class="landing">
            <header class="landing-header">
                <span class="brand">{move || data.site_settings.get().title}</span>
                <div class="header-actions">
                    <button on:click=move |_| appearance.toggle_language()>
                        {move || lang.get().toggled().as_str().to_uppercase()}
                    </button>
                    <button on:click=move |_| appearance.toggle_theme()>
                        {move || appearance.theme.get().toggled().as_str()}
                    </button>
                </div>
            </header>

            <Show when=move || data.error.get().is_some()>
                <ErrorBox
                    message=data.error.get().unwrap_or_default()
                    on_retry=move |_| data.refresh()
                />
            </Show>

            <Show when=move || !data.loading.get() fallback=move || view! { <Spinner /> }>
                {move || {
                    sections()
                        .into_iter()
                        .map(|section| match section.key.as_str() {
                            "hero" => view! { <HeroSection /> }.into_any(),
                            "services" => view! { <ServicesSection /> }.into_any(),
                            "testimonials" => view! { <TestimonialsSection /> }.into_any(),
                            _ => ().into_any(),
                        })
                        .collect_view()
                }}
                <PaymentMethodsSection />
                <OrderSection />
            </Show>

            <footer class="landing-footer">
                <p>{move || data.site_settings.get().description}</p>
            </footer>
        </div>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    let custom = use_customization();
    let appearance = use_appearance();

    let hero = move || custom.customization.get().hero;

    view! {
        <Show when=move || hero().visible>
            <section class="hero">
                <h1>
                    {move || match appearance.language.get() {
                        Language::Ar => hero().title_ar,
                        Language::En => hero().title_en,
                    }}
                </h1>
                <p>
                    {move || match appearance.language.get() {
                        Language::Ar => hero().subtitle_ar,
                        Language::En => hero().subtitle_en,
                    }}
                </p>
                <a href="#order" class="hero-button">
                    {move || match appearance.language.get() {
                        Language::Ar => hero().button_ar,
                        Language::En => hero().button_en,
                    }}
                </a>
            </section>
            <FeatureCards />
        </Show>
    }
}

#[component]
fn FeatureCards() -> impl IntoView {
    let custom = use_customization();
    let appearance = use_appearance();

    view! {
        <section class="features">
            {move || {
                custom
                    .customization
                    .get()
                    .features
                    .into_iter()
                    .map(|card| {
                        let (title, body) = match appearance.language.get() {
                            Language::Ar => (card.title_ar, card.body_ar),
                            Language::En => (card.title_en, card.body_en),
                        };
                        view! {
                            <div class="feature-card" data-icon=card.icon>
                                <h3>{title}</h3>
                                <p>{body}</p>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </section>
    }
}

#[component]
fn ServicesSection() -> impl IntoView {
    let data = use_data();
    let appearance = use_appearance();

    // Active only; ranked for display.
    let visible_services = move || {
        let mut services = data.services.get();
        services.retain(|s| s.active);
        services.sort_by_key(|s| s.order);
        services
    };

    view! {
        <section class="services" id="services">
            <h2>{move || t(appearance.language.get(), Key::BrowseServices)}</h2>
            <div class="services-grid">
                {move || {
                    visible_services()
                        .into_iter()
                        .map(|service| {
                            view! {
                                <div class="service-card">
                                    <h3>{service.name.clone()}</h3>
                                    <span class="price">{service.price.clone()}</span>
                                    <a href="#order">
                                        {move || t(appearance.language.get(), Key::OrderNow)}
                                    </a>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[component]
fn TestimonialsSection() -> impl IntoView {
    let custom = use_customization();
    let appearance = use_appearance();

    view! {
        <section class="testimonials">
            <h2>{move || t(appearance.language.get(), Key::Testimonials)}</h2>
            {move || {
                custom
                    .customization
                    .get()
                    .testimonials
                    .into_iter()
                    .map(|item| {
                        let quote = match appearance.language.get() {
                            Language::Ar => item.quote_ar,
                            Language::En => item.quote_en,
                        };
                        view! {
                            <blockquote class="testimonial">
                                <p>{quote}</p>
                                <cite>{item.author}</cite>
                                <span class="stars">{"★".repeat(item.rating as usize)}</span>
                            </blockquote>
                        }
                    })
                    .collect_view()
            }}
        </section>
    }
}

#[component]
fn PaymentMethodsSection() -> impl IntoView {
    let data = use_data();
    let appearance = use_appearance();

    let active_methods = move || {
        let mut methods = data.payment_methods.get();
        methods.retain(|m| m.active);
        methods
    };

    view! {
        <section class="payment-methods">
            <h2>{move || t(appearance.language.get(), Key::PaymentMethods)}</h2>
            {move || {
                active_methods()
                    .into_iter()
                    .map(|method| {
                        view! {
                            <div class="payment-method">
                                <strong>{method.name.clone()}</strong>
                                <code>{method.details.clone()}</code>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </section>
    }
}

/// Order form. Validation is the ad-hoc non-empty check; after a successful
/// submit the site's order notice is shown in place of the form.
#[component]
fn OrderSection() -> impl IntoView {
    let data = use_data();
    let appearance = use_appearance();

    let customer_name = RwSignal::new(String::new());
    let service_name = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let placed = RwSignal::new(false);
    let form_error = RwSignal::new(Option::<String>::None);

    let submit = move |_| {
        let draft = OrderDraft {
            customer_name: customer_name.get().trim().to_string(),
            service_name: service_name.get(),
            notes: {
                let n = notes.get();
                if n.trim().is_empty() { None } else { Some(n) }
            },
        };
        if let Err(e) = draft.validate() {
            form_error.set(Some(e));
            return;
        }
        form_error.set(None);
        data.add_order(draft);
        placed.set(true);
    };

    view! {
        <section class="order" id="order">
            <h2>{move || t(appearance.language.get(), Key::OrderNow)}</h2>
            <Show
                when=move || !placed.get()
                fallback=move || {
                    view! {
                        <div class="order-notice">
                            <p>{move || data.site_settings.get().order_notice}</p>
                        </div>
                    }
                }
            >
                <div class="order-form">
                    <label>{move || t(appearance.language.get(), Key::CustomerName)}</label>
                    <input
                        type="text"
                        prop:value=move || customer_name.get()
                        on:input=move |ev| customer_name.set(event_target_value(&ev))
                    />

                    <label>{move || t(appearance.language.get(), Key::ServiceLabel)}</label>
                    <select on:change=move |ev| service_name.set(event_target_value(&ev))>
                        <option value="">"--"</option>
                        {move || {
                            data.services
                                .get()
                                .into_iter()
                                .filter(|s| s.active)
                                .map(|s| {
                                    view! { <option value=s.name.clone()>{s.name.clone()}</option> }
                                })
                                .collect_view()
                        }}
                    </select>

                    <label>{move || t(appearance.language.get(), Key::Notes)}</label>
                    <input
                        type="text"
                        prop:value=move || notes.get()
                        on:input=move |ev| notes.set(event_target_value(&ev))
                    />

                    <Show when=move || form_error.get().is_some()>
                        <p class="form-error">{move || form_error.get().unwrap_or_default()}</p>
                    </Show>

                    <button on:click=submit>
                        {move || t(appearance.language.get(), Key::Submit)}
                    </button>
                </div>
            </Show>
        </section>
    }
}
