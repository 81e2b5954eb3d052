//! Theme and language preferences, persisted in localStorage.
//!
//! The language also drives the document direction (rtl for Arabic).

use leptos::prelude::*;
use web_sys::window;

use crate::shared::storage::{self, keys};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Theme name used for the CSS hook and the storage key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Language {
    #[default]
    Ar,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "en" => Language::En,
            _ => Language::Ar,
        }
    }

    pub fn dir(&self) -> &'static str {
        match self {
            Language::Ar => "rtl",
            Language::En => "ltr",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::Ar => Language::En,
            Language::En => Language::Ar,
        }
    }
}

/// Reflect the current preferences on the document element.
fn apply_to_document(theme: Theme, language: Language) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
        let _ = body.set_attribute("dir", language.dir());
        let _ = body.set_attribute("lang", language.as_str());
    }
}

#[derive(Clone, Copy)]
pub struct AppearanceStore {
    pub theme: RwSignal<Theme>,
    pub language: RwSignal<Language>,
}

impl AppearanceStore {
    pub fn load() -> Self {
        let theme = storage::load_string(keys::THEME)
            .map(|s| Theme::from_str(&s))
            .unwrap_or_default();
        let language = storage::load_string(keys::LANGUAGE)
            .map(|s| Language::from_str(&s))
            .unwrap_or_default();
        apply_to_document(theme, language);
        Self {
            theme: RwSignal::new(theme),
            language: RwSignal::new(language),
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        storage::save_string(keys::THEME, theme.as_str());
        apply_to_document(theme, self.language.get_untracked());
    }

    pub fn toggle_theme(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }

    pub fn set_language(&self, language: Language) {
        self.language.set(language);
        storage::save_string(keys::LANGUAGE, language.as_str());
        apply_to_document(self.theme.get_untracked(), language);
    }

    pub fn toggle_language(&self) {
        self.set_language(self.language.get_untracked().toggled());
    }
}

pub fn use_appearance() -> AppearanceStore {
    use_context::<AppearanceStore>()
        .expect("AppearanceStore not found. Provide it at the app root.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_string_round_trip() {
        assert_eq!(Theme::from_str(Theme::Light.as_str()), Theme::Light);
        assert_eq!(Theme::from_str("nonsense"), Theme::Dark);
    }

    #[test]
    fn language_direction() {
        assert_eq!(Language::Ar.dir(), "rtl");
        assert_eq!(Language::En.dir(), "ltr");
        assert_eq!(Language::Ar.toggled(), Language::En);
    }
}
