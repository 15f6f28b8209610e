//! # Localization
//!
//! All user-facing text goes through a [`Translator`]: `t(key, params)` returns the
//! string for the active language with `{{param}}` placeholders filled in.
//! Unknown keys come back unchanged so a missing entry is visible instead of blank.
//!
//! [`Catalog`] is the bundled implementation with English and Spanish tables.
//! Its language can be switched at runtime; text produced afterwards uses the new one.

mod en;
mod es;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};
use thiserror::Error;
use tracing::info;

/// Supported languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(Language::En),
            "es" | "es-es" | "spanish" | "español" => Ok(Language::Es),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// Key-to-string lookup for the active language.
pub trait Translator: Send + Sync {
    /// Looks up `key` and substitutes each `{{name}}` with its value from `params`.
    fn t(&self, key: &str, params: &[(&str, &str)]) -> String;

    /// The language `t` currently answers in.
    fn language(&self) -> Language;
}

/// Replaces `{{name}}` placeholders; unmatched placeholders are left as written.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    params
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{{{name}}}}}"), value)
        })
}

/// Bundled English/Spanish tables with a runtime language switch.
#[derive(Debug, Default)]
pub struct Catalog {
    language: RwLock<Language>,
}

impl Catalog {
    pub fn new(language: Language) -> Self {
        Self {
            language: RwLock::new(language),
        }
    }

    pub fn set_language(&self, language: Language) {
        *self.language.write().unwrap_or_else(PoisonError::into_inner) = language;
        info!(%language, "Language switched");
    }

    fn lookup(language: Language, key: &str) -> Option<&'static str> {
        match language {
            Language::En => en::lookup(key),
            Language::Es => es::lookup(key),
        }
    }
}

impl Translator for Catalog {
    fn t(&self, key: &str, params: &[(&str, &str)]) -> String {
        match Self::lookup(self.language(), key) {
            Some(template) => interpolate(template, params),
            None => key.to_string(),
        }
    }

    fn language(&self) -> Language {
        *self.language.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: &[&str] = &[
        "app.search",
        "app.showing",
        "app.for",
        "app.noResults",
        "app.tryOtherSearch",
        "app.cancel",
        "app.loading",
        "app.language",
        "patient.title",
        "patient.addNew",
        "patient.addFirst",
        "patient.editPatient",
        "patient.deletePatient",
        "patient.noPatients",
        "patient.startAdding",
        "patient.name",
        "patient.namePlaceholder",
        "patient.avatar",
        "patient.avatarPlaceholder",
        "patient.description",
        "patient.descriptionPlaceholder",
        "patient.website",
        "patient.websitePlaceholder",
        "patient.patientId",
        "patient.createdAt",
        "patient.showMore",
        "patient.showLess",
        "validation.nameRequired",
        "validation.nameMinLength",
        "validation.nameMaxLength",
        "validation.nameInvalid",
        "validation.avatarRequired",
        "validation.avatarInvalid",
        "validation.descriptionRequired",
        "validation.descriptionMinLength",
        "validation.websiteRequired",
        "validation.websiteInvalid",
        "notifications.patientCreated",
        "notifications.patientUpdated",
        "notifications.patientDeleted",
        "notifications.errorLoading",
        "notifications.errorCreating",
        "notifications.errorUpdating",
        "notifications.errorDeleting",
        "confirmDialog.deleteTitle",
        "confirmDialog.deleteMessage",
        "confirmDialog.deleteConfirm",
        "confirmDialog.deleteCancel",
    ];

    #[test]
    fn test_both_tables_cover_every_key() {
        for key in KEYS {
            assert!(en::lookup(key).is_some(), "missing English entry {key}");
            assert!(es::lookup(key).is_some(), "missing Spanish entry {key}");
        }
    }

    #[test]
    fn test_interpolation_and_switch() {
        let catalog = Catalog::new(Language::En);
        let params = [("count", "2"), ("total", "5")];
        assert_eq!(catalog.t("app.showing", &params), "Showing 2 of 5 patients");

        catalog.set_language(Language::Es);
        assert_eq!(catalog.language(), Language::Es);
        assert_eq!(catalog.t("app.showing", &params), "Mostrando 2 de 5 pacientes");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        let catalog = Catalog::default();
        assert_eq!(catalog.t("nope.missing", &[]), "nope.missing");
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("ES".parse::<Language>(), Ok(Language::Es));
        assert_eq!("en-US".parse::<Language>(), Ok(Language::En));
        assert!("fr".parse::<Language>().is_err());
    }
}
