//! # Form Validation
//!
//! Declarative rules for [`PatientForm`], checked before any network call.
//!
//! Each field lists its rules in order; the first one that fails produces the
//! field's single message, looked up through the [`Translator`]. A form with any
//! failing field cannot be submitted.

use crate::i18n::Translator;
use crate::model::PatientForm;
use regex::Regex;
use reqwest::Url;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]+$").expect("name pattern is a valid regex")
});

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;
pub const DESCRIPTION_MIN_CHARS: usize = 5;

/// A form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Avatar,
    Description,
    Website,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Avatar, Field::Description, Field::Website];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Avatar => "avatar",
            Field::Description => "description",
            Field::Website => "website",
        }
    }

    fn value(self, form: &PatientForm) -> &str {
        match self {
            Field::Name => &form.name,
            Field::Avatar => &form.avatar,
            Field::Description => &form.description,
            Field::Website => &form.website,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    MinChars(usize),
    MaxChars(usize),
    NameCharacters,
    AbsoluteUrl,
}

impl Rule {
    fn holds(self, value: &str) -> bool {
        match self {
            Rule::Required => !value.trim().is_empty(),
            Rule::MinChars(min) => value.chars().count() >= min,
            Rule::MaxChars(max) => value.chars().count() <= max,
            Rule::NameCharacters => NAME_PATTERN.is_match(value),
            Rule::AbsoluteUrl => is_absolute_url(value),
        }
    }
}

/// `(rule, message key)` pairs in evaluation order.
fn rules(field: Field) -> &'static [(Rule, &'static str)] {
    match field {
        Field::Name => &[
            (Rule::Required, "validation.nameRequired"),
            (Rule::MinChars(NAME_MIN_CHARS), "validation.nameMinLength"),
            (Rule::MaxChars(NAME_MAX_CHARS), "validation.nameMaxLength"),
            (Rule::NameCharacters, "validation.nameInvalid"),
        ],
        Field::Avatar => &[
            (Rule::Required, "validation.avatarRequired"),
            (Rule::AbsoluteUrl, "validation.avatarInvalid"),
        ],
        Field::Description => &[
            (Rule::Required, "validation.descriptionRequired"),
            (Rule::MinChars(DESCRIPTION_MIN_CHARS), "validation.descriptionMinLength"),
        ],
        Field::Website => &[
            (Rule::Required, "validation.websiteRequired"),
            (Rule::AbsoluteUrl, "validation.websiteInvalid"),
        ],
    }
}

/// True when `value` parses without a base URL and names a host.
pub fn is_absolute_url(value: &str) -> bool {
    Url::parse(value.trim()).is_ok_and(|url| url.has_host())
}

/// The first failed rule of one field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: Field,
    pub rule: Rule,
    pub message: String,
}

/// All field errors of one form, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} invalid field(s)", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message attached to `field`, if it failed.
    pub fn message(&self, field: Field) -> Option<&str> {
        self.get(field).map(|e| e.message.as_str())
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }
}

/// Checks one field and returns its first violation.
pub fn validate_field(
    field: Field,
    form: &PatientForm,
    translator: &dyn Translator,
) -> Option<ValidationError> {
    let value = field.value(form);
    rules(field)
        .iter()
        .find(|(rule, _)| !rule.holds(value))
        .map(|&(rule, key)| ValidationError {
            field,
            rule,
            message: translator.t(key, &[]),
        })
}

/// Checks the whole form.
pub fn validate(form: &PatientForm, translator: &dyn Translator) -> Result<(), ValidationErrors> {
    let errors: Vec<_> = Field::ALL
        .iter()
        .filter_map(|&field| validate_field(field, form, translator))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { errors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, Language};

    fn valid_form() -> PatientForm {
        PatientForm::new(
            "Ana García",
            "https://cdn.example.com/ana.png",
            "Annual check-up",
            "https://ana.example.com",
        )
    }

    fn rule_for(form: &PatientForm, field: Field) -> Option<Rule> {
        let catalog = Catalog::new(Language::En);
        validate_field(field, form, &catalog).map(|e| e.rule)
    }

    #[test]
    fn test_accepts_well_formed_payload() {
        let catalog = Catalog::new(Language::En);
        assert!(validate(&valid_form(), &catalog).is_ok());
    }

    #[test]
    fn test_name_rules() {
        let mut form = valid_form();

        form.name = "A".into();
        assert_eq!(rule_for(&form, Field::Name), Some(Rule::MinChars(2)));

        form.name = "   ".into();
        assert_eq!(rule_for(&form, Field::Name), Some(Rule::Required));

        form.name = "x".repeat(51);
        assert_eq!(rule_for(&form, Field::Name), Some(Rule::MaxChars(50)));

        form.name = "R2 D2".into();
        assert_eq!(rule_for(&form, Field::Name), Some(Rule::NameCharacters));

        form.name = "Ana García".into();
        assert_eq!(rule_for(&form, Field::Name), None);

        form.name = "Íñigo Muñoz".into();
        assert_eq!(rule_for(&form, Field::Name), None);
    }

    #[test]
    fn test_url_and_description_rules() {
        let mut form = valid_form();
        form.avatar = "not-a-url".into();
        form.description = "hi".into();
        form.website = String::new();

        let catalog = Catalog::new(Language::En);
        let errors = validate(&form, &catalog).unwrap_err();

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(Field::Avatar).unwrap().rule, Rule::AbsoluteUrl);
        assert_eq!(errors.get(Field::Description).unwrap().rule, Rule::MinChars(5));
        assert_eq!(errors.get(Field::Website).unwrap().rule, Rule::Required);
        assert!(errors.get(Field::Name).is_none());
    }

    #[test]
    fn test_messages_are_localized() {
        let mut form = valid_form();
        form.description = "hi".into();

        let english = validate(&form, &Catalog::new(Language::En)).unwrap_err();
        let spanish = validate(&form, &Catalog::new(Language::Es)).unwrap_err();

        assert_eq!(
            english.message(Field::Description),
            Some("Description must be at least 5 characters")
        );
        assert_eq!(
            spanish.message(Field::Description),
            Some("La descripción debe tener al menos 5 caracteres")
        );
    }

    #[test]
    fn test_absolute_url() {
        assert!(is_absolute_url("https://x/y.png"));
        assert!(is_absolute_url("http://localhost:8080/a"));
        assert!(!is_absolute_url("not-a-url"));
        assert!(!is_absolute_url("/relative/path"));
        assert!(!is_absolute_url("mailto:someone@example.com"));
    }
}
