//! Text helpers shared by the views.

use crate::i18n::Language;
use crate::model::Patient;
use chrono::{DateTime, Datelike, Utc};

/// Cards show at most this many characters of the description.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

const MESES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Cuts `text` to `max_chars` characters and appends `...` when anything was cut.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Long-form calendar date: `January 1, 2024` or `1 de enero de 2024`.
pub fn format_timestamp(ts: DateTime<Utc>, language: Language) -> String {
    match language {
        Language::En => ts.format("%B %-d, %Y").to_string(),
        Language::Es => format!(
            "{} de {} de {}",
            ts.day(),
            MESES[ts.month0() as usize],
            ts.year()
        ),
    }
}

/// The record's creation date, or the raw value when it cannot be parsed.
pub fn format_date(patient: &Patient, language: Language) -> String {
    patient
        .created_timestamp()
        .map(|ts| format_timestamp(ts, language))
        .unwrap_or_else(|| patient.created_at.clone())
}
