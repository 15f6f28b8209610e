//! The patient record and the form payload used to create or edit one.
//!
//! `id` and `created_at` are assigned by the collection that stores the records;
//! the client only ever sends a [`PatientForm`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

/// A patient as returned by the record collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    /// Image URL, or empty when the collection holds no usable image.
    #[serde(default, deserialize_with = "avatar_or_empty")]
    pub avatar: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub website: String,
    pub created_at: String,
}

impl Patient {
    /// Builds a record from a submitted form plus the server-assigned fields.
    pub fn from_form(id: impl Into<String>, form: PatientForm, created_at: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: form.name,
            avatar: form.avatar,
            description: form.description,
            website: form.website,
            created_at: created_at.into(),
        }
    }

    /// Overwrites the editable fields; `id` and `created_at` are kept.
    pub fn apply_form(&mut self, form: PatientForm) {
        self.name = form.name;
        self.avatar = form.avatar;
        self.description = form.description;
        self.website = form.website;
    }

    /// Parses `created_at` into a UTC instant.
    ///
    /// Accepts RFC 3339, a bare `YYYY-MM-DDTHH:MM:SS[.f]` (read as UTC) and a plain
    /// `YYYY-MM-DD` (midnight UTC). Returns `None` for anything else.
    pub fn created_timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Newest-first comparison on `created_at`. Unparseable timestamps sort last.
pub fn newest_first(a: &Patient, b: &Patient) -> Ordering {
    b.created_timestamp().cmp(&a.created_timestamp())
}

/// Stable sort, newest record first.
pub fn sort_newest_first(records: &mut [Patient]) {
    records.sort_by(newest_first);
}

/// Drops records whose `id` was already seen, keeping the first occurrence.
///
/// Returns the number of records removed.
pub fn dedup_by_id(records: &mut Vec<Patient>) -> usize {
    let before = records.len();
    let mut seen = HashSet::with_capacity(before);
    records.retain(|patient| seen.insert(patient.id.clone()));
    before - records.len()
}

// The collection sometimes stores `avatar` as `{}` instead of a string.
fn avatar_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AvatarField {
        Url(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match AvatarField::deserialize(deserializer)? {
        AvatarField::Url(url) => url,
        AvatarField::Other(_) => String::new(),
    })
}

/// The four user-editable fields, sent as the body of create and update calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientForm {
    pub name: String,
    pub avatar: String,
    pub description: String,
    pub website: String,
}

impl PatientForm {
    pub fn new(
        name: impl Into<String>,
        avatar: impl Into<String>,
        description: impl Into<String>,
        website: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            avatar: avatar.into(),
            description: description.into(),
            website: website.into(),
        }
    }
}

impl From<&Patient> for PatientForm {
    fn from(patient: &Patient) -> Self {
        Self {
            name: patient.name.clone(),
            avatar: patient.avatar.clone(),
            description: patient.description.clone(),
            website: patient.website.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient(id: &str, name: &str, created_at: &str) -> Patient {
        Patient {
            id: id.to_string(),
            name: name.to_string(),
            avatar: String::new(),
            description: String::new(),
            website: String::new(),
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_sort_newest_first_mixed_formats() {
        let mut records = vec![
            patient("1", "Ana", "2024-01-01"),
            patient("2", "Bob", "2024-02-01T10:00:00.000Z"),
            patient("3", "Cleo", "not a date"),
            patient("4", "Dan", "2024-01-15T08:30:00"),
        ];
        sort_newest_first(&mut records);

        let names: Vec<_> = records.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Dan", "Ana", "Cleo"]);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let mut records = vec![
            patient("1", "Ana", "2024-01-01"),
            patient("1", "Ana again", "2024-03-01"),
            patient("2", "Bob", "2024-02-01"),
        ];
        let removed = dedup_by_id(&mut records);

        assert_eq!(removed, 1);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Ana");
    }

    #[test]
    fn test_deserialize_object_avatar_as_empty() {
        let json = r#"{"id":"7","name":"Eva","avatar":{},"description":"x","website":"https://e.v","createdAt":"2023-01-11T07:17:47.637Z"}"#;
        let patient: Patient = serde_json::from_str(json).unwrap();

        assert_eq!(patient.avatar, "");
        assert_eq!(patient.created_at, "2023-01-11T07:17:47.637Z");
    }

    #[test]
    fn test_deserialize_missing_optional_fields() {
        let json = r#"{"id":"8","name":"Fede","createdAt":"2024-05-05"}"#;
        let patient: Patient = serde_json::from_str(json).unwrap();

        assert_eq!(patient.description, "");
        assert_eq!(patient.website, "");
        assert_eq!(patient.avatar, "");
    }

    #[test]
    fn test_apply_form_keeps_server_fields() {
        let mut record = patient("9", "Gus", "2024-01-01");
        record.apply_form(PatientForm::new("Gustavo", "https://a/b.png", "Updated notes", "https://g.us"));

        assert_eq!(record.id, "9");
        assert_eq!(record.created_at, "2024-01-01");
        assert_eq!(record.name, "Gustavo");
    }
}
