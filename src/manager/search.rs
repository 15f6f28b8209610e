//! Local search over the loaded records.

use crate::model::{sort_newest_first, Patient};

/// A term that is empty or only whitespace shows the full list.
pub fn is_blank(term: &str) -> bool {
    term.trim().is_empty()
}

/// Records whose name or description contains `term`, ignoring case, newest first.
pub fn filter_records(records: &[Patient], term: &str) -> Vec<Patient> {
    let needle = term.to_lowercase();
    let mut matches: Vec<Patient> = records
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();
    sort_newest_first(&mut matches);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PatientForm;

    fn record(id: &str, name: &str, description: &str, created_at: &str) -> Patient {
        Patient::from_form(id, PatientForm::new(name, "", description, ""), created_at)
    }

    #[test]
    fn test_matches_name_or_description_case_insensitive() {
        let records = vec![
            record("3", "Carla", "Diabetes follow-up", "2024-03-01"),
            record("2", "Bob", "Knee surgery", "2024-02-01"),
            record("1", "Ana DIAZ", "Allergy test", "2024-01-01"),
        ];

        let hits = filter_records(&records, "dia");
        let ids: Vec<_> = hits.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn test_result_is_newest_first_even_from_unsorted_input() {
        let records = vec![
            record("1", "Ana", "check", "2024-01-01"),
            record("2", "Anabel", "check", "2024-05-01"),
        ];

        let hits = filter_records(&records, "ana");
        assert_eq!(hits[0].id, "2");
    }

    #[test]
    fn test_blank_terms() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(!is_blank(" a "));
    }
}
