//! The patient list: loading, empty and populated states.

use super::card::PatientCard;
use super::skeleton::render_skeletons;
use crate::i18n::Translator;
use crate::manager::search::is_blank;
use crate::manager::ManagerState;

pub fn render_list(state: &ManagerState, t: &dyn Translator) -> String {
    if state.is_loading_initial {
        return render_skeletons();
    }

    let searching_for = !is_blank(&state.search_term);
    let count = state.filtered.len().to_string();
    let total = state.records.len().to_string();
    let mut summary = t.t("app.showing", &[("count", &count), ("total", &total)]);
    if searching_for {
        summary.push(' ');
        summary.push_str(&t.t("app.for", &[("term", state.search_term.as_str())]));
    }

    let body = if state.is_searching {
        render_skeletons()
    } else if state.filtered.is_empty() {
        render_empty(searching_for, t)
    } else {
        state
            .filtered
            .iter()
            .map(|patient| PatientCard::new(patient.clone()).render(t))
            .collect::<Vec<_>>()
            .join("\n\n")
    };

    format!("{summary}\n\n{body}")
}

fn render_empty(searching_for: bool, t: &dyn Translator) -> String {
    if searching_for {
        format!("{}\n{}", t.t("app.noResults", &[]), t.t("app.tryOtherSearch", &[]))
    } else {
        format!(
            "{}\n{}\n[+ {}]",
            t.t("patient.noPatients", &[]),
            t.t("patient.startAdding", &[]),
            t.t("patient.addFirst", &[])
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, Language};
    use crate::model::{Patient, PatientForm};
    use crate::view::skeleton::{render_skeleton, SKELETON_COUNT};

    fn record(id: &str, name: &str) -> Patient {
        Patient::from_form(id, PatientForm::new(name, "", "notes", ""), "2024-01-01")
    }

    fn loaded(records: Vec<Patient>) -> ManagerState {
        ManagerState {
            filtered: records.clone(),
            records,
            is_loading_initial: false,
            ..ManagerState::default()
        }
    }

    #[test]
    fn test_initial_load_shows_only_skeletons() {
        let catalog = Catalog::new(Language::En);
        let text = render_list(&ManagerState::default(), &catalog);
        assert_eq!(text.matches(&render_skeleton()).count(), SKELETON_COUNT);
        assert!(!text.contains("Showing"));
    }

    #[test]
    fn test_empty_collection_prompts_first_patient() {
        let catalog = Catalog::new(Language::En);
        let text = render_list(&loaded(vec![]), &catalog);
        assert!(text.starts_with("Showing 0 of 0 patients"));
        assert!(text.contains("No patients yet"));
        assert!(text.contains("[+ Add first patient]"));
    }

    #[test]
    fn test_search_without_hits() {
        let catalog = Catalog::new(Language::En);
        let mut state = loaded(vec![record("1", "Ana")]);
        state.search_term = "zzz".into();
        state.filtered.clear();

        let text = render_list(&state, &catalog);
        assert!(text.starts_with("Showing 0 of 1 patients for \"zzz\""));
        assert!(text.contains("No results found"));
        assert!(!text.contains("Add first patient"));
    }

    #[test]
    fn test_term_label_shows_term_as_typed() {
        let catalog = Catalog::new(Language::En);
        let mut state = loaded(vec![record("1", "Ana")]);
        state.search_term = "ana ".into();

        let text = render_list(&state, &catalog);
        assert!(text.starts_with("Showing 1 of 1 patients for \"ana \""));
    }

    #[test]
    fn test_pending_search_shows_skeletons_under_summary() {
        let catalog = Catalog::new(Language::Es);
        let mut state = loaded(vec![record("1", "Ana")]);
        state.search_term = "an".into();
        state.is_searching = true;

        let text = render_list(&state, &catalog);
        assert!(text.starts_with("Mostrando 1 de 1 pacientes para \"an\""));
        assert_eq!(text.matches(&render_skeleton()).count(), SKELETON_COUNT);
    }

    #[test]
    fn test_cards_in_filtered_order() {
        let catalog = Catalog::new(Language::En);
        let text = render_list(&loaded(vec![record("2", "Bob"), record("1", "Ana")]), &catalog);
        let bob = text.find("Bob").unwrap();
        let ana = text.find("Ana").unwrap();
        assert!(bob < ana);
    }
}
