use super::confirm::render_confirm;
use super::list::render_list;
use super::modal::render_modal;
use super::toast::render_toast;
use crate::i18n::Translator;
use crate::manager::ManagerState;

/// Header, search box, list and whichever overlays are open.
pub fn render_screen(state: &ManagerState, t: &dyn Translator) -> String {
    let search = if state.search_term.is_empty() {
        format!("<{}>", t.t("app.search", &[]))
    } else {
        state.search_term.clone()
    };
    let header = format!(
        "# {}   [+ {}]   {}: {}\n? {search}",
        t.t("patient.title", &[]),
        t.t("patient.addNew", &[]),
        t.t("app.language", &[]),
        t.language().code(),
    );

    [
        header,
        render_list(state, t),
        render_modal(state, t),
        render_toast(&state.notification),
        render_confirm(state, t),
    ]
    .into_iter()
    .filter(|section| !section.is_empty())
    .collect::<Vec<_>>()
    .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, Language};
    use crate::model::{Confirmation, Notification, NotificationKind};

    #[test]
    fn test_screen_stacks_open_overlays() {
        let catalog = Catalog::new(Language::En);
        let mut state = ManagerState {
            is_loading_initial: false,
            ..ManagerState::default()
        };
        let plain = render_screen(&state, &catalog);
        assert!(plain.starts_with("# Patient Management   [+ Add Patient]   Language: en"));
        assert!(plain.contains("? <Search patients...>"));
        assert!(!plain.contains("!! "));

        state.notification = Notification::shown(NotificationKind::Success, "Patient deleted successfully");
        state.confirmation = Confirmation::open("1", "Ana");
        let full = render_screen(&state, &catalog);
        let toast = full.find("✔ Patient deleted successfully").unwrap();
        let dialog = full.find("!! Delete patient").unwrap();
        assert!(toast < dialog);
    }
}
