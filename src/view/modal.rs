//! Create/edit form.

use crate::i18n::Translator;
use crate::manager::{ManagerState, ModalState};
use crate::validation::Field;

fn label_keys(field: Field) -> (&'static str, &'static str) {
    match field {
        Field::Name => ("patient.name", "patient.namePlaceholder"),
        Field::Avatar => ("patient.avatar", "patient.avatarPlaceholder"),
        Field::Description => ("patient.description", "patient.descriptionPlaceholder"),
        Field::Website => ("patient.website", "patient.websitePlaceholder"),
    }
}

fn field_value(modal: &ModalState, field: Field) -> &str {
    match field {
        Field::Name => &modal.form.name,
        Field::Avatar => &modal.form.avatar,
        Field::Description => &modal.form.description,
        Field::Website => &modal.form.website,
    }
}

/// Empty when the modal is closed.
pub fn render_modal(state: &ManagerState, t: &dyn Translator) -> String {
    let modal = &state.modal;
    if !modal.is_open {
        return String::new();
    }

    let action = if modal.editing.is_some() {
        t.t("patient.editPatient", &[])
    } else {
        t.t("patient.addNew", &[])
    };

    let mut lines = vec![format!("== {action} ==")];
    for field in Field::ALL {
        let (label, placeholder) = label_keys(field);
        let value = field_value(modal, field);
        let shown = if value.is_empty() {
            format!("<{}>", t.t(placeholder, &[]))
        } else {
            value.to_string()
        };
        lines.push(format!("{}: {shown}", t.t(label, &[])));
        if let Some(message) = modal.errors.message(field) {
            lines.push(format!("  ! {message}"));
        }
    }

    let submit = if state.is_submitting {
        t.t("app.loading", &[])
    } else {
        action
    };
    lines.push(format!("[{}]  [{submit}]", t.t("app.cancel", &[])));
    lines.join("\n")
}
