use crate::i18n::Translator;
use crate::manager::ManagerState;

/// The delete confirmation dialog. Empty when no deletion is pending.
pub fn render_confirm(state: &ManagerState, t: &dyn Translator) -> String {
    let confirmation = &state.confirmation;
    if !confirmation.is_open {
        return String::new();
    }

    let confirm = if state.is_deleting {
        t.t("app.loading", &[])
    } else {
        t.t("confirmDialog.deleteConfirm", &[])
    };
    format!(
        "!! {}\n{}\n[{}]  [{confirm}]",
        t.t("confirmDialog.deleteTitle", &[]),
        t.t(
            "confirmDialog.deleteMessage",
            &[("name", &confirmation.target_name)]
        ),
        t.t("confirmDialog.deleteCancel", &[]),
    )
}
