//! Everything the manager owns and the views draw.

use crate::model::{Confirmation, Notification, Patient, PatientForm};
use crate::validation::ValidationErrors;

/// The create/edit surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub is_open: bool,
    /// `Some` when editing an existing record, `None` when creating.
    pub editing: Option<Patient>,
    pub form: PatientForm,
    pub errors: ValidationErrors,
}

impl ModalState {
    pub fn for_create() -> Self {
        Self {
            is_open: true,
            ..Self::default()
        }
    }

    pub fn for_edit(patient: Patient) -> Self {
        Self {
            is_open: true,
            form: PatientForm::from(&patient),
            editing: Some(patient),
            errors: ValidationErrors::default(),
        }
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }
}

/// Snapshot of the manager's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerState {
    /// Authoritative list, newest first, unique ids.
    pub records: Vec<Patient>,
    pub search_term: String,
    /// What the list view shows.
    pub filtered: Vec<Patient>,
    pub is_loading_initial: bool,
    pub is_searching: bool,
    pub is_submitting: bool,
    pub is_deleting: bool,
    pub notification: Notification,
    pub confirmation: Confirmation,
    pub modal: ModalState,
}

impl Default for ManagerState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            search_term: String::new(),
            filtered: Vec::new(),
            // The first load starts as soon as the manager runs.
            is_loading_initial: true,
            is_searching: false,
            is_submitting: false,
            is_deleting: false,
            notification: Notification::default(),
            confirmation: Confirmation::default(),
            modal: ModalState::default(),
        }
    }
}
