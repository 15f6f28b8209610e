//! # Manager Messages
//!
//! Requests a [`ManagerClient`](super::ManagerClient) sends to the manager actor,
//! and the completion events the actor's own I/O tasks send back to it.

use super::error::ManagerError;
use super::state::ManagerState;
use crate::model::{Patient, PatientForm};
use crate::store::RecordAccessError;
use tokio::sync::oneshot;

/// One-shot reply channel.
pub type Response<T> = oneshot::Sender<Result<T, ManagerError>>;

/// User-driven operations.
#[derive(Debug)]
pub enum ManagerRequest {
    /// Refetch the list. Replies with the record count once the list is applied.
    Load { respond_to: Response<usize> },
    SetSearchTerm {
        term: String,
        respond_to: Response<()>,
    },
    /// Create (`editing == None`) or update a record.
    Submit {
        form: PatientForm,
        editing: Option<Patient>,
        respond_to: Response<Patient>,
    },
    RequestDelete {
        id: String,
        name: String,
        respond_to: Response<()>,
    },
    ConfirmDelete { respond_to: Response<()> },
    CancelDelete { respond_to: Response<()> },
    OpenCreate { respond_to: Response<()> },
    OpenEdit {
        patient: Patient,
        respond_to: Response<()>,
    },
    CloseModal { respond_to: Response<()> },
    DismissNotification { respond_to: Response<()> },
    Snapshot { respond_to: Response<ManagerState> },
}

/// Whether a submission creates or updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SubmitMode {
    Create,
    Update { id: String },
}

/// What to do once a list response has been handled.
#[derive(Debug)]
pub(crate) enum AfterLoad {
    Reply(Option<Response<usize>>),
    FinishSubmit {
        saved: Patient,
        respond_to: Response<Patient>,
    },
    FinishDelete { respond_to: Response<()> },
}

/// Results of store calls made off the actor's loop.
#[derive(Debug)]
pub(crate) enum Completion {
    Loaded {
        seq: u64,
        result: Result<Vec<Patient>, RecordAccessError>,
        then: AfterLoad,
    },
    Saved {
        mode: SubmitMode,
        result: Result<Patient, RecordAccessError>,
        respond_to: Response<Patient>,
    },
    Deleted {
        id: String,
        result: Result<(), RecordAccessError>,
        respond_to: Response<()>,
    },
}
