//! Errors returned to [`ManagerClient`](super::ManagerClient) callers.
//!
//! Whatever the error, the manager has already updated its state (notification,
//! modal errors) before replying; callers only need these to react in code.

use crate::store::RecordAccessError;
use crate::validation::ValidationErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManagerError {
    /// The record store call failed.
    #[error(transparent)]
    Access(#[from] RecordAccessError),

    /// The form did not pass validation; nothing was sent.
    #[error("invalid form: {0}")]
    Invalid(ValidationErrors),

    /// The same kind of operation is already in flight.
    #[error("operation already in progress")]
    Busy,

    /// `confirm_delete` was called with no confirmation open.
    #[error("no deletion pending confirmation")]
    NoPendingDeletion,

    #[error("Manager closed")]
    ActorClosed,

    #[error("Manager dropped response channel")]
    ActorDropped,
}
