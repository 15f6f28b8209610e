//! # Manager Client
//!
//! Cloneable handle to a running [`ManagerActor`](super::ManagerActor). Every method
//! sends one [`ManagerRequest`] and waits for the actor's reply.
//!
//! Mutating calls reply once the manager is back in an interactive state: a
//! successful `submit` or `confirm_delete` returns after the follow-up reload has
//! been applied, so the caller sees the refreshed list in the next snapshot.

use super::error::ManagerError;
use super::message::{ManagerRequest, Response};
use super::state::ManagerState;
use crate::model::{Patient, PatientForm};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct ManagerClient {
    sender: mpsc::Sender<ManagerRequest>,
}

impl ManagerClient {
    pub fn new(sender: mpsc::Sender<ManagerRequest>) -> Self {
        Self { sender }
    }

    async fn call<T>(
        &self,
        build: impl FnOnce(Response<T>) -> ManagerRequest,
    ) -> Result<T, ManagerError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ManagerError::ActorClosed)?;
        response.await.map_err(|_| ManagerError::ActorDropped)?
    }

    /// Refetches the list; returns the number of records afterwards.
    ///
    /// Fails with [`ManagerError::Access`] when the list call fails; the previous
    /// records stay on screen.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<usize, ManagerError> {
        debug!("Sending request");
        self.call(|respond_to| ManagerRequest::Load { respond_to }).await
    }

    /// Updates the search term. A non-blank term settles after the debounce delay.
    pub async fn set_search_term(&self, term: impl Into<String>) -> Result<(), ManagerError> {
        let term = term.into();
        self.call(|respond_to| ManagerRequest::SetSearchTerm { term, respond_to })
            .await
    }

    /// Validates and saves `form`: updates `editing` when given, creates otherwise.
    #[instrument(skip(self, form, editing))]
    pub async fn submit(
        &self,
        form: PatientForm,
        editing: Option<Patient>,
    ) -> Result<Patient, ManagerError> {
        debug!(?form, editing = ?editing.as_ref().map(|p| &p.id), "Sending request");
        self.call(|respond_to| ManagerRequest::Submit {
            form,
            editing,
            respond_to,
        })
        .await
    }

    /// Opens the delete confirmation for a record.
    #[instrument(skip(self))]
    pub async fn request_delete(
        &self,
        id: impl Into<String> + std::fmt::Debug,
        name: impl Into<String> + std::fmt::Debug,
    ) -> Result<(), ManagerError> {
        let (id, name) = (id.into(), name.into());
        self.call(|respond_to| ManagerRequest::RequestDelete {
            id,
            name,
            respond_to,
        })
        .await
    }

    /// Deletes the record pending confirmation.
    #[instrument(skip(self))]
    pub async fn confirm_delete(&self) -> Result<(), ManagerError> {
        debug!("Sending request");
        self.call(|respond_to| ManagerRequest::ConfirmDelete { respond_to })
            .await
    }

    pub async fn cancel_delete(&self) -> Result<(), ManagerError> {
        self.call(|respond_to| ManagerRequest::CancelDelete { respond_to })
            .await
    }

    pub async fn open_create(&self) -> Result<(), ManagerError> {
        self.call(|respond_to| ManagerRequest::OpenCreate { respond_to })
            .await
    }

    pub async fn open_edit(&self, patient: Patient) -> Result<(), ManagerError> {
        self.call(|respond_to| ManagerRequest::OpenEdit {
            patient,
            respond_to,
        })
        .await
    }

    /// Closes the modal. Refused with [`ManagerError::Busy`] while a submission is in flight.
    pub async fn close_modal(&self) -> Result<(), ManagerError> {
        self.call(|respond_to| ManagerRequest::CloseModal { respond_to })
            .await
    }

    pub async fn dismiss_notification(&self) -> Result<(), ManagerError> {
        self.call(|respond_to| ManagerRequest::DismissNotification { respond_to })
            .await
    }

    /// A copy of the current state, for rendering.
    pub async fn snapshot(&self) -> Result<ManagerState, ManagerError> {
        self.call(|respond_to| ManagerRequest::Snapshot { respond_to })
            .await
    }
}
