//! # Record Manager Actor
//!
//! The controller behind the patient screen. One Tokio task owns [`ManagerState`]
//! and handles, one at a time:
//!
//! - requests from [`ManagerClient`](super::ManagerClient) handles,
//! - completions of store calls it spawned,
//! - its two timers: the search debounce and the notification auto-dismiss.
//!
//! Store calls run in their own tasks, so keystrokes and dismissals are still
//! handled while a request is in flight. Their results come back as
//! [`Completion`] events and are applied on the actor's own turn; nothing else
//! writes to the state.
//!
//! ## Consistency
//!
//! After every successful write the whole list is refetched instead of patching
//! the local copy. List responses carry a sequence number and a successful
//! response older than one already applied is dropped, so a slow early reload
//! cannot overwrite a newer one. A failed load applies nothing and does not count.

use super::error::ManagerError;
use super::message::{AfterLoad, Completion, ManagerRequest, Response, SubmitMode};
use super::search;
use super::state::{ManagerState, ModalState};
use crate::i18n::Translator;
use crate::model::{
    dedup_by_id, sort_newest_first, Confirmation, Notification, NotificationKind, Patient,
    PatientForm,
};
use crate::store::{RecordAccessError, RecordStore};
use crate::validation;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, error, info, warn};

/// Timing and channel settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Pause between the last keystroke and recomputing the filtered view.
    pub search_delay: Duration,
    /// How long a notification stays up.
    pub notification_duration: Duration,
    pub buffer_size: usize,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            search_delay: Duration::from_millis(300),
            notification_duration: Duration::from_secs(4),
            buffer_size: 32,
        }
    }
}

enum Wake {
    Request(ManagerRequest),
    Completion(Completion),
    SearchSettled,
    NotificationExpired,
}

/// The manager's event loop and state.
pub struct ManagerActor {
    receiver: mpsc::Receiver<ManagerRequest>,
    completions: mpsc::UnboundedReceiver<Completion>,
    completion_sender: mpsc::UnboundedSender<Completion>,
    store: Arc<dyn RecordStore>,
    translator: Arc<dyn Translator>,
    config: ManagerConfig,
    state: ManagerState,
    search_deadline: Option<Instant>,
    notification_deadline: Option<Instant>,
    load_seq: u64,
    applied_seq: u64,
}

impl ManagerActor {
    pub(super) fn new(
        receiver: mpsc::Receiver<ManagerRequest>,
        store: Arc<dyn RecordStore>,
        translator: Arc<dyn Translator>,
        config: ManagerConfig,
    ) -> Self {
        let (completion_sender, completions) = mpsc::unbounded_channel();
        Self {
            receiver,
            completions,
            completion_sender,
            store,
            translator,
            config,
            state: ManagerState::default(),
            search_deadline: None,
            notification_deadline: None,
            load_seq: 0,
            applied_seq: 0,
        }
    }

    /// Runs until every client is dropped. Starts the session's first load immediately.
    pub async fn run(mut self) {
        info!("Manager started");
        self.start_load(AfterLoad::Reply(None));

        loop {
            let search_at = self.search_deadline;
            let dismiss_at = self.notification_deadline;

            let wake = tokio::select! {
                request = self.receiver.recv() => match request {
                    Some(request) => Wake::Request(request),
                    None => break,
                },
                Some(done) = self.completions.recv() => Wake::Completion(done),
                _ = sleep_until(search_at.unwrap_or_else(Instant::now)), if search_at.is_some() => {
                    Wake::SearchSettled
                }
                _ = sleep_until(dismiss_at.unwrap_or_else(Instant::now)), if dismiss_at.is_some() => {
                    Wake::NotificationExpired
                }
            };

            match wake {
                Wake::Request(request) => self.handle_request(request),
                Wake::Completion(done) => self.handle_completion(done),
                Wake::SearchSettled => self.apply_search(),
                Wake::NotificationExpired => {
                    debug!("Notification expired");
                    self.dismiss_notification();
                }
            }
        }

        info!(records = self.state.records.len(), "Manager shutdown");
    }

    fn handle_request(&mut self, request: ManagerRequest) {
        match request {
            ManagerRequest::Load { respond_to } => {
                self.start_load(AfterLoad::Reply(Some(respond_to)));
            }
            ManagerRequest::SetSearchTerm { term, respond_to } => {
                debug!(%term, "Search term changed");
                self.state.search_term = term;
                self.refresh_view();
                let _ = respond_to.send(Ok(()));
            }
            ManagerRequest::Submit {
                form,
                editing,
                respond_to,
            } => self.submit(form, editing, respond_to),
            ManagerRequest::RequestDelete {
                id,
                name,
                respond_to,
            } => {
                debug!(%id, %name, "Delete requested");
                self.state.confirmation = Confirmation::open(id, name);
                let _ = respond_to.send(Ok(()));
            }
            ManagerRequest::ConfirmDelete { respond_to } => self.confirm_delete(respond_to),
            ManagerRequest::CancelDelete { respond_to } => {
                debug!("Delete cancelled");
                self.state.confirmation.close();
                let _ = respond_to.send(Ok(()));
            }
            ManagerRequest::OpenCreate { respond_to } => {
                self.state.modal = ModalState::for_create();
                let _ = respond_to.send(Ok(()));
            }
            ManagerRequest::OpenEdit {
                patient,
                respond_to,
            } => {
                debug!(id = %patient.id, "Editing");
                self.state.modal = ModalState::for_edit(patient);
                let _ = respond_to.send(Ok(()));
            }
            ManagerRequest::CloseModal { respond_to } => {
                let result = if self.state.is_submitting {
                    Err(ManagerError::Busy)
                } else {
                    self.state.modal.close();
                    Ok(())
                };
                let _ = respond_to.send(result);
            }
            ManagerRequest::DismissNotification { respond_to } => {
                self.dismiss_notification();
                let _ = respond_to.send(Ok(()));
            }
            ManagerRequest::Snapshot { respond_to } => {
                let _ = respond_to.send(Ok(self.state.clone()));
            }
        }
    }

    fn handle_completion(&mut self, done: Completion) {
        match done {
            Completion::Loaded { seq, result, then } => {
                let loaded = self.apply_load(seq, result);
                self.finish_load(then, loaded);
            }
            Completion::Saved {
                mode,
                result,
                respond_to,
            } => match result {
                Ok(saved) => {
                    info!(id = %saved.id, ?mode, "Patient saved");
                    let key = match mode {
                        SubmitMode::Create => "notifications.patientCreated",
                        SubmitMode::Update { .. } => "notifications.patientUpdated",
                    };
                    self.notify(NotificationKind::Success, key);
                    self.start_load(AfterLoad::FinishSubmit { saved, respond_to });
                }
                Err(e) => {
                    error!(?mode, error = %e, cause = %e.cause(), "Error submitting patient");
                    let key = match mode {
                        SubmitMode::Create => "notifications.errorCreating",
                        SubmitMode::Update { .. } => "notifications.errorUpdating",
                    };
                    self.notify(NotificationKind::Error, key);
                    self.state.is_submitting = false;
                    let _ = respond_to.send(Err(e.into()));
                }
            },
            Completion::Deleted {
                id,
                result,
                respond_to,
            } => match result {
                Ok(()) => {
                    info!(%id, "Patient deleted");
                    self.notify(NotificationKind::Success, "notifications.patientDeleted");
                    self.start_load(AfterLoad::FinishDelete { respond_to });
                }
                Err(e) => {
                    error!(%id, error = %e, cause = %e.cause(), "Error deleting patient");
                    self.notify(NotificationKind::Error, "notifications.errorDeleting");
                    self.state.confirmation.close();
                    self.state.is_deleting = false;
                    let _ = respond_to.send(Err(e.into()));
                }
            },
        }
    }

    // -------------------------------------------------------------------------
    // Loading
    // -------------------------------------------------------------------------

    fn start_load(&mut self, then: AfterLoad) {
        self.load_seq += 1;
        let seq = self.load_seq;
        debug!(seq, "Loading patients");

        let store = Arc::clone(&self.store);
        let completions = self.completion_sender.clone();
        tokio::spawn(async move {
            let result = store.list().await;
            let _ = completions.send(Completion::Loaded { seq, result, then });
        });
    }

    /// Applies a list response. Only successful responses advance `applied_seq`,
    /// so a failed newer load never hides an older successful one.
    fn apply_load(
        &mut self,
        seq: u64,
        result: Result<Vec<Patient>, RecordAccessError>,
    ) -> Result<(), RecordAccessError> {
        self.state.is_loading_initial = false;
        let stale = seq <= self.applied_seq;

        match result {
            Ok(_) if stale => {
                debug!(seq, applied = self.applied_seq, "Discarding stale list response");
                Ok(())
            }
            Ok(mut records) => {
                self.applied_seq = seq;
                let dropped = dedup_by_id(&mut records);
                if dropped > 0 {
                    warn!(dropped, "List response contained duplicate ids");
                }
                sort_newest_first(&mut records);
                info!(count = records.len(), "Patients loaded");
                self.state.records = records;
                self.refresh_view();
                Ok(())
            }
            Err(e) => {
                error!(seq, error = %e, cause = %e.cause(), "Error loading patients");
                if !stale {
                    self.notify(NotificationKind::Error, "notifications.errorLoading");
                }
                Err(e)
            }
        }
    }

    fn finish_load(&mut self, then: AfterLoad, loaded: Result<(), RecordAccessError>) {
        match then {
            AfterLoad::Reply(respond_to) => {
                if let Some(respond_to) = respond_to {
                    let reply = loaded
                        .map(|()| self.state.records.len())
                        .map_err(ManagerError::from);
                    let _ = respond_to.send(reply);
                }
            }
            AfterLoad::FinishSubmit { saved, respond_to } => {
                self.state.modal.close();
                self.state.is_submitting = false;
                let _ = respond_to.send(Ok(saved));
            }
            AfterLoad::FinishDelete { respond_to } => {
                self.state.confirmation.close();
                self.state.is_deleting = false;
                let _ = respond_to.send(Ok(()));
            }
        }
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Re-derives the list view after the term or the records changed.
    fn refresh_view(&mut self) {
        if search::is_blank(&self.state.search_term) {
            self.search_deadline = None;
            self.state.is_searching = false;
            self.state.filtered = self.state.records.clone();
        } else {
            self.state.is_searching = true;
            self.search_deadline = Some(Instant::now() + self.config.search_delay);
        }
    }

    fn apply_search(&mut self) {
        self.search_deadline = None;
        self.state.filtered = search::filter_records(&self.state.records, &self.state.search_term);
        self.state.is_searching = false;
        debug!(
            term = %self.state.search_term,
            hits = self.state.filtered.len(),
            "Search applied"
        );
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    fn submit(&mut self, form: PatientForm, editing: Option<Patient>, respond_to: Response<Patient>) {
        if self.state.is_submitting {
            debug!("Submit ignored, already submitting");
            let _ = respond_to.send(Err(ManagerError::Busy));
            return;
        }

        self.state.modal.form = form.clone();
        if let Err(errors) = validation::validate(&form, self.translator.as_ref()) {
            debug!(invalid = errors.len(), "Submit blocked by validation");
            self.state.modal.errors = errors.clone();
            let _ = respond_to.send(Err(ManagerError::Invalid(errors)));
            return;
        }
        self.state.modal.errors = Default::default();
        self.state.is_submitting = true;

        let mode = match editing {
            Some(patient) => SubmitMode::Update { id: patient.id },
            None => SubmitMode::Create,
        };
        debug!(?mode, ?form, "Submitting");

        let store = Arc::clone(&self.store);
        let completions = self.completion_sender.clone();
        tokio::spawn(async move {
            let result = match &mode {
                SubmitMode::Create => store.create(&form).await,
                SubmitMode::Update { id } => store.update(id, &form).await,
            };
            let _ = completions.send(Completion::Saved {
                mode,
                result,
                respond_to,
            });
        });
    }

    fn confirm_delete(&mut self, respond_to: Response<()>) {
        if !self.state.confirmation.is_open {
            let _ = respond_to.send(Err(ManagerError::NoPendingDeletion));
            return;
        }
        if self.state.is_deleting {
            let _ = respond_to.send(Err(ManagerError::Busy));
            return;
        }
        self.state.is_deleting = true;

        let id = self.state.confirmation.target_id.clone();
        debug!(%id, "Deleting");
        let store = Arc::clone(&self.store);
        let completions = self.completion_sender.clone();
        tokio::spawn(async move {
            let result = store.delete(&id).await;
            let _ = completions.send(Completion::Deleted {
                id,
                result,
                respond_to,
            });
        });
    }

    // -------------------------------------------------------------------------
    // Notifications
    // -------------------------------------------------------------------------

    fn notify(&mut self, kind: NotificationKind, key: &str) {
        let message = self.translator.t(key, &[]);
        self.state.notification = Notification::shown(kind, message);
        self.notification_deadline = Some(Instant::now() + self.config.notification_duration);
    }

    fn dismiss_notification(&mut self) {
        self.notification_deadline = None;
        self.state.notification.hide();
    }
}
