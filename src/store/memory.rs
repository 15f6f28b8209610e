//! # In-Process Record Store
//!
//! A stand-in for the remote collection that runs as an actor in its own Tokio task.
//! It owns the records, assigns ids and `created_at` the way the server does, and
//! answers [`StoreRequest`] messages sequentially. No locks guard the map: the
//! task has exclusive ownership of it.
//!
//! [`MemoryStoreClient`] is the cloneable handle and implements [`RecordStore`],
//! so the manager cannot tell it apart from [`HttpRecordClient`](super::HttpRecordClient).
//!
//! ```rust
//! use patient_manager::model::PatientForm;
//! use patient_manager::store::{MemoryStore, RecordStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (store, client) = MemoryStore::new(16);
//!     tokio::spawn(store.run());
//!
//!     let form = PatientForm::new("Ana", "https://img/ana.png", "Follow-up visit", "https://ana.dev");
//!     let created = client.create(&form).await.unwrap();
//!     assert_eq!(client.list().await.unwrap()[0].id, created.id);
//! }
//! ```

use super::{AccessCause, Operation, RecordAccessError, RecordStore};
use crate::model::{sort_newest_first, Patient, PatientForm};
use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, SecondsFormat, Utc};
use std::collections::HashMap;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

/// One-shot reply channel used by the store actor.
pub type Response<T> = oneshot::Sender<Result<T, AccessCause>>;

/// Messages understood by [`MemoryStore`].
#[derive(Debug)]
pub enum StoreRequest {
    List {
        respond_to: Response<Vec<Patient>>,
    },
    Get {
        id: String,
        respond_to: Response<Patient>,
    },
    Create {
        form: PatientForm,
        respond_to: Response<Patient>,
    },
    Update {
        id: String,
        form: PatientForm,
        respond_to: Response<Patient>,
    },
    Delete {
        id: String,
        respond_to: Response<()>,
    },
}

/// The actor half: owns the records and the receiving end of the channel.
pub struct MemoryStore {
    receiver: mpsc::Receiver<StoreRequest>,
    records: HashMap<String, Patient>,
    next_id: u32,
    last_created: Option<DateTime<Utc>>,
}

impl MemoryStore {
    /// Creates an empty store and its client.
    pub fn new(buffer_size: usize) -> (Self, MemoryStoreClient) {
        Self::with_records(buffer_size, Vec::new())
    }

    /// Creates a store pre-loaded with `records` (ids and timestamps kept as given).
    pub fn with_records(buffer_size: usize, records: Vec<Patient>) -> (Self, MemoryStoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let next_id = records
            .iter()
            .filter_map(|p| p.id.parse::<u32>().ok())
            .max()
            .map_or(1, |max| max + 1);
        let store = Self {
            receiver,
            records: records.into_iter().map(|p| (p.id.clone(), p)).collect(),
            next_id,
            last_created: None,
        };
        (store, MemoryStoreClient { sender })
    }

    // Strictly increasing so records created within the same millisecond still order.
    fn next_created_at(&mut self) -> String {
        let now = Utc::now();
        let stamp = match self.last_created {
            Some(last) if now <= last => last + ChronoDuration::milliseconds(1),
            _ => now,
        };
        self.last_created = Some(stamp);
        stamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self) {
        info!(size = self.records.len(), "Record store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::List { respond_to } => {
                    let mut records: Vec<Patient> = self.records.values().cloned().collect();
                    sort_newest_first(&mut records);
                    debug!(count = records.len(), "List");
                    let _ = respond_to.send(Ok(records));
                }
                StoreRequest::Get { id, respond_to } => {
                    let found = self.records.get(&id).cloned();
                    debug!(%id, found = found.is_some(), "Get");
                    let _ = respond_to.send(found.ok_or(AccessCause::NotFound(id)));
                }
                StoreRequest::Create { form, respond_to } => {
                    debug!(?form, "Create");
                    let id = self.next_id.to_string();
                    self.next_id += 1;
                    let created_at = self.next_created_at();
                    let patient = Patient::from_form(id.clone(), form, created_at);
                    self.records.insert(id.clone(), patient.clone());
                    info!(%id, size = self.records.len(), "Created");
                    let _ = respond_to.send(Ok(patient));
                }
                StoreRequest::Update {
                    id,
                    form,
                    respond_to,
                } => {
                    debug!(%id, ?form, "Update");
                    if let Some(patient) = self.records.get_mut(&id) {
                        patient.apply_form(form);
                        info!(%id, "Updated");
                        let _ = respond_to.send(Ok(patient.clone()));
                    } else {
                        warn!(%id, "Not found");
                        let _ = respond_to.send(Err(AccessCause::NotFound(id)));
                    }
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(%id, "Delete");
                    if self.records.remove(&id).is_some() {
                        info!(%id, size = self.records.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(%id, "Not found");
                        let _ = respond_to.send(Err(AccessCause::NotFound(id)));
                    }
                }
            }
        }

        info!(size = self.records.len(), "Record store shutdown");
    }
}

/// Cloneable handle to a running [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct MemoryStoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl MemoryStoreClient {
    async fn call<T>(
        &self,
        operation: Operation,
        build: impl FnOnce(Response<T>) -> StoreRequest,
    ) -> Result<T, RecordAccessError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(build(respond_to)).await.map_err(|_| {
            RecordAccessError::new(operation, AccessCause::Unavailable("store closed".into()))
        })?;
        response
            .await
            .map_err(|_| {
                RecordAccessError::new(
                    operation,
                    AccessCause::Unavailable("store dropped response channel".into()),
                )
            })?
            .map_err(|cause| RecordAccessError::new(operation, cause))
    }
}

#[async_trait]
impl RecordStore for MemoryStoreClient {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Patient>, RecordAccessError> {
        self.call(Operation::List, |respond_to| StoreRequest::List { respond_to })
            .await
    }

    #[instrument(skip(self))]
    async fn get(&self, id: &str) -> Result<Patient, RecordAccessError> {
        let id = id.to_string();
        self.call(Operation::Get, |respond_to| StoreRequest::Get { id, respond_to })
            .await
    }

    #[instrument(skip(self, form))]
    async fn create(&self, form: &PatientForm) -> Result<Patient, RecordAccessError> {
        let form = form.clone();
        self.call(Operation::Create, |respond_to| StoreRequest::Create {
            form,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self, form))]
    async fn update(&self, id: &str, form: &PatientForm) -> Result<Patient, RecordAccessError> {
        let (id, form) = (id.to_string(), form.clone());
        self.call(Operation::Update, |respond_to| StoreRequest::Update {
            id,
            form,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<(), RecordAccessError> {
        let id = id.to_string();
        self.call(Operation::Delete, |respond_to| StoreRequest::Delete { id, respond_to })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str) -> PatientForm {
        PatientForm::new(name, "https://img.example/a.png", "Routine check", "https://example.com")
    }

    #[tokio::test]
    async fn test_store_crud_cycle() {
        let (store, client) = MemoryStore::new(10);
        let handle = tokio::spawn(store.run());

        let ana = client.create(&form("Ana")).await.unwrap();
        let bob = client.create(&form("Bob")).await.unwrap();
        assert_eq!(ana.id, "1");
        assert_eq!(bob.id, "2");

        let listed = client.list().await.unwrap();
        let names: Vec<_> = listed.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Ana"], "newest first");

        let updated = client.update(&ana.id, &form("Ana Maria")).await.unwrap();
        assert_eq!(updated.name, "Ana Maria");
        assert_eq!(updated.created_at, ana.created_at);

        client.delete(&bob.id).await.unwrap();
        let missing = client.get(&bob.id).await.unwrap_err();
        assert_eq!(missing.operation(), Operation::Get);
        assert!(matches!(missing.cause(), AccessCause::NotFound(id) if id == "2"));

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_seeded_ids_continue_after_max() {
        let seed = vec![Patient::from_form("7", form("Seed"), "2024-01-01")];
        let (store, client) = MemoryStore::with_records(10, seed);
        tokio::spawn(store.run());

        let created = client.create(&form("Next")).await.unwrap();
        assert_eq!(created.id, "8");
    }

    #[tokio::test]
    async fn test_closed_store_reports_unavailable() {
        let (store, client) = MemoryStore::new(10);
        drop(store);

        let err = client.list().await.unwrap_err();
        assert!(matches!(err.cause(), AccessCause::Unavailable(_)));
    }
}
