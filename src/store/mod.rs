//! # Record Store
//!
//! The seam between the manager and wherever patient records live.
//!
//! - [`RecordStore`] - the five-call contract (`list`, `get`, `create`, `update`, `delete`)
//! - [`HttpRecordClient`] - production implementation over the REST collection
//! - [`memory`] - an in-process collection, run as an actor, for the demo and end-to-end tests
//! - [`mock`] - scripted store for tests that need failures or latency
//!
//! Every call fails with a [`RecordAccessError`]. Nothing is retried.

pub mod error;
pub mod http;
pub mod memory;
pub mod mock;

pub use error::*;
pub use http::{HttpRecordClient, DEFAULT_TIMEOUT};
pub use memory::{MemoryStore, MemoryStoreClient};

use crate::model::{Patient, PatientForm};
use async_trait::async_trait;

/// Typed access to the patient collection.
///
/// Implementations must return `list()` newest first by `created_at`.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All records, newest first.
    async fn list(&self) -> Result<Vec<Patient>, RecordAccessError>;

    /// A single record by id.
    async fn get(&self, id: &str) -> Result<Patient, RecordAccessError>;

    /// Creates a record; the store assigns `id` and `created_at`.
    async fn create(&self, form: &PatientForm) -> Result<Patient, RecordAccessError>;

    /// Replaces the editable fields of an existing record.
    async fn update(&self, id: &str, form: &PatientForm) -> Result<Patient, RecordAccessError>;

    /// Removes a record.
    async fn delete(&self, id: &str) -> Result<(), RecordAccessError>;
}
