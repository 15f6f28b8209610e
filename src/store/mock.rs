//! # Mock Record Store
//!
//! A scripted [`RecordStore`] for tests that need failures, latency or an exact
//! call log.
//!
//! Queue expectations in the order calls will arrive, hand the store to the code
//! under test, then call [`MockRecordStore::verify`].
//!
//! ```rust
//! use patient_manager::store::mock::MockRecordStore;
//! use patient_manager::store::{AccessCause, RecordStore};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockRecordStore::new();
//!     mock.expect_list().return_ok(vec![]);
//!     mock.expect_delete("3").delay(Duration::from_millis(5)).return_err(AccessCause::Status { status: 500 });
//!
//!     assert!(mock.list().await.unwrap().is_empty());
//!     assert!(mock.delete("3").await.is_err());
//!     mock.verify();
//! }
//! ```
//!
//! A call that does not match the head of the queue is answered with
//! [`AccessCause::Unavailable`] and recorded; `verify` then panics. Answering
//! instead of panicking keeps a spawned caller from hanging its test.

use super::{AccessCause, Operation, RecordAccessError, RecordStore};
use crate::model::{Patient, PatientForm};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// A call observed by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Get(String),
    Create(PatientForm),
    Update(String, PatientForm),
    Delete(String),
}

enum Reply {
    List(Result<Vec<Patient>, AccessCause>),
    Get(Result<Patient, AccessCause>),
    Create(Result<Patient, AccessCause>),
    Update(Result<Patient, AccessCause>),
    Delete(Result<(), AccessCause>),
}

struct Expectation {
    id: Option<String>,
    reply: Reply,
    delay: Option<Duration>,
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    calls: Vec<Call>,
    mismatches: Vec<String>,
}

/// Scripted record store with expectation tracking.
#[derive(Default)]
pub struct MockRecordStore {
    state: Arc<Mutex<MockState>>,
}

fn lock(state: &Mutex<MockState>) -> MutexGuard<'_, MockState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockRecordStore {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `list` call.
    pub fn expect_list(&self) -> ExpectationBuilder<Vec<Patient>> {
        self.builder(None, Reply::List)
    }

    /// Expects a `get` call for `id`.
    pub fn expect_get(&self, id: impl Into<String>) -> ExpectationBuilder<Patient> {
        self.builder(Some(id.into()), Reply::Get)
    }

    /// Expects a `create` call.
    pub fn expect_create(&self) -> ExpectationBuilder<Patient> {
        self.builder(None, Reply::Create)
    }

    /// Expects an `update` call for `id`.
    pub fn expect_update(&self, id: impl Into<String>) -> ExpectationBuilder<Patient> {
        self.builder(Some(id.into()), Reply::Update)
    }

    /// Expects a `delete` call for `id`.
    pub fn expect_delete(&self, id: impl Into<String>) -> ExpectationBuilder<()> {
        self.builder(Some(id.into()), Reply::Delete)
    }

    fn builder<T>(
        &self,
        id: Option<String>,
        wrap: fn(Result<T, AccessCause>) -> Reply,
    ) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            state: self.state.clone(),
            id,
            delay: None,
            wrap,
        }
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        lock(&self.state).calls.clone()
    }

    /// Number of expectations not yet consumed.
    pub fn remaining(&self) -> usize {
        lock(&self.state).expectations.len()
    }

    /// Panics unless every expectation was consumed by a matching call.
    pub fn verify(&self) {
        let state = lock(&self.state);
        if !state.mismatches.is_empty() {
            panic!("Unexpected calls: {:?}", state.mismatches);
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }

    fn take(&self, call: Call) -> Option<Expectation> {
        let mut state = lock(&self.state);
        state.calls.push(call);
        state.expectations.pop_front()
    }

    fn mismatch(&self, operation: Operation, detail: String) -> RecordAccessError {
        lock(&self.state).mismatches.push(detail.clone());
        RecordAccessError::new(operation, AccessCause::Unavailable(detail))
    }

    async fn answer<T>(
        &self,
        operation: Operation,
        call: Call,
        id: Option<&str>,
        unwrap: fn(Reply) -> Result<Result<T, AccessCause>, Reply>,
    ) -> Result<T, RecordAccessError> {
        let Some(expectation) = self.take(call.clone()) else {
            return Err(self.mismatch(operation, format!("no expectation left for {call:?}")));
        };
        if expectation.id.as_deref() != id {
            return Err(self.mismatch(
                operation,
                format!("{call:?} does not match expected id {:?}", expectation.id),
            ));
        }
        let result = unwrap(expectation.reply)
            .map_err(|_| self.mismatch(operation, format!("{call:?} arrived out of order")))?;
        if let Some(delay) = expectation.delay {
            tokio::time::sleep(delay).await;
        }
        result.map_err(|cause| RecordAccessError::new(operation, cause))
    }
}

/// Configures the reply to one expected call.
pub struct ExpectationBuilder<T> {
    state: Arc<Mutex<MockState>>,
    id: Option<String>,
    delay: Option<Duration>,
    wrap: fn(Result<T, AccessCause>) -> Reply,
}

impl<T> ExpectationBuilder<T> {
    /// Holds the reply back for `delay`, simulating a slow round trip.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Answers the call successfully.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Answers the call with a failure.
    pub fn return_err(self, cause: AccessCause) {
        self.push(Err(cause));
    }

    fn push(self, result: Result<T, AccessCause>) {
        lock(&self.state).expectations.push_back(Expectation {
            id: self.id,
            reply: (self.wrap)(result),
            delay: self.delay,
        });
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn list(&self) -> Result<Vec<Patient>, RecordAccessError> {
        self.answer(Operation::List, Call::List, None, |reply| match reply {
            Reply::List(result) => Ok(result),
            other => Err(other),
        })
        .await
    }

    async fn get(&self, id: &str) -> Result<Patient, RecordAccessError> {
        self.answer(Operation::Get, Call::Get(id.into()), Some(id), |reply| match reply {
            Reply::Get(result) => Ok(result),
            other => Err(other),
        })
        .await
    }

    async fn create(&self, form: &PatientForm) -> Result<Patient, RecordAccessError> {
        self.answer(Operation::Create, Call::Create(form.clone()), None, |reply| {
            match reply {
                Reply::Create(result) => Ok(result),
                other => Err(other),
            }
        })
        .await
    }

    async fn update(&self, id: &str, form: &PatientForm) -> Result<Patient, RecordAccessError> {
        let call = Call::Update(id.into(), form.clone());
        self.answer(Operation::Update, call, Some(id), |reply| match reply {
            Reply::Update(result) => Ok(result),
            other => Err(other),
        })
        .await
    }

    async fn delete(&self, id: &str) -> Result<(), RecordAccessError> {
        self.answer(Operation::Delete, Call::Delete(id.into()), Some(id), |reply| {
            match reply {
                Reply::Delete(result) => Ok(result),
                other => Err(other),
            }
        })
        .await
    }
}
