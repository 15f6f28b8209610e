//! # Record Access Errors
//!
//! Every [`RecordStore`](super::RecordStore) call fails with a [`RecordAccessError`]:
//! the operation that failed, a fixed user-facing message, and the underlying
//! [`AccessCause`] as its `source()`.

use std::fmt;
use thiserror::Error;

/// The five calls a record store understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// User-facing message for a failed call of this kind.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "Error loading patients",
            Operation::Get => "Error loading patient",
            Operation::Create => "Error creating patient",
            Operation::Update => "Error updating patient",
            Operation::Delete => "Error deleting patient",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Why a store call failed.
#[derive(Debug, Error)]
pub enum AccessCause {
    #[error("request timed out")]
    Timeout,
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("unexpected status {status}")]
    Status { status: u16 },
    #[error("malformed response body: {0}")]
    Decode(String),
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl AccessCause {
    /// Splits reqwest failures into timeouts and everything else.
    pub fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            AccessCause::Timeout
        } else {
            AccessCause::Transport(error)
        }
    }
}

/// A failed call against the record collection.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RecordAccessError {
    operation: Operation,
    message: String,
    #[source]
    cause: AccessCause,
}

impl RecordAccessError {
    pub fn new(operation: Operation, cause: AccessCause) -> Self {
        Self {
            operation,
            message: operation.failure_message().to_string(),
            cause,
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The user-facing message (never includes the cause).
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> &AccessCause {
        &self.cause
    }
}

/// Errors building an [`HttpRecordClient`](super::HttpRecordClient).
#[derive(Debug, Error)]
pub enum ClientSetupError {
    #[error("invalid base url {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("failed to build http client: {0}")]
    Http(#[from] reqwest::Error),
}
