//! # HTTP Record Client
//!
//! Maps the [`RecordStore`] contract onto the REST collection:
//!
//! | Call | Method | Path |
//! |---|---|---|
//! | `list` | GET | `<base>/` |
//! | `get` | GET | `<base>/{id}` |
//! | `create` | POST | `<base>/` (JSON body) |
//! | `update` | PUT | `<base>/{id}` (JSON body) |
//! | `delete` | DELETE | `<base>/{id}` |
//!
//! The timeout is fixed when the client is built. Timeouts, transport failures,
//! non-2xx statuses and undecodable bodies all surface as [`RecordAccessError`]
//! on the first attempt.

use super::{AccessCause, ClientSetupError, Operation, RecordAccessError, RecordStore};
use crate::model::{sort_newest_first, Patient, PatientForm};
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the remote patient collection.
#[derive(Debug, Clone)]
pub struct HttpRecordClient {
    http: reqwest::Client,
    base: Url,
}

impl HttpRecordClient {
    /// Builds a client for the collection at `base_url` (e.g. `https://host/users`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientSetupError> {
        let base = Url::parse(base_url).map_err(|e| ClientSetupError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(ClientSetupError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "url cannot carry a path".to_string(),
            });
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn collection_url(&self) -> Url {
        self.with_last_segment("")
    }

    fn record_url(&self, id: &str) -> Url {
        self.with_last_segment(id)
    }

    fn with_last_segment(&self, segment: &str) -> Url {
        let mut url = self.base.clone();
        // Checked in `new`: the base can always carry path segments.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(segment);
        }
        url
    }

    fn fail(&self, operation: Operation, cause: AccessCause) -> RecordAccessError {
        error!(%operation, error = %cause, "Record request failed");
        RecordAccessError::new(operation, cause)
    }

    async fn execute(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> Result<Response, RecordAccessError> {
        let response = request
            .send()
            .await
            .map_err(|e| self.fail(operation, AccessCause::from_reqwest(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.fail(
                operation,
                AccessCause::Status {
                    status: status.as_u16(),
                },
            ));
        }
        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        operation: Operation,
        response: Response,
    ) -> Result<T, RecordAccessError> {
        let body = response
            .bytes()
            .await
            .map_err(|e| self.fail(operation, AccessCause::from_reqwest(e)))?;
        serde_json::from_slice(&body)
            .map_err(|e| self.fail(operation, AccessCause::Decode(e.to_string())))
    }
}

#[async_trait]
impl RecordStore for HttpRecordClient {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Patient>, RecordAccessError> {
        debug!("Sending request");
        let request = self.http.get(self.collection_url());
        let response = self.execute(Operation::List, request).await?;
        let mut records: Vec<Patient> = self.read_json(Operation::List, response).await?;
        sort_newest_first(&mut records);
        debug!(count = records.len(), "Listed");
        Ok(records)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: &str) -> Result<Patient, RecordAccessError> {
        debug!("Sending request");
        let request = self.http.get(self.record_url(id));
        let response = self.execute(Operation::Get, request).await?;
        self.read_json(Operation::Get, response).await
    }

    #[instrument(skip(self, form))]
    async fn create(&self, form: &PatientForm) -> Result<Patient, RecordAccessError> {
        debug!(?form, "Sending request");
        let request = self.http.post(self.collection_url()).json(form);
        let response = self.execute(Operation::Create, request).await?;
        self.read_json(Operation::Create, response).await
    }

    #[instrument(skip(self, form))]
    async fn update(&self, id: &str, form: &PatientForm) -> Result<Patient, RecordAccessError> {
        debug!(?form, "Sending request");
        let request = self.http.put(self.record_url(id)).json(form);
        let response = self.execute(Operation::Update, request).await?;
        self.read_json(Operation::Update, response).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<(), RecordAccessError> {
        debug!("Sending request");
        let request = self.http.delete(self.record_url(id));
        self.execute(Operation::Delete, request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_with_and_without_trailing_slash() {
        for base in ["https://api.example.com/users", "https://api.example.com/users/"] {
            let client = HttpRecordClient::new(base, DEFAULT_TIMEOUT).unwrap();
            assert_eq!(client.collection_url().as_str(), "https://api.example.com/users/");
            assert_eq!(client.record_url("42").as_str(), "https://api.example.com/users/42");
        }
    }

    #[test]
    fn test_rejects_relative_base() {
        let result = HttpRecordClient::new("users", DEFAULT_TIMEOUT);
        assert!(matches!(result, Err(ClientSetupError::InvalidBaseUrl { .. })));
    }
}
