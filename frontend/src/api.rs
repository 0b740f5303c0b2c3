//! Transport port and reqwest adapter for the task listing endpoint.
//!
//! The view only depends on the [`TasksApi`] trait; the adapter owns
//! transport details such as the base URL, the session cookie jar, timeouts,
//! and HTTP error mapping. A successful call yields the decoded JSON body
//! without interpreting its shape; shape tolerance lives in the payload
//! normalizer.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;

/// Fallback message when a transport failure carries no detail.
pub const GENERIC_FETCH_FAILURE: &str = "Failed to fetch tasks";

/// Failures surfaced by [`TasksApi`] implementations.
///
/// `Status` means a response arrived with a non-success code; `Transport`
/// means the request failed before a status was obtainable. Both display as
/// the message the view shows on the failure path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Status {
        /// The HTTP status code received.
        status: u16,
    },
    /// The request failed before any status was available.
    #[error("{}", message.as_deref().unwrap_or(GENERIC_FETCH_FAILURE))]
    Transport {
        /// Underlying failure detail, when the transport provided one.
        message: Option<String>,
    },
}

impl FetchError {
    /// Construct a status failure.
    #[must_use]
    pub const fn status(status: u16) -> Self {
        Self::Status { status }
    }

    /// Construct a transport failure, dropping blank detail.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::Transport {
            message: (!message.trim().is_empty()).then_some(message),
        }
    }
}

/// Port the sync view fetches through.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TasksApi: Send + Sync {
    /// Fetch the task list body as decoded JSON.
    async fn list_tasks(&self) -> Result<Value, FetchError>;
}

/// Reqwest-backed [`TasksApi`] adapter.
///
/// Keeps a cookie jar so the session established by [`HttpTasksApi::login`]
/// authenticates subsequent listing calls.
pub struct HttpTasksApi {
    client: Client,
    base_url: Url,
}

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

impl HttpTasksApi {
    /// Build an adapter with the default request timeout.
    ///
    /// # Errors
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, reqwest::Error> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Build an adapter with an explicit request timeout.
    ///
    /// # Errors
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_timeout(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .build()?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(path)
            .map_err(|error| FetchError::transport(format!("invalid endpoint url: {error}")))
    }

    /// Establish a session for subsequent listing calls.
    ///
    /// # Errors
    /// Returns [`FetchError::Status`] when credentials are rejected and
    /// [`FetchError::Transport`] when the request never reaches the server.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), FetchError> {
        let url = self.endpoint("/api/login")?;
        let response = self
            .client
            .post(url)
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(status.as_u16()));
        }
        Ok(())
    }
}

#[async_trait]
impl TasksApi for HttpTasksApi {
    async fn list_tasks(&self) -> Result<Value, FetchError> {
        let url = self.endpoint("/api/tasks")?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(status.as_u16()));
        }

        response.json::<Value>().await.map_err(map_transport_error)
    }
}

fn map_transport_error(error: reqwest::Error) -> FetchError {
    FetchError::transport(error.to_string())
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network error mapping.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(401, "HTTP error! status: 401")]
    #[case(503, "HTTP error! status: 503")]
    fn status_failures_display_the_code(#[case] status: u16, #[case] expected: &str) {
        assert_eq!(FetchError::status(status).to_string(), expected);
    }

    #[test]
    fn transport_failures_display_their_detail() {
        let err = FetchError::transport("connection refused");
        assert_eq!(err.to_string(), "connection refused");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_transport_detail_falls_back_to_the_generic_message(#[case] detail: &str) {
        let err = FetchError::transport(detail);
        assert_eq!(err.to_string(), GENERIC_FETCH_FAILURE);
    }
}
