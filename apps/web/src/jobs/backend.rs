//! Job backend — the boundary to the service that owns job postings.
//!
//! `JobStore` holds an `Arc<dyn JobBackend>`; production uses
//! `HttpJobBackend`, local runs and tests use `MemoryJobBackend`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::job::{Job, MutationResponse, UpdateJobPayload};

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Job {0} not found")]
    NotFound(String),

    #[error("Invalid job API URL '{0}'")]
    InvalidBaseUrl(String),
}

/// Operations the UI needs from the job service.
///
/// Reads fail with `BackendError`. Mutations never fail at the type level:
/// every failure is folded into `MutationResponse::error`.
#[async_trait]
pub trait JobBackend: Send + Sync {
    async fn fetch_job(&self, job_id: &str) -> Result<Job, BackendError>;

    async fn fetch_jobs(&self, user_id: &str) -> Result<Vec<Job>, BackendError>;

    async fn update_job(&self, job_id: &str, payload: &UpdateJobPayload) -> MutationResponse;

    async fn remove_job(&self, job_id: &str) -> MutationResponse;
}

/// Error bodies the job API is known to send.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Job API client over HTTP/JSON.
#[derive(Clone)]
pub struct HttpJobBackend {
    client: Client,
    base_url: Url,
}

impl HttpJobBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let base_url =
            Url::parse(base_url).map_err(|e| BackendError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(BackendError::InvalidBaseUrl(base_url.to_string()));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// `{base}/jobs` with each extra segment percent-encoded.
    fn jobs_url(&self, job_id: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("jobs");
            if let Some(id) = job_id {
                segments.push(id);
            }
        }
        url
    }

    async fn read<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
        job_id: Option<&str>,
    ) -> Result<T, BackendError> {
        let response = request.send().await?;
        let status = response.status();

        if status.as_u16() == 404 {
            if let Some(id) = job_id {
                return Err(BackendError::NotFound(id.to_string()));
            }
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Api {
                status: status.as_u16(),
                message: error_message(&body).unwrap_or(body),
            });
        }

        Ok(response.json().await?)
    }

    async fn mutate(&self, request: RequestBuilder) -> MutationResponse {
        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("Job API request failed: {e}");
                return MutationResponse::failed(e.to_string());
            }
        };

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            warn!("Job API returned {}: {}", status, body);
            return MutationResponse::failed(
                error_message(&body).unwrap_or_else(|| format!("Request failed with status {status}")),
            );
        }

        // Success bodies may be empty or carry an `error` field.
        MutationResponse {
            error: error_message(&body),
        }
    }
}

/// Pulls a human-readable error out of a JSON error body.
fn error_message(body: &str) -> Option<String> {
    let parsed: ApiErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .error
        .or(parsed.message)
        .filter(|message| !message.is_empty())
}

#[async_trait]
impl JobBackend for HttpJobBackend {
    async fn fetch_job(&self, job_id: &str) -> Result<Job, BackendError> {
        debug!("Fetching job {job_id}");
        self.read(self.client.get(self.jobs_url(Some(job_id))), Some(job_id))
            .await
    }

    async fn fetch_jobs(&self, user_id: &str) -> Result<Vec<Job>, BackendError> {
        debug!("Fetching jobs for user {user_id}");
        let request = self
            .client
            .get(self.jobs_url(None))
            .query(&[("userId", user_id)]);
        self.read(request, None).await
    }

    async fn update_job(&self, job_id: &str, payload: &UpdateJobPayload) -> MutationResponse {
        debug!("Updating job {job_id}");
        self.mutate(self.client.put(self.jobs_url(Some(job_id))).json(payload))
            .await
    }

    async fn remove_job(&self, job_id: &str) -> MutationResponse {
        debug!("Removing job {job_id}");
        self.mutate(self.client.delete(self.jobs_url(Some(job_id))))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(base: &str) -> HttpJobBackend {
        HttpJobBackend::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_jobs_url_with_and_without_trailing_slash() {
        assert_eq!(
            backend("http://api.local/v1").jobs_url(Some("42")).as_str(),
            "http://api.local/v1/jobs/42"
        );
        assert_eq!(
            backend("http://api.local/v1/").jobs_url(None).as_str(),
            "http://api.local/v1/jobs"
        );
    }

    #[test]
    fn test_job_id_is_percent_encoded() {
        assert_eq!(
            backend("http://api.local").jobs_url(Some("a/b c")).as_str(),
            "http://api.local/jobs/a%2Fb%20c"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(matches!(
            HttpJobBackend::new("not a url", Duration::from_secs(1)),
            Err(BackendError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            HttpJobBackend::new("mailto:jobs@example.com", Duration::from_secs(1)),
            Err(BackendError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_error_message_prefers_error_field() {
        assert_eq!(
            error_message(r#"{"error":"Job is closed","message":"ignored"}"#),
            Some("Job is closed".to_string())
        );
        assert_eq!(
            error_message(r#"{"message":"Token expired"}"#),
            Some("Token expired".to_string())
        );
    }

    #[test]
    fn test_error_message_absent_for_success_bodies() {
        assert_eq!(error_message(""), None);
        assert_eq!(error_message(r#"{"error":""}"#), None);
        assert_eq!(error_message(r#"{"jobId":"42"}"#), None);
        assert_eq!(error_message("<html>oops</html>"), None);
    }
}
