//! iLert Event API client.
//!
//! The client exposes one logical call, [`EventApi::create_event`], behind a
//! trait so the pipeline can be tested against a recording stub. Transient
//! failures (transport errors, 429/5xx) are retried with capped exponential
//! backoff; structured API rejections are returned immediately, tagged with
//! the iLert error code so the submitter can pattern-match on them.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Production endpoint for event intake.
pub const EVENTS_URL: &str = "https://api.ilert.com/api/v1/events";

/// Wire payload of one event submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IlertEvent {
    pub api_key: String,
    /// `ALERT` or `RESOLVE`.
    pub event_type: String,
    pub summary: String,
    pub incident_key: String,
    pub details: String,
}

/// Body of a successful event submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub response_code: String,
    #[serde(default)]
    pub incident_key: String,
    #[serde(default)]
    pub incident_url: String,
}

/// Structured error body the API returns for semantic rejections.
#[derive(Debug, Clone, Deserialize)]
struct ApiErrorBody {
    code: String,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The API understood the request and rejected it with an error code.
    #[error("iLert API error {code}: {message}")]
    Api { code: String, message: String },

    /// The request never produced a usable API answer.
    #[error("transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// Only transport-level failures are worth another attempt; a semantic
    /// rejection will fail the same way every time.
    fn is_transient(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

/// Bounded retry policy for event submission.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub min_backoff: Duration,
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            min_backoff: Duration::from_secs(5),
            max_backoff: Duration::from_secs(20),
        }
    }
}

/// One logical event submission, retries included.
#[async_trait]
pub trait EventApi: Send + Sync {
    async fn create_event(&self, event: &IlertEvent) -> Result<EventResponse, ApiError>;
}

pub struct IlertClient {
    client: reqwest::Client,
    events_url: String,
    retry: RetryPolicy,
}

impl IlertClient {
    pub fn new(retry: RetryPolicy) -> reqwest::Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()?,
            events_url: EVENTS_URL.to_string(),
            retry,
        })
    }

    /// Point the client at a different intake endpoint.
    pub fn with_events_url(mut self, url: impl Into<String>) -> Self {
        self.events_url = url.into();
        self
    }

    async fn send_once(&self, event: &IlertEvent) -> Result<EventResponse, ApiError> {
        let response = self
            .client
            .post(&self.events_url)
            .json(event)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<EventResponse>()
                .await
                .map_err(|err| ApiError::Transport(format!("invalid response body: {err}")));
        }

        let body = response.text().await.unwrap_or_default();

        // Overload and server faults are transient regardless of body shape.
        if status.as_u16() == 429 || status.is_server_error() {
            return Err(ApiError::Transport(format!("HTTP {status}: {body}")));
        }

        match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(parsed) => Err(ApiError::Api {
                code: parsed.code,
                message: parsed.message,
            }),
            Err(_) => Err(ApiError::Transport(format!("HTTP {status}: {body}"))),
        }
    }
}

#[async_trait]
impl EventApi for IlertClient {
    async fn create_event(&self, event: &IlertEvent) -> Result<EventResponse, ApiError> {
        let mut attempt = 0;
        let mut backoff = self.retry.min_backoff;

        loop {
            attempt += 1;
            match self.send_once(event).await {
                Ok(response) => return Ok(response),
                Err(err) if err.is_transient() && attempt < self.retry.max_attempts => {
                    warn!(attempt, error = %err, "event submission failed, backing off");
                    let jitter = Duration::from_millis(rand::thread_rng().gen_range(0..250));
                    tokio::time::sleep(backoff + jitter).await;
                    backoff = (backoff * 2).min(self.retry.max_backoff);
                }
                Err(err) => return Err(err),
            }
        }
    }
}
