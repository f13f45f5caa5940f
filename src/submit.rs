//! Assemble the outbound event and classify the API's answer.

use tracing::{debug, info};

use crate::classify::EventAction;
use crate::ilert::{ApiError, EventApi, IlertEvent};

/// A resolve for a dedup key with no open incident; benign, not an error.
pub const NO_OPEN_INCIDENT_WITH_KEY: &str = "NO_OPEN_INCIDENT_WITH_KEY";

/// Everything the pipeline derived for one event, ready to submit.
#[derive(Debug, Clone)]
pub struct IncidentRequest {
    pub action: EventAction,
    pub dedup_key: String,
    pub summary: String,
    pub details: String,
    /// Resolved upstream; the event wire payload has no priority slot, so it
    /// travels as logging context only.
    pub priority: String,
}

/// Terminal result of one event's processing.
#[derive(Debug, Clone)]
pub enum SubmissionOutcome {
    Success {
        response_code: String,
        dedup_key: String,
        incident_url: String,
    },
    Warning(String),
    Fatal(String),
}

/// Submit one incident event and fold the API result into an outcome.
pub async fn submit(
    api: &dyn EventApi,
    auth_token: &str,
    request: &IncidentRequest,
) -> SubmissionOutcome {
    let event = IlertEvent {
        api_key: auth_token.to_string(),
        event_type: request.action.as_str().to_string(),
        summary: request.summary.clone(),
        incident_key: request.dedup_key.clone(),
        details: request.details.clone(),
    };

    debug!(
        action = %request.action,
        dedup_key = %request.dedup_key,
        priority = %request.priority,
        "submitting event to iLert"
    );

    match api.create_event(&event).await {
        Ok(response) => {
            info!(
                action = %request.action,
                code = %response.response_code,
                incident_key = %response.incident_key,
                url = %response.incident_url,
                "event submitted to iLert"
            );
            SubmissionOutcome::Success {
                response_code: response.response_code,
                dedup_key: response.incident_key,
                incident_url: response.incident_url,
            }
        }
        Err(ApiError::Api { code, message }) if code == NO_OPEN_INCIDENT_WITH_KEY => {
            SubmissionOutcome::Warning(format!(
                "no open incident for dedup key {}: {message}",
                request.dedup_key
            ))
        }
        Err(err) => SubmissionOutcome::Fatal(err.to_string()),
    }
}
