//! sensu-ilert-handler -- Sensu Go handler for iLert incident management.
//!
//! This crate turns one Sensu check-result event into one iLert Event API
//! call: it caps the check output, resolves the incident priority from an
//! optional status map, renders the dedup key / summary / details templates,
//! picks alert-vs-resolve from the check status, and submits the result.

pub mod classify;
pub mod config;
pub mod error;
pub mod event;
pub mod ilert;
pub mod payload;
pub mod render;
pub mod severity;
pub mod submit;

use crate::config::HandlerConfig;
use crate::error::HandlerError;
use crate::event::Event;
use crate::ilert::EventApi;
use crate::submit::{IncidentRequest, SubmissionOutcome};

/// Process one event end to end and submit it through `api`.
///
/// Validation, config, and template failures return a typed error before any
/// API call happens; API results are folded into the returned
/// [`SubmissionOutcome`].
pub async fn process_event(
    config: &HandlerConfig,
    mut event: Event,
    api: &dyn EventApi,
) -> Result<SubmissionOutcome, HandlerError> {
    config.validate()?;

    let check = event
        .check
        .as_mut()
        .ok_or_else(|| HandlerError::Validation("event does not contain check".to_string()))?;
    let status = check.status;
    check.output = payload::guard_check_output(std::mem::take(&mut check.output));

    let priority = severity::resolve_priority(status, &config.status_map_json)?;
    tracing::info!(%priority, "incident priority");

    let summary = render::summary(config, &event)?;
    let details = render::details(config, &event)?;
    let dedup_key = render::dedup_key(config, &event)?;
    let action = classify::classify(status);

    let request = IncidentRequest {
        action,
        dedup_key,
        summary,
        details,
        priority,
    };

    Ok(submit::submit(api, &config.auth_token, &request).await)
}
