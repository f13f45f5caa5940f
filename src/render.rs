//! Render the outbound incident fields (dedup key, summary, details) from
//! user-configurable templates evaluated against the event.

use handlebars::Handlebars;
use serde_json::json;

use crate::config::HandlerConfig;
use crate::error::HandlerError;
use crate::event::Event;

/// iLert rejects summaries longer than this.
pub const SUMMARY_MAX_CHARS: usize = 1024;

fn engine() -> Handlebars<'static> {
    let mut handlebars = Handlebars::new();
    // A template referencing a field the event does not have is a
    // configuration bug; fail instead of rendering an empty string.
    handlebars.set_strict_mode(true);
    // Summaries go to an incident API, not a browser.
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars
}

/// Template context exposing the event under the documented
/// `Entity.Name` / `Check.Name` / `Check.Status` / `Check.Output` paths.
fn template_context(event: &Event) -> serde_json::Value {
    let (check_name, status, output) = event.check.as_ref().map_or(
        ("", 0, ""),
        |check| (check.metadata.name.as_str(), check.status, check.output.as_str()),
    );

    json!({
        "Entity": { "Name": event.entity.metadata.name },
        "Check": { "Name": check_name, "Status": status, "Output": output },
    })
}

fn eval(field: &'static str, template: &str, event: &Event) -> Result<String, HandlerError> {
    engine()
        .render_template(template, &template_context(event))
        .map_err(|source| HandlerError::Template {
            field,
            template: template.to_string(),
            source,
        })
}

/// Render the deduplication key. An empty key is fatal: it is the external
/// system's idempotency handle for matching alert/resolve pairs.
pub fn dedup_key(config: &HandlerConfig, event: &Event) -> Result<String, HandlerError> {
    let key = eval("dedupKey", &config.dedup_key_template, event)?;
    if key.is_empty() {
        return Err(HandlerError::Validation("dedup key is empty".to_string()));
    }
    Ok(key)
}

/// Render the alert summary, silently capped at [`SUMMARY_MAX_CHARS`].
pub fn summary(config: &HandlerConfig, event: &Event) -> Result<String, HandlerError> {
    let mut summary = eval("summary", &config.summary_template, event)?;
    if summary.chars().count() > SUMMARY_MAX_CHARS {
        tracing::info!(max = SUMMARY_MAX_CHARS, "summary truncated to API limit");
        summary = summary.chars().take(SUMMARY_MAX_CHARS).collect();
    }
    tracing::debug!(%summary, "incident summary");
    Ok(summary)
}

/// Render the alert details, falling back to a fixed description when no
/// template is configured.
pub fn details(config: &HandlerConfig, event: &Event) -> Result<String, HandlerError> {
    let details = if config.details_template.is_empty() {
        let check_name = event
            .check
            .as_ref()
            .map_or("", |check| check.metadata.name.as_str());
        format!(
            "Incident from Sensu, from entity: {}, name: {}",
            event.entity.metadata.name, check_name
        )
    } else {
        eval("details", &config.details_template, event)?
    };

    tracing::debug!(%details, "incident details");
    Ok(details)
}
