//! Error types for the handler pipeline.

use thiserror::Error;

/// Errors produced while turning a Sensu event into an iLert submission.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Malformed input or missing required configuration
    #[error("{0}")]
    Validation(String),

    /// Status map is not well-formed JSON
    #[error("could not parse status map: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Status map parsed but is semantically invalid
    #[error("{0}")]
    Config(String),

    /// A field template failed to evaluate against the event
    #[error("failed to evaluate {field} template {template:?}: {source}")]
    Template {
        field: &'static str,
        template: String,
        #[source]
        source: handlebars::RenderError,
    },
}
