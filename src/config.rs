//! Handler configuration, built once from flags/environment and passed by
//! value into the pipeline. Never mutated after startup.

use crate::error::HandlerError;

pub const DEFAULT_DEDUP_KEY_TEMPLATE: &str = "{{Entity.Name}}-{{Check.Name}}";
pub const DEFAULT_SUMMARY_TEMPLATE: &str = "{{Entity.Name}}/{{Check.Name}} : {{Check.Output}}";

#[derive(Debug, Clone)]
pub struct HandlerConfig {
    /// iLert API key, required non-empty.
    pub auth_token: String,
    pub dedup_key_template: String,
    pub summary_template: String,
    /// Empty means "use the fixed fallback details string".
    pub details_template: String,
    /// JSON mapping of severity label to check statuses; empty means
    /// every status resolves to the default priority.
    pub status_map_json: String,
}

impl HandlerConfig {
    /// Config with the default templates and no status map.
    pub fn new(auth_token: impl Into<String>) -> Self {
        Self {
            auth_token: auth_token.into(),
            dedup_key_template: DEFAULT_DEDUP_KEY_TEMPLATE.to_string(),
            summary_template: DEFAULT_SUMMARY_TEMPLATE.to_string(),
            details_template: String::new(),
            status_map_json: String::new(),
        }
    }

    pub fn validate(&self) -> Result<(), HandlerError> {
        if self.auth_token.is_empty() {
            return Err(HandlerError::Validation(
                "authentication token is empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_fails_validation() {
        let config = HandlerConfig::new("");
        assert!(matches!(
            config.validate(),
            Err(HandlerError::Validation(msg)) if msg.contains("token")
        ));
    }

    #[test]
    fn token_present_passes() {
        assert!(HandlerConfig::new("il1api...").validate().is_ok());
    }
}
