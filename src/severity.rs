//! Severity mapping: user-supplied `{severity: [statuses]}` config inverted
//! into a status -> severity lookup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::HandlerError;

/// iLert priority used when no status map entry matches.
pub const DEFAULT_PRIORITY: &str = "high";

/// The closed set of iLert alert severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Critical => "critical",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "info" => Some(Severity::Info),
            "warning" => Some(Severity::Warning),
            "error" => Some(Severity::Error),
            "critical" => Some(Severity::Critical),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse the status-map JSON and invert it to status -> severity.
///
/// A status listed under two different severities is rejected outright: the
/// winner would otherwise depend on map iteration order, which no
/// configuration should rely on.
pub fn parse_status_map(status_map_json: &str) -> Result<BTreeMap<u32, Severity>, HandlerError> {
    let raw: BTreeMap<String, Vec<u32>> = serde_json::from_str(status_map_json)?;

    let mut by_status = BTreeMap::new();
    for (label, statuses) in raw {
        let severity = Severity::from_label(&label)
            .ok_or_else(|| HandlerError::Config(format!("invalid iLert severity: {label}")))?;
        for status in statuses {
            if let Some(previous) = by_status.insert(status, severity) {
                return Err(HandlerError::Config(format!(
                    "status {status} mapped to both {previous} and {severity}"
                )));
            }
        }
    }

    Ok(by_status)
}

/// Resolve the iLert priority for a check status.
///
/// Empty config, or a status absent from the map, yields [`DEFAULT_PRIORITY`].
pub fn resolve_priority(status: u32, status_map_json: &str) -> Result<String, HandlerError> {
    if status_map_json.is_empty() {
        return Ok(DEFAULT_PRIORITY.to_string());
    }

    let by_status = parse_status_map(status_map_json)?;
    Ok(by_status
        .get(&status)
        .map_or_else(|| DEFAULT_PRIORITY.to_string(), |s| s.as_str().to_string()))
}
