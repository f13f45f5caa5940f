//! Serde model of the subset of a Sensu Go event the handler touches.
//!
//! Real events carry far more fields; everything unknown is ignored on
//! deserialization so the handler keeps working as Sensu grows its schema.

use serde::{Deserialize, Serialize};

/// Name block shared by entities and checks (`metadata.name` on the wire).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entity {
    #[serde(default)]
    pub metadata: ObjectMeta,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Check {
    #[serde(default)]
    pub metadata: ObjectMeta,
    /// Numeric health code: 0 means OK, anything else is a problem state.
    #[serde(default)]
    pub status: u32,
    #[serde(default)]
    pub output: String,
}

/// One check-result event as delivered by the Sensu handler framework.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub entity: Entity,
    pub check: Option<Check>,
}

impl Event {
    /// Parse an event from the JSON Sensu writes to the handler's stdin.
    pub fn from_reader(reader: impl std::io::Read) -> serde_json::Result<Self> {
        serde_json::from_reader(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sensu_event_json() {
        let json = r#"{
            "entity": {"metadata": {"name": "server01", "namespace": "default"}},
            "check": {"metadata": {"name": "disk"}, "status": 2, "output": "disk full", "interval": 60},
            "timestamp": 1700000000
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.entity.metadata.name, "server01");
        let check = event.check.unwrap();
        assert_eq!(check.metadata.name, "disk");
        assert_eq!(check.status, 2);
        assert_eq!(check.output, "disk full");
    }

    #[test]
    fn event_without_check_deserializes() {
        let event: Event =
            serde_json::from_str(r#"{"entity": {"metadata": {"name": "server01"}}}"#).unwrap();
        assert!(event.check.is_none());
    }
}
