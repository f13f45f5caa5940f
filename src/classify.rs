//! Map a check status to the iLert event action.

/// The two operations the iLert Event API supports for a dedup key.
/// The wire string travels through [`EventAction::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventAction {
    Alert,
    Resolve,
}

impl EventAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventAction::Alert => "ALERT",
            EventAction::Resolve => "RESOLVE",
        }
    }
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status 0 signals a healthy check in Sensu, so it resolves the incident;
/// every other status raises (or refreshes) one.
pub fn classify(status: u32) -> EventAction {
    if status == 0 {
        EventAction::Resolve
    } else {
        EventAction::Alert
    }
}
