//! Observable domain events.
//!
//! Events are explicit and typed; the store emits them on its write paths.

use std::fmt;

/// Observable events on the domain write paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// An entity was validated, defaulted and persisted
    EntityInserted,
    /// A candidate failed insert validation
    ValidationRejected,
    /// An entity status moved along a sanctioned edge
    StatusAdvanced,
    /// A participation certificate was issued and linked
    CertificateIssued,
    /// A project or cause `raised` total grew
    RaisedIncremented,
}

impl Event {
    /// Returns the event name used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::EntityInserted => "entity_inserted",
            Event::ValidationRejected => "validation_rejected",
            Event::StatusAdvanced => "status_advanced",
            Event::CertificateIssued => "certificate_issued",
            Event::RaisedIncremented => "raised_incremented",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_snake_case() {
        assert_eq!(Event::EntityInserted.as_str(), "entity_inserted");
        assert_eq!(Event::RaisedIncremented.as_str(), "raised_incremented");
    }
}
