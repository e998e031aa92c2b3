//! Observability: structured logging of domain events.

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a domain event at INFO.
pub fn log_event(event: Event) {
    Logger::log(Severity::Info, event.as_str(), &[]);
}

/// Log a domain event at INFO with fields.
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(Severity::Info, event.as_str(), fields);
}

/// Log a rejection at WARN with fields.
pub fn log_rejection(event: Event, fields: &[(&str, &str)]) {
    Logger::log(Severity::Warn, event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event_does_not_panic() {
        log_event(Event::EntityInserted);
        log_event_with_fields(Event::StatusAdvanced, &[("entity", "donation")]);
        log_rejection(Event::ValidationRejected, &[("entity", "contact")]);
    }
}
