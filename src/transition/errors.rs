//! Transition error types.
//!
//! Error code: UPLIFT_INVALID_TRANSITION (REJECT). A transition error is a
//! precondition failure reported to the caller; it never mutates state.

use thiserror::Error;

/// An out-of-order, backward or otherwise unsanctioned status change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[REJECT] UPLIFT_INVALID_TRANSITION: {entity} status may not move {from} -> {to}")]
pub struct TransitionError {
    /// Entity kind name whose status was being changed
    pub entity: &'static str,
    /// Source status
    pub from: String,
    /// Requested target status
    pub to: String,
}

impl TransitionError {
    pub fn new(entity: &'static str, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            entity,
            from: from.into(),
            to: to.into(),
        }
    }

    /// Returns the error code string.
    pub fn code(&self) -> &'static str {
        "UPLIFT_INVALID_TRANSITION"
    }
}

/// Result type for transitions.
pub type TransitionResult<T> = Result<T, TransitionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_both_statuses() {
        let err = TransitionError::new("volunteer", "approved", "pending");
        let display = format!("{}", err);
        assert!(display.contains("UPLIFT_INVALID_TRANSITION"));
        assert!(display.contains("approved -> pending"));
    }
}
