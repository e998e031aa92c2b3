//! Validation error types.
//!
//! Error codes:
//! - UPLIFT_VALIDATION_FAILED (REJECT)
//!
//! Validation is total: a single `ValidationErrors` value carries every field
//! failure found in the candidate, in deterministic (field-path) order, each
//! with a reason suitable for display next to the offending input.

use std::fmt;

use super::types::EntityKind;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    /// Field path (e.g. "email", "author.name", "interests[2]")
    pub field: String,
    /// Expected type or condition
    pub expected: String,
    /// Actual value or shape found
    pub actual: String,
}

impl FieldFailure {
    pub fn new(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: "field to be present".into(),
            actual: "missing".into(),
        }
    }

    pub fn undeclared_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: "no undeclared fields".into(),
            actual: "undeclared field present".into(),
        }
    }

    pub fn null_value(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: "non-null value".into(),
            actual: "null".into(),
        }
    }
}

impl fmt::Display for FieldFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field '{}': expected {}, got {}",
            self.field, self.expected, self.actual
        )
    }
}

/// All field failures for one rejected candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    kind: EntityKind,
    failures: Vec<FieldFailure>,
}

impl ValidationErrors {
    /// Create a validation error set. `failures` must be non-empty.
    pub fn new(kind: EntityKind, failures: Vec<FieldFailure>) -> Self {
        debug_assert!(!failures.is_empty());
        Self { kind, failures }
    }

    /// Returns the error code string.
    pub fn code(&self) -> &'static str {
        "UPLIFT_VALIDATION_FAILED"
    }

    /// Returns the entity kind the candidate was validated against.
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Returns every field failure, in deterministic order.
    pub fn failures(&self) -> &[FieldFailure] {
        &self.failures
    }

    /// Returns whether any failure names the given field path.
    pub fn names_field(&self, field: &str) -> bool {
        self.failures.iter().any(|f| f.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[REJECT] {}: {} insert invalid ({} failure{})",
            self.code(),
            self.kind,
            self.failures.len(),
            if self.failures.len() == 1 { "" } else { "s" }
        )?;
        for failure in &self.failures {
            write!(f, "; {}", failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Result type for validation.
pub type ValidationResult<T> = Result<T, ValidationErrors>;
