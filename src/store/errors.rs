//! Store error taxonomy.
//!
//! Every failure is a typed, recoverable value returned to the caller:
//! - UPLIFT_VALIDATION_FAILED — field-level failures, surfaced verbatim
//! - UPLIFT_UNIQUENESS_VIOLATION — retrying the same value cannot succeed
//! - UPLIFT_INVALID_TRANSITION — precondition failure at a mutation point
//! - UPLIFT_REFERENTIAL_VIOLATION — a foreign key names no existing row
//!
//! None of these are fatal to the process.

use thiserror::Error;
use uuid::Uuid;

use crate::schema::ValidationErrors;
use crate::transition::TransitionError;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures the persistence adapter can report.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The candidate failed insert validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// A uniqueness invariant was violated at persistence time.
    #[error("[REJECT] UPLIFT_UNIQUENESS_VIOLATION: {entity} {field} '{value}' already exists")]
    Uniqueness {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// A referential field does not resolve to an existing row.
    #[error(
        "[REJECT] UPLIFT_REFERENTIAL_VIOLATION: {field} '{id}' does not reference an existing {target}"
    )]
    Referential {
        field: &'static str,
        target: &'static str,
        id: Uuid,
    },

    /// An unsanctioned status change was requested.
    #[error(transparent)]
    Transition(#[from] TransitionError),

    /// The row a mutation targets does not exist.
    #[error("[REJECT] UPLIFT_NOT_FOUND: {entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    /// A certificate already exists for this (volunteer, event) issuance.
    #[error(
        "[REJECT] UPLIFT_DUPLICATE_CERTIFICATE: certificate already issued for volunteer '{volunteer_id}' and event '{event_id}'"
    )]
    DuplicateCertificate { volunteer_id: Uuid, event_id: Uuid },

    /// Monetary increments on `raised` must be strictly positive.
    #[error("[REJECT] UPLIFT_NON_POSITIVE_INCREMENT: raised increment must be positive, got {0}")]
    NonPositiveIncrement(i64),

    /// A normalized insert value failed to round-trip into its typed
    /// contract. Indicates a schema/entity definition mismatch.
    #[error("[REJECT] UPLIFT_CODEC_FAILURE: {0}")]
    Codec(#[from] serde_json::Error),
}

impl StoreError {
    /// Returns the error code string.
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Validation(errors) => errors.code(),
            StoreError::Uniqueness { .. } => "UPLIFT_UNIQUENESS_VIOLATION",
            StoreError::Referential { .. } => "UPLIFT_REFERENTIAL_VIOLATION",
            StoreError::Transition(err) => err.code(),
            StoreError::NotFound { .. } => "UPLIFT_NOT_FOUND",
            StoreError::DuplicateCertificate { .. } => "UPLIFT_DUPLICATE_CERTIFICATE",
            StoreError::NonPositiveIncrement(_) => "UPLIFT_NON_POSITIVE_INCREMENT",
            StoreError::Codec(_) => "UPLIFT_CODEC_FAILURE",
        }
    }
}
