//! Domain schema subsystem: entity kinds, insert contracts and validation.
//!
//! # Design Principles
//!
//! - Validation before persistence, always (V1)
//! - Insert contracts are strict subsets of the persisted shape (V2)
//! - No undeclared fields, no nulls, no coercion (V3)
//! - Validation is pure, total and deterministic (V4)
//! - Defaults are assigned by the persistence layer, never here (V5)

mod errors;
mod registry;
mod types;
mod validator;

pub use errors::{FieldFailure, ValidationErrors, ValidationResult};
pub use registry::{insert_schema, USER_ROLES};
pub use types::{EntityKind, FieldDef, FieldType, Fields, InsertSchema, UnknownEntityKind};
pub use validator::validate_insert;
