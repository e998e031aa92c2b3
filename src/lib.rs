//! uplift - A strict, validation-first domain core for a non-profit platform
//!
//! Fourteen persisted entity kinds, their insert contracts, runtime
//! validators, status-transition rules and a reference in-memory persistence
//! adapter.

pub mod cli;
pub mod entities;
pub mod observability;
pub mod schema;
pub mod store;
pub mod transition;
