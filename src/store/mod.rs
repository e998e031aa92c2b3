//! Persistence adapter for the domain schema.
//!
//! # Design Principles
//!
//! - Validation before persistence (V1): `insert` rejects before any write
//! - Identity, creation timestamps and defaults are assigned here (V5)
//! - Uniqueness, referential integrity and status transitions are enforced
//!   at the point of mutation
//! - `raised` totals only grow, updated read-modify-write in one operation

mod errors;
mod memory;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
