//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Parameterized statements only
//! - Absence is reported as `None`/`false`, store faults as `DbError`

pub mod pets;

pub use pets::{DbError, PetField, PetRepo};
