//! Domain models with validation at construction
//!
//! Request payloads are checked when converted into these types.
//! Invalid input returns ValidationError, not panic.

pub mod analytics;
pub mod pet;
pub mod validation;

pub use analytics::{Analytics, TypeStatistic};
pub use pet::{NewPet, Pet, PetId, PetUpdate};
pub use validation::ValidationError;
