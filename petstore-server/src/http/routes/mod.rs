//! Route handlers organized by resource

pub mod analytics;
pub mod health;
pub mod pets;
