//! Command implementations for petstore CLI

pub mod db;
pub mod seed;
pub mod serve;

pub use seed::run_seed;
pub use serve::run_serve;
