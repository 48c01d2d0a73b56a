//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - One pool per process, owned by `PoolProvider` - no global statics
//! - Schema is ensured when the pool is first created
//! - Repositories surface store errors unchanged; "not found" is a value

pub mod pool;
pub mod repos;
pub mod schema;
pub mod seed;

pub use pool::PoolProvider;
pub use repos::*;
