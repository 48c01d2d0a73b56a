//! petstore-server: pet CRUD and analytics over HTTP
//!
//! Layers, leaf to root:
//! - `db`: pool provider, schema bootstrap, `PetRepo`
//! - `service`: `PetService` seam over the repository
//! - `http`: axum handlers, error mapping, server lifecycle

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod service;

pub use config::{ConfigError, DatabaseConfig};
pub use db::{DbError, PetRepo, PoolProvider};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use service::{PetService, RepoPetService};
