//! HTTP server command for the petstore API

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use petstore_server::{run_server, DatabaseConfig, PoolProvider, ServerConfig};

use super::db::DbArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "PETSTORE_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting petstore server on {}", args.bind);

    let provider = PoolProvider::new(DatabaseConfig::from(args.db));
    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Blocks until shutdown
    run_server(&provider, config)
        .await
        .context("Server error")?;

    Ok(())
}
