//! Load-generation command: fill the pets table with random rows

use anyhow::{bail, Context, Result};
use clap::Parser;

use petstore_server::db::seed::{seed_pets, DEFAULT_SEED_COUNT};
use petstore_server::{DatabaseConfig, PetRepo, PoolProvider};

use super::db::DbArgs;

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Number of pets to insert
    #[arg(long, short = 'n', default_value_t = DEFAULT_SEED_COUNT)]
    pub count: usize,

    #[command(flatten)]
    pub db: DbArgs,
}

pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let provider = PoolProvider::new(DatabaseConfig::from(args.db));
    let pool = provider
        .get()
        .await
        .context("Failed to create database pool")?
        .clone();

    let report = seed_pets(&PetRepo::new(pool), args.count).await;
    provider.close().await;

    if report.inserted == 0 && report.failed > 0 {
        bail!("Seeding failed: none of {} inserts succeeded", report.failed);
    }

    println!("Inserted {} pets ({} failed)", report.inserted, report.failed);
    Ok(())
}
