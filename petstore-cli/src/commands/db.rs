//! Database connection flags shared by every command
//!
//! Unset flags fall back to `DatabaseConfig::default()`.

use clap::Args;
use petstore_server::DatabaseConfig;

#[derive(Args, Debug, Clone, Default)]
pub struct DbArgs {
    /// PostgreSQL host [default: localhost]
    #[arg(long, env = "POSTGRES_HOST")]
    pub db_host: Option<String>,

    /// PostgreSQL port [default: 5432]
    #[arg(long, env = "POSTGRES_PORT")]
    pub db_port: Option<u16>,

    /// PostgreSQL user [default: postgres]
    #[arg(long, env = "POSTGRES_USER")]
    pub db_user: Option<String>,

    /// PostgreSQL password [default: empty]
    #[arg(long, env = "POSTGRES_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// PostgreSQL database name [default: postgres]
    #[arg(long, env = "POSTGRES_DATABASE")]
    pub db_name: Option<String>,
}

impl From<DbArgs> for DatabaseConfig {
    fn from(args: DbArgs) -> Self {
        let defaults = DatabaseConfig::default();
        Self {
            host: args.db_host.unwrap_or(defaults.host),
            port: args.db_port.unwrap_or(defaults.port),
            user: args.db_user.unwrap_or(defaults.user),
            password: args.db_password.unwrap_or(defaults.password),
            name: args.db_name.unwrap_or(defaults.name),
            ..defaults
        }
    }
}
