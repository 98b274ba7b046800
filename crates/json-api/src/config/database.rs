//! Database Config

use clap::Args;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `SQLite` connection string; data is kept in memory when absent
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}
