//! Admin Config

use clap::Args;

/// Admin gate settings.
#[derive(Debug, Args)]
pub struct AdminConfig {
    /// Admin password; admin login is disabled when absent
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    pub admin_password: Option<String>,
}
