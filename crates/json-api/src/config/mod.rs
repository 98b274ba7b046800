//! Server configuration module

use std::net::SocketAddr;

use clap::Parser;

use crate::config::{
    admin::AdminConfig,
    database::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
    storage::StorageConfig,
};

pub(crate) mod admin;
pub(crate) mod database;
pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod storage;

/// Kiosk storefront server configuration
#[derive(Debug, Parser)]
#[command(name = "kiosk-json", about = "Kiosk storefront JSON API server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request observability settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Admin gate settings.
    #[command(flatten)]
    pub admin: AdminConfig,

    /// Static files and uploads.
    #[command(flatten)]
    pub storage: StorageConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        self.server.socket_addr()
    }
}
