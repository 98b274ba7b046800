//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    auth::{AuthService, SessionAuthService},
    database::{self, Db},
    domain::{
        categories::{CategoriesService, SqliteCategoriesService},
        diagnostics::{DiagnosticsService, SqliteDiagnosticsService},
        orders::{OrdersService, SqliteOrdersService},
        payments::{PaymentsService, PaymentsServiceError, SqlitePaymentsService},
        products::{ProductsService, SqliteProductsService},
        reports::{ReportsService, SqliteReportsService},
        settings::{SettingsService, SqliteSettingsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply migrations")]
    Migration(#[source] MigrateError),

    #[error("failed to seed payment methods")]
    Seed(#[source] PaymentsServiceError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub categories: Arc<dyn CategoriesService>,
    pub payments: Arc<dyn PaymentsService>,
    pub orders: Arc<dyn OrdersService>,
    pub reports: Arc<dyn ReportsService>,
    pub settings: Arc<dyn SettingsService>,
    pub diagnostics: Arc<dyn DiagnosticsService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from an optional database URL.
    ///
    /// Without a URL the data lives in memory. Migrations are applied and the
    /// default payment methods are seeded into an empty table.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting, migrating or seeding fails.
    pub async fn from_database_url(
        url: Option<&str>,
        admin_password: Option<&str>,
    ) -> Result<Self, AppInitError> {
        let db = database::open(url).await.map_err(AppInitError::Database)?;

        database::migrate(db.pool())
            .await
            .map_err(AppInitError::Migration)?;

        let payments = SqlitePaymentsService::new(db.clone());

        payments
            .seed_default_methods()
            .await
            .map_err(AppInitError::Seed)?;

        Ok(Self::from_db(db, payments, admin_password))
    }

    fn from_db(db: Db, payments: SqlitePaymentsService, admin_password: Option<&str>) -> Self {
        Self {
            products: Arc::new(SqliteProductsService::new(db.clone())),
            categories: Arc::new(SqliteCategoriesService::new(db.clone())),
            payments: Arc::new(payments),
            orders: Arc::new(SqliteOrdersService::new(db.clone())),
            reports: Arc::new(SqliteReportsService::new(db.clone())),
            settings: Arc::new(SqliteSettingsService::new(db.clone())),
            diagnostics: Arc::new(SqliteDiagnosticsService::new(db)),
            auth: Arc::new(SessionAuthService::new(admin_password)),
        }
    }
}
