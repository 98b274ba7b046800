//! Diagnostics service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Row, query};

use crate::{
    columns::to_u64,
    database::Db,
    domain::diagnostics::models::{StorageStatus, TableCounts},
};

const TABLE_COUNTS_SQL: &str = include_str!("sql/table_counts.sql");

#[derive(Debug, Clone)]
pub struct SqliteDiagnosticsService {
    db: Db,
}

impl SqliteDiagnosticsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DiagnosticsService for SqliteDiagnosticsService {
    async fn status(&self) -> Result<StorageStatus, sqlx::Error> {
        let row = query(TABLE_COUNTS_SQL).fetch_one(self.db.pool()).await?;

        Ok(StorageStatus {
            backend: self.db.backend(),
            tables: TableCounts {
                products: to_u64("products", row.try_get("products")?)?,
                categories: to_u64("categories", row.try_get("categories")?)?,
                orders: to_u64("orders", row.try_get("orders")?)?,
                payment_methods: to_u64("payment_methods", row.try_get("payment_methods")?)?,
            },
        })
    }
}

#[automock]
#[async_trait]
pub trait DiagnosticsService: Send + Sync {
    /// Storage backend and table sizes.
    async fn status(&self) -> Result<StorageStatus, sqlx::Error>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        database::Backend,
        domain::products::{ProductsService, data::NewProduct},
        test::TestContext,
    };

    use super::*;

    #[tokio::test]
    async fn counts_reflect_stored_rows() -> TestResult {
        let ctx = TestContext::new().await?;

        ctx.products
            .create_product(NewProduct::new("Technical support", 2_000))
            .await?;

        let status = ctx.diagnostics.status().await?;

        assert_eq!(status.backend, Backend::Memory);
        assert_eq!(
            status.tables,
            TableCounts {
                products: 1,
                categories: 0,
                orders: 0,
                payment_methods: 6,
            }
        );

        Ok(())
    }
}
