//! Storage Diagnostics Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use kiosk_app::domain::diagnostics::models::{StorageStatus, TableCounts};

use crate::{extensions::*, state::State};

/// Row counts per storefront table.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TableCountsResponse {
    pub products: u64,
    pub categories: u64,
    pub orders: u64,
    pub payment_methods: u64,
}

/// Storage diagnostics response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DebugResponse {
    /// `sqlite` or `memory`
    pub backend: String,

    pub tables: TableCountsResponse,
}

impl From<TableCounts> for TableCountsResponse {
    fn from(counts: TableCounts) -> Self {
        TableCountsResponse {
            products: counts.products,
            categories: counts.categories,
            orders: counts.orders,
            payment_methods: counts.payment_methods,
        }
    }
}

impl From<StorageStatus> for DebugResponse {
    fn from(status: StorageStatus) -> Self {
        DebugResponse {
            backend: status.backend.as_str().to_string(),
            tables: status.tables.into(),
        }
    }
}

/// Storage Diagnostics Handler
///
/// Reports which backend is in use and how many rows each table holds.
#[endpoint(tags("debug"), summary = "Storage Diagnostics", security(("bearer_auth" = [])))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<DebugResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let status = state
        .app
        .diagnostics
        .status()
        .await
        .or_500("failed to read storage status")?;

    Ok(Json(status.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use kiosk_app::database::Backend;

    use crate::test_helpers::{Mocks, service};

    use super::*;

    #[tokio::test]
    async fn test_reports_backend_and_counts() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.diagnostics.expect_status().once().return_once(|| {
            Ok(StorageStatus {
                backend: Backend::Memory,
                tables: TableCounts {
                    products: 6,
                    payment_methods: 6,
                    ..TableCounts::default()
                },
            })
        });

        let mut res = TestClient::get("http://example.com/api/debug")
            .send(&service(mocks, Router::with_path("api/debug").get(handler)))
            .await;

        let body: DebugResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.backend, "memory");
        assert_eq!(body.tables.products, 6);
        assert_eq!(body.tables.orders, 0);

        Ok(())
    }
}
