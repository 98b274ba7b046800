//! Report Handler

use std::{collections::BTreeMap, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use kiosk_app::domain::reports::models::{MethodStats, Report};

use crate::{
    extensions::*,
    orders::{OrderResponse, order_filter},
    reports::errors::into_status_error,
    state::State,
};

/// Totals for one payment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct MethodStatsResponse {
    pub count: u64,

    /// Sum of amounts in kopecks
    pub sum: u64,
}

impl From<MethodStats> for MethodStatsResponse {
    fn from(stats: MethodStats) -> Self {
        MethodStatsResponse {
            count: stats.count,
            sum: stats.sum,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReportResponse {
    pub rows: Vec<OrderResponse>,

    /// Keyed by payment method; `unknown` collects orders without one
    pub stats: BTreeMap<String, MethodStatsResponse>,
}

impl From<Report> for ReportResponse {
    fn from(report: Report) -> Self {
        ReportResponse {
            rows: report.rows.into_iter().map(Into::into).collect(),
            stats: report
                .stats
                .into_iter()
                .map(|(method, stats)| (method, stats.into()))
                .collect(),
        }
    }
}

/// Report Handler
///
/// Orders in the period grouped by payment method.
#[endpoint(
    tags("reports"),
    summary = "Sales Report",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Report"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed date filter"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Admin credentials required"),
    ),
)]
pub(crate) async fn handler(
    from: QueryParam<String, false>,
    to: QueryParam<String, false>,
    method: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ReportResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let filter = order_filter(from.into_inner(), to.into_inner(), method.into_inner())?;

    let report = state
        .app
        .reports
        .report(filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(report.into()))
}
