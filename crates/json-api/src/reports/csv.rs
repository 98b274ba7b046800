//! Report CSV Handler

use std::sync::Arc;

use salvo::{
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    oapi::extract::QueryParam,
    prelude::*,
};

use crate::{extensions::*, orders::order_filter, reports::errors::into_status_error, state::State};

/// Report CSV Handler
///
/// Same selection as the JSON report, one line per order, as a download.
#[endpoint(
    tags("reports"),
    summary = "Sales Report CSV",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "report.csv attachment"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed date filter"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Admin credentials required"),
    ),
)]
pub(crate) async fn handler(
    from: QueryParam<String, false>,
    to: QueryParam<String, false>,
    method: QueryParam<String, false>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let filter = order_filter(from.into_inner(), to.into_inner(), method.into_inner())?;

    let csv = state
        .app
        .reports
        .report_csv(filter)
        .await
        .map_err(into_status_error)?;

    res.add_header(CONTENT_TYPE, "text/csv; charset=utf-8", true)
        .or_500("failed to set content type header")?
        .add_header(CONTENT_DISPOSITION, "attachment; filename=\"report.csv\"", true)
        .or_500("failed to set content disposition header")?
        .write_body(csv)
        .or_500("failed to write report body")?;

    Ok(())
}
