//! Order Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    extensions::*,
    orders::{OrderResponse, into_status_error, order_filter},
    state::State,
};

/// Order Index Handler
///
/// Returns orders newest first, optionally limited to a range of days
/// (inclusive, UTC) and a payment method.
#[endpoint(
    tags("orders"),
    summary = "List Orders",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Matching orders"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed date filter"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Admin credentials required"),
    ),
)]
pub(crate) async fn handler(
    from: QueryParam<String, false>,
    to: QueryParam<String, false>,
    method: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<OrderResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let filter = order_filter(from.into_inner(), to.into_inner(), method.into_inner())?;

    let orders = state
        .app
        .orders
        .list_orders(filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(orders.into_iter().map(Into::into).collect()))
}
