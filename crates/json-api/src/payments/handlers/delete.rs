//! Delete Payment Method Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, payments::errors::into_status_error, state::State};

/// Delete Payment Method Handler
#[endpoint(
    tags("payments"),
    summary = "Delete Payment Method",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Payment method deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Payment method not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Admin credentials required"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .payments
        .delete_payment_method(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
