//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use kiosk_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::AlreadyExists => StatusError::conflict().brief("Order already exists"),
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::InvalidReference => {
            StatusError::bad_request().brief("Unknown product")
        }
        OrdersServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Order has nothing to record")
        }
        OrdersServiceError::InvalidData | OrdersServiceError::InvalidAmount(_) => {
            StatusError::bad_request().brief("Invalid order payload")
        }
        OrdersServiceError::InvalidFilter(source) => {
            StatusError::bad_request().brief(format!("Invalid date filter: {source}"))
        }
        OrdersServiceError::Payload(source) => {
            error!("failed to encode checkout message: {source}");

            StatusError::internal_server_error()
        }
        OrdersServiceError::Sql(source) => {
            error!("order storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
