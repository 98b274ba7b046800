//! Payment Method Errors

use salvo::http::StatusError;
use tracing::error;

use kiosk_app::domain::payments::PaymentsServiceError;

pub(crate) fn into_status_error(error: PaymentsServiceError) -> StatusError {
    match error {
        PaymentsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Payment method already exists")
        }
        PaymentsServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Payment method name is required")
        }
        PaymentsServiceError::InvalidReference | PaymentsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid payment method payload")
        }
        PaymentsServiceError::NotFound => {
            StatusError::not_found().brief("Payment method not found")
        }
        PaymentsServiceError::Sql(source) => {
            error!("payment method storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
