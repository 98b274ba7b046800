//! Report Errors

use salvo::http::StatusError;
use tracing::error;

use kiosk_app::domain::reports::ReportsServiceError;

use crate::orders;

pub(crate) fn into_status_error(error: ReportsServiceError) -> StatusError {
    match error {
        ReportsServiceError::Orders(source) => orders::into_status_error(source),
        ReportsServiceError::Csv(source) => {
            error!("failed to write report csv: {source}");

            StatusError::internal_server_error()
        }
        ReportsServiceError::Io(source) => {
            error!("failed to flush report csv: {source}");

            StatusError::internal_server_error()
        }
    }
}
