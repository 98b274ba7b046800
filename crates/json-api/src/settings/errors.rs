//! Shop Settings Errors

use salvo::http::StatusError;
use tracing::error;

use kiosk_app::domain::settings::SettingsServiceError;

pub(crate) fn into_status_error(error: SettingsServiceError) -> StatusError {
    match error {
        SettingsServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Shop name and holder name are required")
        }
        SettingsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid shop settings")
        }
        SettingsServiceError::Sql(source) => {
            error!("shop settings storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
