//! Category Errors

use salvo::http::StatusError;
use tracing::error;

use kiosk_app::domain::categories::CategoriesServiceError;

pub(crate) fn into_status_error(error: CategoriesServiceError) -> StatusError {
    match error {
        CategoriesServiceError::AlreadyExists => {
            StatusError::conflict().brief("Category already exists")
        }
        CategoriesServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Category name is required")
        }
        CategoriesServiceError::InvalidReference | CategoriesServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid category payload")
        }
        CategoriesServiceError::NotFound => StatusError::not_found().brief("Category not found"),
        CategoriesServiceError::Sql(source) => {
            error!("category storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
