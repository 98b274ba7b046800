//! Depot helper extensions.

use std::any::{Any, type_name};

use salvo::prelude::{Depot, StatusError};
use tracing::error;

/// Typed depot lookups that fail as a 500.
pub(crate) trait DepotExt {
    /// Borrow a value injected by a hoop; a missing value is a wiring bug.
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_missing| {
            error!(kind = type_name::<T>(), "depot has no injected value");

            StatusError::internal_server_error()
        })
    }
}
