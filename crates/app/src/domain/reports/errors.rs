//! Reports service errors.

use thiserror::Error;

use crate::domain::orders::OrdersServiceError;

#[derive(Debug, Error)]
pub enum ReportsServiceError {
    #[error("failed to load orders")]
    Orders(#[from] OrdersServiceError),

    #[error("failed to write csv")]
    Csv(#[from] csv::Error),

    #[error("failed to flush csv")]
    Io(#[from] std::io::Error),
}

impl From<sqlx::Error> for ReportsServiceError {
    fn from(error: sqlx::Error) -> Self {
        Self::Orders(OrdersServiceError::from(error))
    }
}
