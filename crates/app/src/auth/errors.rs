//! Auth service errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthServiceError {
    #[error("invalid password")]
    InvalidPassword,

    #[error("password login is disabled")]
    Disabled,
}
