//! Fixtures
//!
//! YAML descriptions of catalogs, used by the demo storefront, the import
//! command and tests.

use thiserror::Error;

pub mod products;

/// Errors raised while loading fixtures.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The YAML could not be parsed.
    #[error("invalid fixture YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// The fixture file could not be read.
    #[error("failed to read fixture: {0}")]
    Io(#[from] std::io::Error),

    /// A price string was malformed.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// A currency code is not supported.
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),
}
