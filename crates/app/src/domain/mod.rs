//! Storefront Domain Concerns

pub mod categories;
pub mod diagnostics;
pub mod orders;
pub mod payments;
pub mod products;
pub mod reports;
pub mod settings;
