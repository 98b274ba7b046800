//! Diagnostics Models

use crate::database::Backend;

/// Row counts of the storefront tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub products: u64,
    pub categories: u64,
    pub orders: u64,
    pub payment_methods: u64,
}

/// Which storage backend is in use and what it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageStatus {
    pub backend: Backend,
    pub tables: TableCounts,
}
