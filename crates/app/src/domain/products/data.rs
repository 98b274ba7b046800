//! Products Data

use crate::domain::{categories::records::CategoryUuid, products::records::ProductUuid};

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub title: String,
    pub description: String,
    pub price: u64,
    pub sku: Option<String>,
    pub image_url: Option<String>,
    pub category_uuid: Option<CategoryUuid>,
}

impl NewProduct {
    /// A product with only a title and a price.
    pub fn new(title: impl Into<String>, price: u64) -> Self {
        Self {
            uuid: ProductUuid::new(),
            title: title.into(),
            description: String::new(),
            price,
            sku: None,
            image_url: None,
            category_uuid: None,
        }
    }
}

/// Product Update Data
///
/// Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<u64>,
    pub sku: Option<String>,
    pub image_url: Option<String>,
    pub category_uuid: Option<CategoryUuid>,
}
