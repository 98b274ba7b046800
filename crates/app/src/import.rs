//! Catalog Import
//!
//! Loads a storefront catalog (see [`kiosk::catalog::Catalog`]) into the
//! products and categories tables. The catalog id becomes the product SKU, so
//! importing the same catalog twice skips what is already there.

use kiosk::{
    catalog::Catalog,
    pricing::{major_units, minor_units},
};
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{
    categories::{CategoriesService, CategoriesServiceError},
    products::{ProductsService, ProductsServiceError, data::NewProduct},
};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("product {0} has a negative price")]
    NegativePrice(String),

    #[error("failed to store category")]
    Category(#[from] CategoriesServiceError),

    #[error("failed to store product")]
    Product(#[from] ProductsServiceError),
}

/// Outcome of an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub created: usize,
    pub skipped: usize,
}

/// Import every product of the catalog.
///
/// # Errors
///
/// Returns an error when a product cannot be converted or stored. Products
/// whose SKU already exists are skipped.
pub async fn import_catalog(
    catalog: &Catalog<'_>,
    categories: &dyn CategoriesService,
    products: &dyn ProductsService,
) -> Result<ImportSummary, ImportError> {
    let mut summary = ImportSummary::default();

    for product in catalog.iter() {
        let price = minor_units(major_units(&product.price), product.price.currency())
            .ok_or_else(|| ImportError::NegativePrice(product.id.clone()))?;

        let category_uuid = match product.category.as_deref() {
            Some(name) => Some(categories.find_or_create_category(name).await?.uuid),
            None => None,
        };

        let result = products
            .create_product(NewProduct {
                description: product.description.clone(),
                sku: Some(product.id.clone()),
                category_uuid,
                ..NewProduct::new(product.name.clone(), price)
            })
            .await;

        match result {
            Ok(created) => {
                debug!(sku = %product.id, product = %created.uuid, "imported product");
                summary.created += 1;
            }
            Err(ProductsServiceError::AlreadyExists) => {
                debug!(sku = %product.id, "product already imported");
                summary.skipped += 1;
            }
            Err(error) => return Err(error.into()),
        }
    }

    info!(
        created = summary.created,
        skipped = summary.skipped,
        "catalog imported"
    );

    Ok(summary)
}
