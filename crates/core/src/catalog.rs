//! Catalog

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use slotmap::SlotMap;
use thiserror::Error;

use crate::{
    fixtures::{
        FixtureError,
        products::{CatalogFixture, parse_currency},
    },
    products::{Product, ProductKey},
};

const DEFAULT_CATALOG: &str = include_str!("../fixtures/catalog.yml");

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two products share an identifier.
    #[error("duplicate product id: {0}")]
    DuplicateId(String),

    /// A product is priced in another currency than the catalog.
    #[error("product {0} is priced in {1}, catalog uses {2}")]
    CurrencyMismatch(String, &'static str, &'static str),

    /// A product has a negative price.
    #[error("product {0} has a negative price")]
    NegativePrice(String),

    /// The catalog fixture could not be loaded.
    #[error(transparent)]
    Fixture(#[from] FixtureError),
}

/// Products available in the storefront, in display order.
#[derive(Debug, Clone)]
pub struct Catalog<'a> {
    products: SlotMap<ProductKey, Product<'a>>,
    order: Vec<ProductKey>,
    by_id: FxHashMap<String, ProductKey>,
    currency: &'a Currency,
}

impl<'a> Catalog<'a> {
    /// Creates an empty catalog priced in the given currency.
    pub fn new(currency: &'a Currency) -> Self {
        Self {
            products: SlotMap::with_key(),
            order: Vec::new(),
            by_id: FxHashMap::default(),
            currency,
        }
    }

    /// Adds a product to the end of the catalog.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::DuplicateId`]: a product with the same id exists.
    /// - [`CatalogError::CurrencyMismatch`]: the product uses another currency.
    /// - [`CatalogError::NegativePrice`]: the price is below zero.
    pub fn insert(&mut self, product: Product<'a>) -> Result<ProductKey, CatalogError> {
        if self.by_id.contains_key(&product.id) {
            return Err(CatalogError::DuplicateId(product.id));
        }

        let currency = product.price.currency();

        if currency != self.currency {
            return Err(CatalogError::CurrencyMismatch(
                product.id,
                currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        if product.price.to_minor_units() < 0 {
            return Err(CatalogError::NegativePrice(product.id));
        }

        let id = product.id.clone();
        let key = self.products.insert(product);

        self.order.push(key);
        self.by_id.insert(id, key);

        Ok(key)
    }

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product<'a>> {
        self.by_id
            .get(id)
            .and_then(|key| self.products.get(*key))
    }

    /// Looks up a product key by id.
    pub fn get_key(&self, id: &str) -> Option<ProductKey> {
        self.by_id.get(id).copied()
    }

    /// Looks up a product by key.
    pub fn get_by_key(&self, key: ProductKey) -> Option<&Product<'a>> {
        self.products.get(key)
    }

    /// Iterates over products in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Product<'a>> {
        self.order.iter().filter_map(|key| self.products.get(*key))
    }

    /// Iterates over the products of one category, in display order.
    pub fn in_category<'c>(&'c self, category: &'c str) -> impl Iterator<Item = &'c Product<'a>> {
        self.iter()
            .filter(move |product| product.is_in_category(category))
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Catalog currency.
    pub fn currency(&self) -> &'a Currency {
        self.currency
    }
}

impl Catalog<'static> {
    /// Loads a catalog from YAML.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the YAML is malformed or a product is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let fixture: CatalogFixture = serde_norway::from_str(yaml).map_err(FixtureError::from)?;
        let currency = parse_currency(&fixture.currency)?;

        let mut catalog = Catalog::new(currency);

        for product in fixture.products {
            catalog.insert(Product::try_from(product)?)?;
        }

        Ok(catalog)
    }

    /// Loads a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the file cannot be read or is invalid.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, CatalogError> {
        let yaml = std::fs::read_to_string(path).map_err(FixtureError::from)?;

        Self::from_yaml(&yaml)
    }

    /// The demo catalog of six services.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the bundled fixture is invalid.
    pub fn demo() -> Result<Self, CatalogError> {
        Self::from_yaml(DEFAULT_CATALOG)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{
        Money,
        iso::{RUB, USD},
    };
    use testresult::TestResult;

    use super::*;

    #[test]
    fn demo_catalog_has_six_services_in_order() -> TestResult {
        let catalog = Catalog::demo()?;

        let ids: Vec<&str> = catalog.iter().map(|product| product.id.as_str()).collect();

        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
        assert_eq!(catalog.currency(), RUB);
        assert_eq!(
            catalog.get("4").map(|product| product.price),
            Some(Money::from_minor(1_500_000, RUB))
        );

        Ok(())
    }

    #[test]
    fn category_filter_keeps_display_order() -> TestResult {
        let catalog = Catalog::demo()?;

        let web: Vec<&str> = catalog
            .in_category("web")
            .map(|product| product.id.as_str())
            .collect();

        assert_eq!(web, vec!["1", "4", "5"]);
        assert_eq!(catalog.in_category("missing").count(), 0);

        Ok(())
    }

    #[test]
    fn insert_rejects_duplicates_and_foreign_currency() -> TestResult {
        let mut catalog = Catalog::new(RUB);

        catalog.insert(Product::new("a", "A", Money::from_minor(100, RUB)))?;

        assert!(matches!(
            catalog.insert(Product::new("a", "Again", Money::from_minor(100, RUB))),
            Err(CatalogError::DuplicateId(id)) if id == "a"
        ));
        assert!(matches!(
            catalog.insert(Product::new("b", "B", Money::from_minor(100, USD))),
            Err(CatalogError::CurrencyMismatch(..))
        ));
        assert!(matches!(
            catalog.insert(Product::new("c", "C", Money::from_minor(-1, RUB))),
            Err(CatalogError::NegativePrice(id)) if id == "c"
        ));
        assert_eq!(catalog.len(), 1);

        Ok(())
    }

    #[test]
    fn from_yaml_rejects_unknown_currency() {
        let yaml = "currency: XYZ\nproducts: []\n";

        assert!(matches!(
            Catalog::from_yaml(yaml),
            Err(CatalogError::Fixture(FixtureError::UnknownCurrency(code))) if code == "XYZ"
        ));
    }
}
