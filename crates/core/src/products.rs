//! Products

use rusty_money::{Money, iso::Currency};
use slotmap::new_key_type;

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// A product or service offered in the storefront.
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Stable product identifier, sent to the host on checkout
    pub id: String,

    /// Product name
    pub name: String,

    /// Product description
    pub description: String,

    /// Product price
    pub price: Money<'a, Currency>,

    /// Category key used by the storefront filter
    pub category: Option<String>,
}

impl<'a> Product<'a> {
    /// Creates a product without description or category.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money<'a, Currency>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            category: None,
        }
    }

    /// Returns the product with the given category.
    #[must_use]
    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Returns the product with the given description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether the product belongs to the given category.
    pub fn is_in_category(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::RUB;

    use super::*;

    #[test]
    fn builder_sets_category_and_description() {
        let product = Product::new("design", "UI/UX Design", Money::from_minor(500_000, RUB))
            .in_category("design")
            .with_description("Interface design");

        assert!(product.is_in_category("design"));
        assert!(!product.is_in_category("web"));
        assert_eq!(product.description, "Interface design");
    }
}
