//! Cart Lines

use crate::products::Product;

/// One product plus a quantity within the cart.
#[derive(Clone, Debug, PartialEq)]
pub struct CartLine<'a> {
    product: Product<'a>,
    quantity: u32,
}

impl<'a> CartLine<'a> {
    /// Creates a line holding a single unit of the product.
    #[must_use]
    pub fn new(product: Product<'a>) -> Self {
        Self::with_quantity(product, 1)
    }

    /// Creates a line with the given quantity; zero is raised to one.
    #[must_use]
    pub fn with_quantity(product: Product<'a>, quantity: u32) -> Self {
        Self {
            product,
            quantity: quantity.max(1),
        }
    }

    /// Returns the product snapshot held by the line.
    pub fn product(&self) -> &Product<'a> {
        &self.product
    }

    /// Returns the quantity of the line.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Whether this line holds the product with the given id.
    pub fn holds(&self, product_id: &str) -> bool {
        self.product.id == product_id
    }

    pub(crate) fn increment(&mut self) -> Option<u32> {
        self.quantity = self.quantity.checked_add(1)?;

        Some(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::RUB};

    use super::*;

    #[test]
    fn zero_quantity_is_raised_to_one() {
        let line = CartLine::with_quantity(Product::new("a", "A", Money::from_minor(1, RUB)), 0);

        assert_eq!(line.quantity(), 1);
    }

    #[test]
    fn increment_stops_at_the_limit() {
        let mut line =
            CartLine::with_quantity(Product::new("a", "A", Money::from_minor(1, RUB)), u32::MAX);

        assert_eq!(line.increment(), None);
        assert_eq!(line.quantity(), u32::MAX);
    }
}
