//! Cart

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    pricing::{TotalPriceError, total_price},
    products::Product,
};

pub mod lines;

use lines::CartLine;

/// Errors related to cart mutations or totals.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// A product's currency differs from the cart currency (product currency, cart currency).
    #[error("Product has currency {0}, but cart has currency {1}")]
    CurrencyMismatch(&'static str, &'static str),

    /// No line exists at the given index.
    #[error("Line {0} not found")]
    LineNotFound(usize),

    /// The line quantity cannot grow any further.
    #[error("Quantity limit reached for product {0}")]
    QuantityOverflow(String),

    /// The total could not be computed.
    #[error(transparent)]
    Total(#[from] TotalPriceError),
}

/// In-memory shopping cart.
///
/// Lines keep the order in which products were first added. A product appears
/// in at most one line.
#[derive(Debug, Clone)]
pub struct Cart<'a> {
    lines: Vec<CartLine<'a>>,
    currency: &'a Currency,
}

impl<'a> Cart<'a> {
    /// Create a new, empty cart.
    #[must_use]
    pub fn new(currency: &'a Currency) -> Self {
        Cart {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add one unit of a product.
    ///
    /// Increments the quantity of the line already holding the product, or
    /// appends a new line with a quantity of one.
    ///
    /// # Errors
    ///
    /// - [`CartError::CurrencyMismatch`]: the product is priced in another currency.
    /// - [`CartError::QuantityOverflow`]: the line quantity is already at its limit.
    pub fn add(&mut self, product: &Product<'a>) -> Result<&CartLine<'a>, CartError> {
        let product_currency = product.price.currency();

        if product_currency != self.currency {
            return Err(CartError::CurrencyMismatch(
                product_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        let index = match self.lines.iter().position(|line| line.holds(&product.id)) {
            Some(index) => {
                self.lines
                    .get_mut(index)
                    .and_then(CartLine::increment)
                    .ok_or_else(|| CartError::QuantityOverflow(product.id.clone()))?;

                index
            }
            None => {
                self.lines.push(CartLine::new(product.clone()));

                self.lines.len() - 1
            }
        };

        self.get_line(index)
    }

    /// Remove the line at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] if the index is out of range; the
    /// cart is left unchanged.
    pub fn remove(&mut self, index: usize) -> Result<CartLine<'a>, CartError> {
        if index >= self.lines.len() {
            return Err(CartError::LineNotFound(index));
        }

        Ok(self.lines.remove(index))
    }

    /// Calculate the sum of price × quantity across all lines.
    ///
    /// # Errors
    ///
    /// Returns a `TotalPriceError` if a line total overflows or money arithmetic fails.
    pub fn total(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        total_price(&self.lines, self.currency)
    }

    /// Get a line from the cart.
    ///
    /// # Errors
    ///
    /// Returns a `CartError::LineNotFound` if the line is not found.
    pub fn get_line(&self, index: usize) -> Result<&CartLine<'a>, CartError> {
        self.lines.get(index).ok_or(CartError::LineNotFound(index))
    }

    /// Iterate over the lines in the cart.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine<'a>> {
        self.lines.iter()
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Get the number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity())).sum()
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'a Currency {
        self.currency
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{RUB, USD};
    use testresult::TestResult;

    use super::*;

    fn web() -> Product<'static> {
        Product::new("web", "Web development", Money::from_minor(1_000_000, RUB))
    }

    fn design() -> Product<'static> {
        Product::new("design", "UI/UX Design", Money::from_minor(500_000, RUB))
    }

    #[test]
    fn new_cart_is_empty() -> TestResult {
        let cart = Cart::new(RUB);

        assert!(cart.is_empty());
        assert_eq!(cart.currency(), RUB);
        assert_eq!(cart.total()?, Money::from_minor(0, RUB));

        Ok(())
    }

    #[test]
    fn adding_same_product_twice_increments_quantity() -> TestResult {
        let mut cart = Cart::new(RUB);

        cart.add(&web())?;
        let line = cart.add(&web())?;

        assert_eq!(line.quantity(), 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 2);

        Ok(())
    }

    #[test]
    fn adding_different_products_appends_lines_in_order() -> TestResult {
        let mut cart = Cart::new(RUB);

        cart.add(&web())?;
        cart.add(&design())?;
        cart.add(&web())?;

        let ids: Vec<&str> = cart.iter().map(|line| line.product().id.as_str()).collect();

        assert_eq!(ids, vec!["web", "design"]);

        Ok(())
    }

    #[test]
    fn add_rejects_currency_mismatch() {
        let mut cart = Cart::new(RUB);
        let product = Product::new("usd", "Dollar item", Money::from_minor(100, USD));

        let result = cart.add(&product).map(CartLine::quantity);

        assert_eq!(
            result,
            Err(CartError::CurrencyMismatch(
                USD.iso_alpha_code,
                RUB.iso_alpha_code
            ))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn removing_only_line_empties_cart() -> TestResult {
        let mut cart = Cart::new(RUB);

        cart.add(&web())?;
        cart.add(&web())?;

        let removed = cart.remove(0)?;

        assert_eq!(removed.quantity(), 2);
        assert!(cart.is_empty());
        assert_eq!(cart.total()?, Money::from_minor(0, RUB));

        Ok(())
    }

    #[test]
    fn remove_out_of_range_is_rejected() -> TestResult {
        let mut cart = Cart::new(RUB);

        cart.add(&web())?;

        assert_eq!(cart.remove(1), Err(CartError::LineNotFound(1)));
        assert_eq!(cart.len(), 1);

        Ok(())
    }

    #[test]
    fn total_sums_price_times_quantity() -> TestResult {
        let mut cart = Cart::new(RUB);

        cart.add(&web())?;
        cart.add(&design())?;
        cart.add(&design())?;

        assert_eq!(cart.total()?, Money::from_minor(2_000_000, RUB));

        Ok(())
    }

    #[test]
    fn get_line_missing_returns_error() {
        let cart = Cart::new(RUB);

        assert!(matches!(cart.get_line(0), Err(CartError::LineNotFound(0))));
    }

    #[test]
    fn clear_removes_all_lines() -> TestResult {
        let mut cart = Cart::new(RUB);

        cart.add(&web())?;
        cart.add(&design())?;
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);

        Ok(())
    }
}
