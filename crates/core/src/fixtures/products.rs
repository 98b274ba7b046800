//! Product Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, RUB, USD},
};
use serde::Deserialize;

use crate::{fixtures::FixtureError, products::Product};

/// Catalog as written in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Catalog currency code (e.g., "RUB")
    pub currency: String,

    /// Products in display order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product identifier
    pub id: String,

    /// Product name
    pub name: String,

    /// Product description
    #[serde(default)]
    pub description: String,

    /// Product price (e.g., "5000 RUB")
    pub price: String,

    /// Category key
    #[serde(default)]
    pub category: Option<String>,
}

impl TryFrom<ProductFixture> for Product<'_> {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        Ok(Product {
            id: fixture.id,
            name: fixture.name,
            description: fixture.description,
            price: Money::from_minor(minor_units, currency),
            category: fixture.category,
        })
    }
}

/// Look up a supported currency by its ISO code.
///
/// # Errors
///
/// Returns [`FixtureError::UnknownCurrency`] for codes outside the supported set.
pub fn parse_currency(code: &str) -> Result<&'static Currency, FixtureError> {
    match code {
        "RUB" => Ok(RUB),
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(FixtureError::UnknownCurrency(other.to_string())),
    }
}

/// Parse price string (e.g., "2.99 GBP") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(code), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let currency = parse_currency(code)?;

    let minor_units = amount
        .parse::<Decimal>()
        .ok()
        .and_then(|value| value.checked_mul(Decimal::new(100, 0)))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, currency))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_rejects_invalid_format() {
        let result = parse_price("2.99RUB");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("2.99 ABC");

        assert!(matches!(result, Err(FixtureError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn parse_price_accepts_whole_and_fractional_amounts() -> Result<(), FixtureError> {
        let (rub_minor, rub) = parse_price("10000 RUB")?;
        let (eur_minor, eur) = parse_price("2.50 EUR")?;

        assert_eq!(rub_minor, 1_000_000);
        assert_eq!(rub, RUB);
        assert_eq!(eur_minor, 250);
        assert_eq!(eur, EUR);

        Ok(())
    }

    #[test]
    fn product_fixture_converts_to_product() -> Result<(), FixtureError> {
        let fixture = ProductFixture {
            id: "2".to_string(),
            name: "UI/UX Design".to_string(),
            description: String::new(),
            price: "5000 RUB".to_string(),
            category: Some("design".to_string()),
        };

        let product = Product::try_from(fixture)?;

        assert_eq!(product.price, Money::from_minor(500_000, RUB));
        assert!(product.is_in_category("design"));

        Ok(())
    }
}
