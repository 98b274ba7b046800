//! Prices

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::cart::lines::CartLine;

/// Errors that can occur while calculating total price.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// Multiplying a price by its quantity left the representable range.
    #[error("line total overflowed for product {0}")]
    Overflow(String),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates price × quantity for a single cart line.
///
/// # Errors
///
/// Returns [`TotalPriceError::Overflow`] when the product of price and
/// quantity does not fit in minor units.
pub fn line_total<'a>(line: &CartLine<'a>) -> Result<Money<'a, Currency>, TotalPriceError> {
    let price = line.product().price;

    price
        .to_minor_units()
        .checked_mul(i64::from(line.quantity()))
        .map(|minor| Money::from_minor(minor, price.currency()))
        .ok_or_else(|| TotalPriceError::Overflow(line.product().id.clone()))
}

/// Calculates the total price of a list of cart lines.
///
/// An empty list totals zero in the given currency.
///
/// # Errors
///
/// - [`TotalPriceError::Overflow`]: a line total did not fit in minor units.
/// - [`TotalPriceError::Money`]: wrapped money arithmetic or currency mismatch error.
pub fn total_price<'a>(
    lines: &[CartLine<'a>],
    currency: &'a Currency,
) -> Result<Money<'a, Currency>, TotalPriceError> {
    let total = lines
        .iter()
        .try_fold(Money::from_minor(0, currency), |acc, line| {
            Ok::<_, TotalPriceError>(acc.add(line_total(line)?)?)
        })?;

    Ok(total)
}

/// Expresses an amount in major units (e.g. roubles rather than kopecks).
pub fn major_units(money: &Money<'_, Currency>) -> Decimal {
    *money.amount()
}

/// Converts a major-unit amount into minor units of the given currency.
///
/// Fractions of a minor unit are rounded. Returns `None` for negative amounts
/// and for amounts that do not fit in a `u64` of minor units.
pub fn minor_units(amount: Decimal, currency: &Currency) -> Option<u64> {
    if amount < Decimal::ZERO {
        return None;
    }

    let scale = 10_u64.checked_pow(currency.exponent)?;

    amount
        .checked_mul(Decimal::from(scale))?
        .round_dp(0)
        .to_u64()
}
