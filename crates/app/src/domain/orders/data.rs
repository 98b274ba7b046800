//! Orders Data

use jiff::{Timestamp, civil::Date, tz::TimeZone};
use serde_json::Value;

use crate::domain::{orders::records::OrderUuid, products::records::ProductUuid};

/// New Order Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub product_uuid: Option<ProductUuid>,
    pub amount: u64,
    pub payment_method: Option<String>,
    pub payment_details: Value,
    pub customer_contact: String,
    pub admin_contact: String,
}

impl NewOrder {
    /// An order for the given amount with no other details.
    pub fn new(amount: u64) -> Self {
        Self {
            uuid: OrderUuid::new(),
            product_uuid: None,
            amount,
            payment_method: None,
            payment_details: Value::Object(serde_json::Map::new()),
            customer_contact: String::new(),
            admin_contact: String::new(),
        }
    }
}

/// Order Update Data
///
/// Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderUpdate {
    pub product_uuid: Option<ProductUuid>,
    pub amount: Option<u64>,
    pub payment_method: Option<String>,
    pub payment_details: Option<Value>,
    pub customer_contact: Option<String>,
    pub admin_contact: Option<String>,
}

/// Selects orders by day and payment method.
///
/// Days are UTC calendar days; both ends are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub from: Option<Date>,
    pub to: Option<Date>,
    pub payment_method: Option<String>,
}

impl OrderFilter {
    /// Lower bound: the first instant of `from`.
    pub(crate) fn created_from(&self) -> Result<Option<Timestamp>, jiff::Error> {
        self.from.map(start_of_day).transpose()
    }

    /// Exclusive upper bound: the first instant of the day after `to`.
    pub(crate) fn created_before(&self) -> Result<Option<Timestamp>, jiff::Error> {
        self.to
            .map(|to| to.tomorrow().and_then(start_of_day))
            .transpose()
    }
}

fn start_of_day(date: Date) -> Result<Timestamp, jiff::Error> {
    Ok(date.to_zoned(TimeZone::UTC)?.timestamp())
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn to_bound_covers_the_whole_day() -> TestResult {
        let filter = OrderFilter {
            from: Some(date(2025, 3, 1)),
            to: Some(date(2025, 3, 1)),
            payment_method: None,
        };

        let from = filter.created_from()?.ok_or("missing lower bound")?;
        let before = filter.created_before()?.ok_or("missing upper bound")?;

        assert_eq!(from.to_string(), "2025-03-01T00:00:00Z");
        assert_eq!(before.to_string(), "2025-03-02T00:00:00Z");

        Ok(())
    }

    #[test]
    fn empty_filter_has_no_bounds() -> TestResult {
        let filter = OrderFilter::default();

        assert_eq!(filter.created_from()?, None);
        assert_eq!(filter.created_before()?, None);

        Ok(())
    }
}
