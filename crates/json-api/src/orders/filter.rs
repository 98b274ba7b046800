//! Order filter query parsing.

use jiff::civil::Date;
use salvo::prelude::StatusError;

use kiosk_app::domain::orders::data::OrderFilter;

use crate::extensions::*;

/// Builds a filter from the `from`, `to` and `method` query parameters.
///
/// Dates are `YYYY-MM-DD`; a blank method means any method.
pub(crate) fn order_filter(
    from: Option<String>,
    to: Option<String>,
    method: Option<String>,
) -> Result<OrderFilter, StatusError> {
    Ok(OrderFilter {
        from: parse_date(from).or_400("could not parse \"from\" query parameter")?,
        to: parse_date(to).or_400("could not parse \"to\" query parameter")?,
        payment_method: method
            .map(|method| method.trim().to_string())
            .filter(|method| !method.is_empty()),
    })
}

fn parse_date(value: Option<String>) -> Result<Option<Date>, jiff::Error> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::parse::<Date>)
        .transpose()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use salvo::http::StatusCode;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_dates_and_method() -> TestResult {
        let filter = order_filter(
            Some("2025-03-01".to_string()),
            Some("2025-03-31".to_string()),
            Some(" sber ".to_string()),
        )?;

        assert_eq!(filter.from, Some(date(2025, 3, 1)));
        assert_eq!(filter.to, Some(date(2025, 3, 31)));
        assert_eq!(filter.payment_method.as_deref(), Some("sber"));

        Ok(())
    }

    #[test]
    fn blank_values_mean_no_filter() -> TestResult {
        let filter = order_filter(Some(String::new()), None, Some("  ".to_string()))?;

        assert_eq!(filter, OrderFilter::default());

        Ok(())
    }

    #[test]
    fn malformed_date_is_a_bad_request() {
        let error = order_filter(Some("01.03.2025".to_string()), None, None).err();

        assert_eq!(error.map(|e| e.code), Some(StatusCode::BAD_REQUEST));
    }
}
