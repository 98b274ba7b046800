//! Report Models

use std::collections::BTreeMap;

use serde_json::Value;

use crate::domain::orders::records::OrderRecord;

/// Stats key for orders without a payment method.
pub const UNKNOWN_METHOD: &str = "unknown";

/// CSV header row.
pub const CSV_HEADER: [&str; 6] = ["date", "time", "amount", "method", "details", "customer"];

/// Totals for one payment method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MethodStats {
    /// Number of orders
    pub count: u64,

    /// Sum of order amounts in minor units
    pub sum: u64,
}

/// Orders in a period, grouped by payment method.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub rows: Vec<OrderRecord>,
    pub stats: BTreeMap<String, MethodStats>,
}

impl Report {
    #[must_use]
    pub fn from_orders(rows: Vec<OrderRecord>) -> Self {
        let mut stats: BTreeMap<String, MethodStats> = BTreeMap::new();

        for order in &rows {
            let method = order
                .payment_method
                .as_deref()
                .filter(|method| !method.is_empty())
                .unwrap_or(UNKNOWN_METHOD);

            let entry = stats.entry(method.to_string()).or_default();

            entry.count += 1;
            entry.sum = entry.sum.saturating_add(order.amount);
        }

        Self { rows, stats }
    }
}

/// One CSV row for an order.
pub(crate) fn csv_row(order: &OrderRecord) -> [String; 6] {
    let details = match &order.payment_details {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };

    [
        order.created_at.strftime("%Y-%m-%d").to_string(),
        order.created_at.strftime("%H:%M:%S").to_string(),
        order.amount.to_string(),
        order.payment_method.clone().unwrap_or_default(),
        details,
        order.customer_contact.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use serde_json::json;
    use testresult::TestResult;

    use crate::domain::orders::records::OrderUuid;

    use super::*;

    fn order(amount: u64, method: Option<&str>) -> OrderRecord {
        OrderRecord {
            uuid: OrderUuid::new(),
            product_uuid: None,
            amount,
            payment_method: method.map(str::to_string),
            payment_details: json!({}),
            customer_contact: String::new(),
            admin_contact: String::new(),
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn stats_group_by_method() {
        let report = Report::from_orders(vec![
            order(100, Some("sber")),
            order(250, Some("sber")),
            order(40, None),
            order(60, Some("")),
        ]);

        assert_eq!(report.rows.len(), 4);
        assert_eq!(
            report.stats.get("sber"),
            Some(&MethodStats { count: 2, sum: 350 })
        );
        assert_eq!(
            report.stats.get(UNKNOWN_METHOD),
            Some(&MethodStats { count: 2, sum: 100 })
        );
    }

    #[test]
    fn csv_row_formats_timestamp_and_details() -> TestResult {
        let mut order = order(1_500, Some("nspk"));
        order.created_at = "2025-03-01T14:05:09Z".parse()?;
        order.payment_details = json!("paid by QR");
        order.customer_contact = "@customer".to_string();

        assert_eq!(
            csv_row(&order),
            [
                "2025-03-01".to_string(),
                "14:05:09".to_string(),
                "1500".to_string(),
                "nspk".to_string(),
                "paid by QR".to_string(),
                "@customer".to_string(),
            ]
        );

        Ok(())
    }
}
