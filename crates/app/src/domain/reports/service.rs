//! Reports service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        orders::{OrdersServiceError, data::OrderFilter, repository::SqliteOrdersRepository},
        reports::{
            errors::ReportsServiceError,
            models::{CSV_HEADER, Report, csv_row},
        },
    },
};

#[derive(Debug, Clone)]
pub struct SqliteReportsService {
    db: Db,
    orders: SqliteOrdersRepository,
}

impl SqliteReportsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            orders: SqliteOrdersRepository::new(),
        }
    }
}

#[async_trait]
impl ReportsService for SqliteReportsService {
    async fn report(&self, filter: OrderFilter) -> Result<Report, ReportsServiceError> {
        let created_from = filter.created_from().map_err(OrdersServiceError::from)?;
        let created_before = filter.created_before().map_err(OrdersServiceError::from)?;

        let mut tx = self.db.begin().await?;

        let rows = self
            .orders
            .list_orders(
                &mut tx,
                created_from,
                created_before,
                filter.payment_method.as_deref(),
            )
            .await?;

        tx.commit().await?;

        Ok(Report::from_orders(rows))
    }

    async fn report_csv(&self, filter: OrderFilter) -> Result<Vec<u8>, ReportsServiceError> {
        let report = self.report(filter).await?;

        let mut writer = csv::Writer::from_writer(Vec::new());

        writer.write_record(CSV_HEADER)?;

        for order in &report.rows {
            writer.write_record(csv_row(order))?;
        }

        writer.into_inner().map_err(|error| error.into_error().into())
    }
}

#[automock]
#[async_trait]
pub trait ReportsService: Send + Sync {
    /// Orders matching the filter together with per-method totals.
    async fn report(&self, filter: OrderFilter) -> Result<Report, ReportsServiceError>;

    /// The report's rows as a CSV document with a header line.
    async fn report_csv(&self, filter: OrderFilter) -> Result<Vec<u8>, ReportsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::orders::{OrdersService, data::NewOrder},
        test::TestContext,
    };

    use super::*;

    #[tokio::test]
    async fn report_totals_each_method() -> TestResult {
        let ctx = TestContext::new().await?;

        for (amount, method) in [(100, Some("sber")), (300, Some("sber")), (50, None)] {
            ctx.orders
                .create_order(NewOrder {
                    payment_method: method.map(str::to_string),
                    ..NewOrder::new(amount)
                })
                .await?;
        }

        let report = ctx.reports.report(OrderFilter::default()).await?;

        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.stats.get("sber").map(|stats| stats.sum), Some(400));
        assert_eq!(report.stats.get("unknown").map(|stats| stats.count), Some(1));

        Ok(())
    }

    #[tokio::test]
    async fn csv_has_a_header_and_one_line_per_order() -> TestResult {
        let ctx = TestContext::new().await?;

        ctx.orders
            .create_order(NewOrder {
                payment_method: Some("ozon".to_string()),
                customer_contact: "@buyer".to_string(),
                ..NewOrder::new(2_000)
            })
            .await?;

        let csv = String::from_utf8(ctx.reports.report_csv(OrderFilter::default()).await?)?;
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines.first(), Some(&"date,time,amount,method,details,customer"));
        assert!(lines.get(1).is_some_and(|line| line.ends_with(",2000,ozon,{},@buyer")));

        Ok(())
    }
}
