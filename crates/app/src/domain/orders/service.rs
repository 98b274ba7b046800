//! Orders service.

use async_trait::async_trait;
use kiosk::{checkout::CheckoutPayload, pricing::minor_units};
use mockall::automock;
use rusty_money::iso::RUB;
use tracing::info;

use crate::{
    columns::now,
    database::Db,
    domain::orders::{
        data::{NewOrder, OrderFilter, OrderUpdate},
        errors::OrdersServiceError,
        records::{OrderRecord, OrderUuid},
        repository::SqliteOrdersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct SqliteOrdersService {
    db: Db,
    repository: SqliteOrdersRepository,
}

impl SqliteOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: SqliteOrdersRepository::new(),
        }
    }
}

/// Turns a checkout message into an order row.
///
/// The total must equal the sum of price × quantity over the lines, both
/// counted in kopecks. The whole message is kept as the payment details so
/// the line items stay visible to the shop owner.
fn order_from_checkout(payload: &CheckoutPayload) -> Result<NewOrder, OrdersServiceError> {
    if !payload.is_checkout() {
        return Err(OrdersServiceError::InvalidData);
    }

    if payload.products.is_empty() {
        return Err(OrdersServiceError::MissingRequiredData);
    }

    let amount = minor_units(payload.total, RUB).ok_or(OrdersServiceError::InvalidData)?;

    let lines_amount = payload
        .products
        .iter()
        .try_fold(0_u64, |sum, line| {
            minor_units(line.price, RUB)?
                .checked_mul(u64::from(line.quantity))?
                .checked_add(sum)
        })
        .ok_or(OrdersServiceError::InvalidData)?;

    if lines_amount != amount {
        return Err(OrdersServiceError::InvalidData);
    }

    let payment_method = Some(payload.payment_method.trim())
        .filter(|method| !method.is_empty())
        .map(str::to_string);

    Ok(NewOrder {
        payment_method,
        payment_details: serde_json::to_value(payload)?,
        ..NewOrder::new(amount)
    })
}

#[async_trait]
impl OrdersService for SqliteOrdersService {
    async fn list_orders(&self, filter: OrderFilter) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let created_from = filter.created_from()?;
        let created_before = filter.created_before()?;

        let mut tx = self.db.begin().await?;

        let orders = self
            .repository
            .list_orders(
                &mut tx,
                created_from,
                created_before,
                filter.payment_method.as_deref(),
            )
            .await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self.repository.get_order(&mut tx, order).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn create_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError> {
        let amount = i64::try_from(order.amount)?;

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_order(&mut tx, &order, amount, now())
            .await?;

        tx.commit().await?;

        info!(order = %created.uuid, amount = created.amount, "order recorded");

        Ok(created)
    }

    async fn record_checkout(&self, payload: CheckoutPayload) -> Result<OrderRecord, OrdersServiceError> {
        let order = order_from_checkout(&payload)?;

        self.create_order(order).await
    }

    async fn update_order(
        &self,
        order: OrderUuid,
        update: OrderUpdate,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let amount = update.amount.map(i64::try_from).transpose()?;

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_order(&mut tx, order, &update, amount)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_order(&self, order: OrderUuid) -> Result<(), OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_order(&mut tx, order).await?;

        if rows_affected == 0 {
            return Err(OrdersServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Orders matching the filter, newest first.
    async fn list_orders(&self, filter: OrderFilter) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Retrieve a single order.
    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError>;

    /// Records an order.
    async fn create_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError>;

    /// Records the order carried by a mini-app checkout message.
    async fn record_checkout(&self, payload: CheckoutPayload) -> Result<OrderRecord, OrdersServiceError>;

    /// Updates the given fields of an order.
    async fn update_order(
        &self,
        order: OrderUuid,
        update: OrderUpdate,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Deletes an order.
    async fn delete_order(&self, order: OrderUuid) -> Result<(), OrdersServiceError>;
}
