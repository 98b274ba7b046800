//! Orders Repository

use jiff::Timestamp;
use sqlx::{FromRow, Row, Sqlite, Transaction, query, query_as, sqlite::SqliteRow};
use uuid::Uuid;

use crate::{
    columns::{decode_json_blob, encode_json_blob, from_millis, to_millis, to_u64},
    domain::{
        orders::{
            data::{NewOrder, OrderUpdate},
            records::{OrderRecord, OrderUuid},
        },
        products::records::ProductUuid,
    },
};

const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const UPDATE_ORDER_SQL: &str = include_str!("sql/update_order.sql");
const DELETE_ORDER_SQL: &str = include_str!("sql/delete_order.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteOrdersRepository;

impl SqliteOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        created_from: Option<Timestamp>,
        created_before: Option<Timestamp>,
        payment_method: Option<&str>,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Sqlite, OrderRecord>(LIST_ORDERS_SQL)
            .bind(created_from.map(to_millis))
            .bind(created_before.map(to_millis))
            .bind(payment_method)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        order: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Sqlite, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        order: &NewOrder,
        amount: i64,
        at: Timestamp,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Sqlite, OrderRecord>(CREATE_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(order.product_uuid.map(ProductUuid::into_uuid))
            .bind(amount)
            .bind(order.payment_method.as_deref())
            .bind(encode_json_blob(&order.payment_details))
            .bind(order.customer_contact.as_str())
            .bind(order.admin_contact.as_str())
            .bind(to_millis(at))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_order(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        order: OrderUuid,
        update: &OrderUpdate,
        amount: Option<i64>,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Sqlite, OrderRecord>(UPDATE_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(update.product_uuid.map(ProductUuid::into_uuid))
            .bind(amount)
            .bind(update.payment_method.as_deref())
            .bind(update.payment_details.as_ref().map(encode_json_blob))
            .bind(update.customer_contact.as_deref())
            .bind(update.admin_contact.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_order(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        order: OrderUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ORDER_SQL)
            .bind(order.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, SqliteRow> for OrderRecord {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        let product_uuid: Option<Uuid> = row.try_get("product_uuid")?;

        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            product_uuid: product_uuid.map(ProductUuid::from_uuid),
            amount: to_u64("amount", row.try_get("amount")?)?,
            payment_method: row.try_get("payment_method")?,
            payment_details: decode_json_blob(row.try_get("payment_details")?),
            customer_contact: row.try_get("customer_contact")?,
            admin_contact: row.try_get("admin_contact")?,
            created_at: from_millis("created_at", row.try_get("created_at")?)?,
        })
    }
}
