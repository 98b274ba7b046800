//! Payment Methods Repository

use kiosk::payments::PaymentKind;
use sqlx::{FromRow, Row, Sqlite, Transaction, query, query_as, query_scalar, sqlite::SqliteRow};

use crate::{
    columns::{decode_json_blob, encode_json_blob, from_millis, now, to_millis},
    domain::payments::{
        data::{NewPaymentMethod, PaymentMethodUpdate},
        records::{PaymentMethodRecord, PaymentMethodUuid},
    },
};

const LIST_PAYMENT_METHODS_SQL: &str = include_str!("sql/list_payment_methods.sql");
const GET_PAYMENT_METHOD_SQL: &str = include_str!("sql/get_payment_method.sql");
const COUNT_PAYMENT_METHODS_SQL: &str = include_str!("sql/count_payment_methods.sql");
const CREATE_PAYMENT_METHOD_SQL: &str = include_str!("sql/create_payment_method.sql");
const UPDATE_PAYMENT_METHOD_SQL: &str = include_str!("sql/update_payment_method.sql");
const DELETE_PAYMENT_METHOD_SQL: &str = include_str!("sql/delete_payment_method.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct SqlitePaymentsRepository;

impl SqlitePaymentsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_payment_methods(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<Vec<PaymentMethodRecord>, sqlx::Error> {
        query_as::<Sqlite, PaymentMethodRecord>(LIST_PAYMENT_METHODS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_payment_method(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        method: PaymentMethodUuid,
    ) -> Result<PaymentMethodRecord, sqlx::Error> {
        query_as::<Sqlite, PaymentMethodRecord>(GET_PAYMENT_METHOD_SQL)
            .bind(method.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn count_payment_methods(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar(COUNT_PAYMENT_METHODS_SQL)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_payment_method(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        method: &NewPaymentMethod,
    ) -> Result<PaymentMethodRecord, sqlx::Error> {
        query_as::<Sqlite, PaymentMethodRecord>(CREATE_PAYMENT_METHOD_SQL)
            .bind(method.uuid.into_uuid())
            .bind(method.name.trim())
            .bind(method.kind.as_str())
            .bind(encode_json_blob(&method.details))
            .bind(method.enabled)
            .bind(to_millis(now()))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_payment_method(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        method: PaymentMethodUuid,
        update: &PaymentMethodUpdate,
    ) -> Result<PaymentMethodRecord, sqlx::Error> {
        query_as::<Sqlite, PaymentMethodRecord>(UPDATE_PAYMENT_METHOD_SQL)
            .bind(method.into_uuid())
            .bind(update.name.as_deref().map(str::trim))
            .bind(update.kind.map(PaymentKind::as_str))
            .bind(update.details.as_ref().map(encode_json_blob))
            .bind(update.enabled)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_payment_method(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        method: PaymentMethodUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PAYMENT_METHOD_SQL)
            .bind(method.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, SqliteRow> for PaymentMethodRecord {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        let kind: String = row.try_get("kind")?;

        Ok(Self {
            uuid: PaymentMethodUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            kind: PaymentKind::from_str_lossy(&kind),
            details: decode_json_blob(row.try_get("details")?),
            enabled: row.try_get("enabled")?,
            created_at: from_millis("created_at", row.try_get("created_at")?)?,
        })
    }
}
