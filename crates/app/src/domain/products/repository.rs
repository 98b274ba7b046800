//! Products Repository

use jiff::Timestamp;
use sqlx::{FromRow, Row, Sqlite, Transaction, query, query_as, sqlite::SqliteRow};
use uuid::Uuid;

use crate::{
    columns::{from_millis, to_millis, to_u64},
    domain::{
        categories::records::CategoryUuid,
        products::{
            data::{NewProduct, ProductUpdate},
            records::{ProductRecord, ProductUuid},
        },
    },
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteProductsRepository;

impl SqliteProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Sqlite, ProductRecord>(LIST_PRODUCTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        product: ProductUuid,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Sqlite, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        product: &NewProduct,
        price: i64,
        at: Timestamp,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Sqlite, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(product.title.trim())
            .bind(product.description.as_str())
            .bind(price)
            .bind(product.sku.as_deref())
            .bind(product.image_url.as_deref())
            .bind(product.category_uuid.map(CategoryUuid::into_uuid))
            .bind(to_millis(at))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        product: ProductUuid,
        update: &ProductUpdate,
        price: Option<i64>,
        at: Timestamp,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Sqlite, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(update.title.as_deref().map(str::trim))
            .bind(update.description.as_deref())
            .bind(price)
            .bind(update.sku.as_deref())
            .bind(update.image_url.as_deref())
            .bind(update.category_uuid.map(CategoryUuid::into_uuid))
            .bind(to_millis(at))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        product: ProductUuid,
        at: Timestamp,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(to_millis(at))
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, SqliteRow> for ProductRecord {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        let deleted_at: Option<i64> = row.try_get("deleted_at")?;
        let category_uuid: Option<Uuid> = row.try_get("category_uuid")?;

        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            price: to_u64("price", row.try_get("price")?)?,
            sku: row.try_get("sku")?,
            image_url: row.try_get("image_url")?,
            category_uuid: category_uuid.map(CategoryUuid::from_uuid),
            created_at: from_millis("created_at", row.try_get("created_at")?)?,
            updated_at: from_millis("updated_at", row.try_get("updated_at")?)?,
            deleted_at: deleted_at
                .map(|millis| from_millis("deleted_at", millis))
                .transpose()?,
        })
    }
}
