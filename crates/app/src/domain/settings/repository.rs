//! Shop Settings Repository

use jiff::Timestamp;
use sqlx::{FromRow, Row, Sqlite, Transaction, query_as, sqlite::SqliteRow};

use crate::{
    columns::{from_millis, to_millis},
    domain::settings::models::ShopSettings,
};

const GET_SETTINGS_SQL: &str = include_str!("sql/get_settings.sql");
const SAVE_SETTINGS_SQL: &str = include_str!("sql/save_settings.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteSettingsRepository;

impl SqliteSettingsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_settings(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<Option<ShopSettings>, sqlx::Error> {
        query_as::<Sqlite, ShopSettings>(GET_SETTINGS_SQL)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn save_settings(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        settings: &ShopSettings,
        at: Timestamp,
    ) -> Result<ShopSettings, sqlx::Error> {
        query_as::<Sqlite, ShopSettings>(SAVE_SETTINGS_SQL)
            .bind(settings.shop_name.trim())
            .bind(settings.holder_name.trim())
            .bind(settings.inn.as_str())
            .bind(settings.registration_address.as_str())
            .bind(settings.organization_address.as_str())
            .bind(settings.email.as_str())
            .bind(settings.phone.as_str())
            .bind(to_millis(at))
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, SqliteRow> for ShopSettings {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            shop_name: row.try_get("shop_name")?,
            holder_name: row.try_get("holder_name")?,
            inn: row.try_get("inn")?,
            registration_address: row.try_get("registration_address")?,
            organization_address: row.try_get("organization_address")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            updated_at: Some(from_millis("updated_at", row.try_get("updated_at")?)?),
        })
    }
}
