//! Shop settings service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    columns::now,
    database::Db,
    domain::settings::{
        errors::SettingsServiceError, models::ShopSettings, repository::SqliteSettingsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct SqliteSettingsService {
    db: Db,
    repository: SqliteSettingsRepository,
}

impl SqliteSettingsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: SqliteSettingsRepository::new(),
        }
    }
}

#[async_trait]
impl SettingsService for SqliteSettingsService {
    async fn get_settings(&self) -> Result<ShopSettings, SettingsServiceError> {
        let mut tx = self.db.begin().await?;

        let settings = self.repository.get_settings(&mut tx).await?;

        tx.commit().await?;

        Ok(settings.unwrap_or_default())
    }

    async fn save_settings(&self, settings: ShopSettings) -> Result<ShopSettings, SettingsServiceError> {
        if settings.shop_name.trim().is_empty() || settings.holder_name.trim().is_empty() {
            return Err(SettingsServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin().await?;

        let saved = self.repository.save_settings(&mut tx, &settings, now()).await?;

        tx.commit().await?;

        Ok(saved)
    }
}

#[automock]
#[async_trait]
pub trait SettingsService: Send + Sync {
    /// The saved settings, or the defaults when none were saved.
    async fn get_settings(&self) -> Result<ShopSettings, SettingsServiceError>;

    /// Replaces the settings. Shop and holder names are required.
    async fn save_settings(&self, settings: ShopSettings) -> Result<ShopSettings, SettingsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn defaults_until_saved() -> TestResult {
        let ctx = TestContext::new().await?;

        let settings = ctx.settings.get_settings().await?;

        assert_eq!(settings, ShopSettings::default());
        assert_eq!(settings.shop_name, "Smart Service");
        assert_eq!(settings.updated_at, None);

        Ok(())
    }

    #[tokio::test]
    async fn save_replaces_the_single_row() -> TestResult {
        let ctx = TestContext::new().await?;

        ctx.settings
            .save_settings(ShopSettings {
                shop_name: "First".to_string(),
                ..ShopSettings::default()
            })
            .await?;

        let saved = ctx
            .settings
            .save_settings(ShopSettings {
                shop_name: "Web Studio".to_string(),
                holder_name: "I. Ivanov".to_string(),
                ..ShopSettings::default()
            })
            .await?;

        let fetched = ctx.settings.get_settings().await?;

        assert_eq!(fetched, saved);
        assert_eq!(fetched.shop_name, "Web Studio");
        assert!(fetched.updated_at.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn holder_name_is_required() -> TestResult {
        let ctx = TestContext::new().await?;

        let result = ctx
            .settings
            .save_settings(ShopSettings {
                holder_name: String::new(),
                ..ShopSettings::default()
            })
            .await;

        assert!(
            matches!(result, Err(SettingsServiceError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );

        Ok(())
    }
}
