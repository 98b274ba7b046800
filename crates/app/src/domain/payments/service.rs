//! Payment methods service.

use async_trait::async_trait;
use kiosk::payments::PaymentMethod;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::payments::{
        data::{NewPaymentMethod, PaymentMethodUpdate},
        errors::PaymentsServiceError,
        records::{PaymentMethodRecord, PaymentMethodUuid},
        repository::SqlitePaymentsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct SqlitePaymentsService {
    db: Db,
    repository: SqlitePaymentsRepository,
}

impl SqlitePaymentsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: SqlitePaymentsRepository::new(),
        }
    }
}

#[async_trait]
impl PaymentsService for SqlitePaymentsService {
    async fn list_payment_methods(&self) -> Result<Vec<PaymentMethodRecord>, PaymentsServiceError> {
        let mut tx = self.db.begin().await?;

        let methods = self.repository.list_payment_methods(&mut tx).await?;

        tx.commit().await?;

        Ok(methods)
    }

    async fn get_payment_method(
        &self,
        method: PaymentMethodUuid,
    ) -> Result<PaymentMethodRecord, PaymentsServiceError> {
        let mut tx = self.db.begin().await?;

        let method = self.repository.get_payment_method(&mut tx, method).await?;

        tx.commit().await?;

        Ok(method)
    }

    async fn create_payment_method(
        &self,
        method: NewPaymentMethod,
    ) -> Result<PaymentMethodRecord, PaymentsServiceError> {
        if method.name.trim().is_empty() {
            return Err(PaymentsServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_payment_method(&mut tx, &method).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_payment_method(
        &self,
        method: PaymentMethodUuid,
        update: PaymentMethodUpdate,
    ) -> Result<PaymentMethodRecord, PaymentsServiceError> {
        if update.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(PaymentsServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_payment_method(&mut tx, method, &update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_payment_method(&self, method: PaymentMethodUuid) -> Result<(), PaymentsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_payment_method(&mut tx, method).await?;

        if rows_affected == 0 {
            return Err(PaymentsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn seed_default_methods(&self) -> Result<usize, PaymentsServiceError> {
        let mut tx = self.db.begin().await?;

        if self.repository.count_payment_methods(&mut tx).await? > 0 {
            return Ok(0);
        }

        let defaults = PaymentMethod::defaults();

        for method in &defaults {
            self.repository
                .create_payment_method(&mut tx, &NewPaymentMethod::from(method))
                .await?;
        }

        tx.commit().await?;

        info!(count = defaults.len(), "seeded default payment methods");

        Ok(defaults.len())
    }
}

#[automock]
#[async_trait]
pub trait PaymentsService: Send + Sync {
    /// Retrieves all payment methods in creation order.
    async fn list_payment_methods(&self) -> Result<Vec<PaymentMethodRecord>, PaymentsServiceError>;

    /// Retrieve a single payment method.
    async fn get_payment_method(
        &self,
        method: PaymentMethodUuid,
    ) -> Result<PaymentMethodRecord, PaymentsServiceError>;

    /// Creates a payment method.
    async fn create_payment_method(
        &self,
        method: NewPaymentMethod,
    ) -> Result<PaymentMethodRecord, PaymentsServiceError>;

    /// Updates the given fields of a payment method.
    async fn update_payment_method(
        &self,
        method: PaymentMethodUuid,
        update: PaymentMethodUpdate,
    ) -> Result<PaymentMethodRecord, PaymentsServiceError>;

    /// Deletes a payment method.
    async fn delete_payment_method(&self, method: PaymentMethodUuid) -> Result<(), PaymentsServiceError>;

    /// Inserts the built-in payment methods when none exist.
    ///
    /// Returns how many were inserted.
    async fn seed_default_methods(&self) -> Result<usize, PaymentsServiceError>;
}
