//! Payment Method Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use kiosk_app::domain::payments::records::PaymentMethodRecord;

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;
pub(crate) mod update;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PaymentMethodResponse {
    pub uuid: Uuid,
    pub name: String,

    /// `card`, `qr` or `other`
    pub kind: String,

    /// Card number, QR link or instructions
    #[salvo(schema(value_type = Object))]
    pub details: Value,

    pub enabled: bool,
    pub created_at: String,
}

impl From<PaymentMethodRecord> for PaymentMethodResponse {
    fn from(method: PaymentMethodRecord) -> Self {
        PaymentMethodResponse {
            uuid: method.uuid.into(),
            name: method.name,
            kind: method.kind.as_str().to_string(),
            details: method.details,
            enabled: method.enabled,
            created_at: method.created_at.to_string(),
        }
    }
}
