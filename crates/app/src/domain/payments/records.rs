//! Payment Method Records

use jiff::Timestamp;
use kiosk::payments::PaymentKind;
use serde_json::Value;

use crate::uuids::TypedUuid;

/// Payment Method UUID
pub type PaymentMethodUuid = TypedUuid<PaymentMethodRecord>;

/// Payment Method Record
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentMethodRecord {
    pub uuid: PaymentMethodUuid,
    pub name: String,
    pub kind: PaymentKind,

    /// Free-form details (card number, QR link, instructions); parsed on read
    pub details: Value,

    pub enabled: bool,
    pub created_at: Timestamp,
}
