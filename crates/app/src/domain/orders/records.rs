//! Order Records

use jiff::Timestamp;
use serde_json::Value;

use crate::{domain::products::records::ProductUuid, uuids::TypedUuid};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Record
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub product_uuid: Option<ProductUuid>,

    /// Amount in minor units
    pub amount: u64,

    /// Free-form payment method identifier, as chosen by the customer
    pub payment_method: Option<String>,

    /// Parsed payment details; legacy non-JSON values come back as a string
    pub payment_details: Value,

    pub customer_contact: String,
    pub admin_contact: String,
    pub created_at: Timestamp,
}
