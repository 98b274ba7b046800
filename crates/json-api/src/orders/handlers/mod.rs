//! Order Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use kiosk_app::domain::orders::records::OrderRecord;

pub(crate) mod checkout;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    pub uuid: Uuid,
    pub product_uuid: Option<Uuid>,

    /// Amount in kopecks
    pub amount: u64,

    pub payment_method: Option<String>,

    #[salvo(schema(value_type = Object))]
    pub payment_details: Value,

    pub customer_contact: String,
    pub admin_contact: String,
    pub created_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        OrderResponse {
            uuid: order.uuid.into(),
            product_uuid: order.product_uuid.map(Into::into),
            amount: order.amount,
            payment_method: order.payment_method,
            payment_details: order.payment_details,
            customer_contact: order.customer_contact,
            admin_contact: order.admin_contact,
            created_at: order.created_at.to_string(),
        }
    }
}
