//! Payment Methods Data

use kiosk::payments::{PaymentKind, PaymentMethod};
use serde_json::{Value, json};

use crate::domain::payments::records::PaymentMethodUuid;

/// New Payment Method Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewPaymentMethod {
    pub uuid: PaymentMethodUuid,
    pub name: String,
    pub kind: PaymentKind,
    pub details: Value,
    pub enabled: bool,
}

impl NewPaymentMethod {
    /// An enabled method with empty details.
    pub fn new(name: impl Into<String>, kind: PaymentKind) -> Self {
        Self {
            uuid: PaymentMethodUuid::new(),
            name: name.into(),
            kind,
            details: Value::Object(serde_json::Map::new()),
            enabled: true,
        }
    }
}

impl From<&PaymentMethod> for NewPaymentMethod {
    fn from(method: &PaymentMethod) -> Self {
        Self {
            details: json!({
                "code": method.id,
                "description": method.kind.description(),
            }),
            ..Self::new(method.name.clone(), method.kind)
        }
    }
}

/// Payment Method Update Data
///
/// Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentMethodUpdate {
    pub name: Option<String>,
    pub kind: Option<PaymentKind>,
    pub details: Option<Value>,
    pub enabled: Option<bool>,
}
