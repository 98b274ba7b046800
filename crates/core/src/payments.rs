//! Payment Methods

use serde::{Deserialize, Serialize};

/// How a payment method is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    /// Transfer to a bank card
    Card,

    /// QR code payment through the national payment system
    Qr,

    /// Anything else, described by the shop owner
    #[default]
    Other,
}

impl PaymentKind {
    /// Short description shown beneath the method name.
    pub fn description(self) -> &'static str {
        match self {
            PaymentKind::Card => "Bank card",
            PaymentKind::Qr => "QR code payment",
            PaymentKind::Other => "Other payment method",
        }
    }

    /// Stable string form, as stored and sent over the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentKind::Card => "card",
            PaymentKind::Qr => "qr",
            PaymentKind::Other => "other",
        }
    }

    /// Parse the stable string form; unknown values become [`PaymentKind::Other`].
    pub fn from_str_lossy(value: &str) -> Self {
        match value {
            "card" => PaymentKind::Card,
            "qr" => PaymentKind::Qr,
            _ => PaymentKind::Other,
        }
    }
}

/// A payment method the customer can pick at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// Identifier sent to the host as `payment_method`
    pub id: String,

    /// Display name sent to the host as `payment_method_name`
    pub name: String,

    /// Settlement kind
    #[serde(rename = "type")]
    pub kind: PaymentKind,
}

impl PaymentMethod {
    /// Creates a payment method.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: PaymentKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }

    /// The methods offered when the shop owner has configured none.
    pub fn defaults() -> Vec<PaymentMethod> {
        vec![
            PaymentMethod::new("sber", "Sberbank", PaymentKind::Card),
            PaymentMethod::new("tinkoff", "Tinkoff", PaymentKind::Card),
            PaymentMethod::new("alpha", "Alfa-Bank", PaymentKind::Card),
            PaymentMethod::new("nspk", "QR NSPK", PaymentKind::Qr),
            PaymentMethod::new("mts", "MTS Bank", PaymentKind::Card),
            PaymentMethod::new("ozon", "Ozon Bank", PaymentKind::Card),
        ]
    }
}
