//! Checkout
//!
//! Turns a cart and the chosen payment method into the single message handed
//! to the host application.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    cart::Cart,
    payments::PaymentMethod,
    pricing::{TotalPriceError, major_units},
};

pub mod bridge;

/// Value of the `action` field of every checkout message.
pub const CHECKOUT_ACTION: &str = "create_order_from_mini_app";

/// Errors raised while building a checkout message.
#[derive(Debug, Error, PartialEq)]
pub enum CheckoutError {
    /// There is nothing to check out.
    #[error("cart is empty")]
    EmptyCart,

    /// The cart total could not be computed.
    #[error(transparent)]
    Total(#[from] TotalPriceError),
}

/// A cart line as it appears in the checkout message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutLine {
    /// Product identifier
    pub id: String,

    /// Product name
    pub name: String,

    /// Unit price in major currency units
    pub price: Decimal,

    /// Number of units
    pub quantity: u32,
}

/// The checkout message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutPayload {
    /// Always [`CHECKOUT_ACTION`]
    pub action: String,

    /// Purchased lines
    pub products: Vec<CheckoutLine>,

    /// Sum of price × quantity in major currency units
    pub total: Decimal,

    /// Identifier of the chosen payment method
    pub payment_method: String,

    /// Display name of the chosen payment method
    pub payment_method_name: String,
}

impl CheckoutPayload {
    /// Build the message for the cart as it is right now.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyCart`]: the cart has no lines.
    /// - [`CheckoutError::Total`]: the cart total could not be computed.
    pub fn from_cart(cart: &Cart<'_>, method: &PaymentMethod) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let total = cart.total()?;

        let products = cart
            .iter()
            .map(|line| CheckoutLine {
                id: line.product().id.clone(),
                name: line.product().name.clone(),
                price: major_units(&line.product().price),
                quantity: line.quantity(),
            })
            .collect();

        Ok(Self {
            action: CHECKOUT_ACTION.to_string(),
            products,
            total: major_units(&total),
            payment_method: method.id.clone(),
            payment_method_name: method.name.clone(),
        })
    }

    /// Whether the message carries the expected `action`.
    pub fn is_checkout(&self) -> bool {
        self.action == CHECKOUT_ACTION
    }

    /// Number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.products
            .iter()
            .map(|line| u64::from(line.quantity))
            .sum()
    }
}
