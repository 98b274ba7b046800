//! Kiosk prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, lines::CartLine},
    catalog::{Catalog, CatalogError},
    checkout::{
        CHECKOUT_ACTION, CheckoutError, CheckoutLine, CheckoutPayload,
        bridge::{BridgeError, HostBridge, JsonBridge},
    },
    fixtures::FixtureError,
    payments::{PaymentKind, PaymentMethod},
    pricing::{TotalPriceError, line_total, total_price},
    products::{Product, ProductKey},
    session::{CategoryFilter, Notifier, SessionError, Storefront},
};
