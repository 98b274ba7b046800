//! Kiosk
//!
//! Kiosk is the in-page shopping cart of the storefront mini-app: a catalog of
//! priced products, a cart that accumulates lines and totals, and the checkout
//! hand-off that turns the cart into a single message for the host chat
//! application.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod fixtures;
pub mod payments;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod session;
