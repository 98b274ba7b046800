//! Storefront Session
//!
//! Owns everything a single shopping page needs: the catalog, the cart, the
//! active category filter and the hand-off to the host on checkout.

use thiserror::Error;

use crate::{
    cart::{Cart, CartError, lines::CartLine},
    catalog::Catalog,
    checkout::{
        CheckoutError, CheckoutPayload,
        bridge::{BridgeError, HostBridge},
    },
    payments::PaymentMethod,
    products::Product,
};

/// Message shown when checkout is attempted with nothing in the cart.
pub const EMPTY_CART_MESSAGE: &str = "Cart is empty";

/// Host popups and toasts.
pub trait Notifier {
    /// Shows a short message to the customer.
    fn notify(&mut self, message: &str);
}

/// Which products the storefront shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every product
    #[default]
    All,

    /// Only products of one category
    Only(String),
}

impl CategoryFilter {
    /// Builds a filter from the value of a category tab, where `all` means no filter.
    pub fn from_tab(tab: &str) -> Self {
        if tab.is_empty() || tab == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(tab.to_string())
        }
    }

    /// Whether the product passes the filter.
    pub fn matches(&self, product: &Product<'_>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.is_in_category(category),
        }
    }
}

/// Errors raised by storefront actions.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The product id is not in the catalog.
    #[error("unknown product: {0}")]
    UnknownProduct(String),

    /// The payment method id is not offered.
    #[error("unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    /// The cart rejected the change.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// The checkout message could not be built.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// The host did not accept the checkout message.
    #[error(transparent)]
    Bridge(#[from] BridgeError),
}

/// A single shopping session.
#[derive(Debug)]
pub struct Storefront<'a, B, N> {
    catalog: Catalog<'a>,
    cart: Cart<'a>,
    payment_methods: Vec<PaymentMethod>,
    filter: CategoryFilter,
    bridge: B,
    notifier: N,
}

impl<'a, B: HostBridge, N: Notifier> Storefront<'a, B, N> {
    /// Opens a session with an empty cart priced in the catalog currency.
    pub fn new(
        catalog: Catalog<'a>,
        payment_methods: Vec<PaymentMethod>,
        bridge: B,
        notifier: N,
    ) -> Self {
        let cart = Cart::new(catalog.currency());

        Self {
            catalog,
            cart,
            payment_methods,
            filter: CategoryFilter::All,
            bridge,
            notifier,
        }
    }

    /// Adds one unit of a catalog product and tells the customer.
    ///
    /// Returns the new quantity of the product's line.
    ///
    /// # Errors
    ///
    /// - [`SessionError::UnknownProduct`]: the id is not in the catalog.
    /// - [`SessionError::Cart`]: the cart rejected the product.
    pub fn add_to_cart(&mut self, product_id: &str) -> Result<u32, SessionError> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| SessionError::UnknownProduct(product_id.to_string()))?;

        let quantity = self.cart.add(product)?.quantity();

        self.notifier
            .notify(&format!("\"{}\" added to cart", product.name));

        Ok(quantity)
    }

    /// Removes the cart line at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Cart`] if there is no line at that position.
    pub fn remove_from_cart(&mut self, index: usize) -> Result<CartLine<'a>, SessionError> {
        Ok(self.cart.remove(index)?)
    }

    /// Products passing the given filter, in display order.
    pub fn products_in(&self, filter: &CategoryFilter) -> Vec<&Product<'a>> {
        self.catalog
            .iter()
            .filter(|product| filter.matches(product))
            .collect()
    }

    /// Switches the category tab.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    /// Products under the active category tab.
    pub fn visible_products(&self) -> Vec<&Product<'a>> {
        self.products_in(&self.filter)
    }

    /// Starts checkout and returns the payment methods to pick from.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] and notifies the customer when
    /// the cart is empty. Nothing is sent to the host.
    pub fn begin_checkout(&mut self) -> Result<&[PaymentMethod], SessionError> {
        if self.cart.is_empty() {
            self.notifier.notify(EMPTY_CART_MESSAGE);

            return Err(CheckoutError::EmptyCart.into());
        }

        Ok(self.payment_methods.as_slice())
    }

    /// Completes checkout with the chosen payment method.
    ///
    /// The message reflects the cart at this moment and is handed to the host
    /// exactly once. The cart is left as it is; the host closes the page.
    ///
    /// # Errors
    ///
    /// - [`SessionError::UnknownPaymentMethod`]: the method is not offered.
    /// - [`SessionError::Checkout`]: the cart is empty or its total failed.
    /// - [`SessionError::Bridge`]: the host did not take the message.
    pub fn select_payment_method(
        &mut self,
        method_id: &str,
    ) -> Result<CheckoutPayload, SessionError> {
        let method = self
            .payment_methods
            .iter()
            .find(|method| method.id == method_id)
            .ok_or_else(|| SessionError::UnknownPaymentMethod(method_id.to_string()))?;

        let payload = match CheckoutPayload::from_cart(&self.cart, method) {
            Ok(payload) => payload,
            Err(CheckoutError::EmptyCart) => {
                self.notifier.notify(EMPTY_CART_MESSAGE);

                return Err(CheckoutError::EmptyCart.into());
            }
            Err(err) => return Err(err.into()),
        };

        self.bridge.submit(&payload)?;

        Ok(payload)
    }

    /// The cart.
    pub fn cart(&self) -> &Cart<'a> {
        &self.cart
    }

    /// The catalog.
    pub fn catalog(&self) -> &Catalog<'a> {
        &self.catalog
    }

    /// Payment methods offered at checkout.
    pub fn payment_methods(&self) -> &[PaymentMethod] {
        &self.payment_methods
    }

    /// Closes the session, returning the bridge and notifier.
    pub fn into_parts(self) -> (B, N) {
        (self.bridge, self.notifier)
    }
}
