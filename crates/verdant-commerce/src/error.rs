//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront domain operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommerceError {
    /// Tea not found in the catalog.
    #[error("Tea not found: {0}")]
    TeaNotFound(String),

    /// Order not found in the history.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Currency mismatch in money arithmetic.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow in a money calculation.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Checkout cannot start on an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// The address form is missing required fields.
    #[error("Address incomplete: missing {0}")]
    AddressIncomplete(String),

    /// Invalid checkout stage transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition {
        from: &'static str,
        to: &'static str,
    },

    /// The checkout already produced an order; resubmission is rejected.
    #[error("Checkout is already complete")]
    CheckoutAlreadyComplete,
}
