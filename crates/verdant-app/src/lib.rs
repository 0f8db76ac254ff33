//! Application layer for the Verdant Leaf storefront.
//!
//! [`Storefront`] is the single controller that owns all mutable
//! application state — catalog, cart, signed-in customer, order history and
//! the in-flight checkout — and exposes the defined operations on it.
//! Subordinate surfaces (the CLI, tests) hold a reference to the
//! controller; nothing mutates state around it.
//!
//! The payment side is a simulation: [`SimulatedGateway`] sleeps for a
//! configurable latency and fails a configurable fraction of charges with
//! a retryable error, standing in for a real acquirer.

mod error;
mod gateway;
mod storefront;

pub use error::AppError;
pub use gateway::{
    GatewayError, PaymentGateway, SimulatedGateway, SIMULATED_FAILURE_RATE, SIMULATED_LATENCY_MS,
};
pub use storefront::Storefront;
