//! Checkout: shipping address and the multi-step flow.

mod address;
mod flow;

pub use address::{AddressKind, ShippingAddress};
pub use flow::{CheckoutFlow, CheckoutStage};
