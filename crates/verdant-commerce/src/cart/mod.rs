//! Cart ledger and pricing.

mod cart;
mod quote;

pub use cart::{Cart, CartLine};
pub use quote::{Quote, FLAT_SHIPPING_FEE, FREE_SHIPPING_ABOVE, GST_RATE_PERCENT};
