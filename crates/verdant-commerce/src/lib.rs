//! E-commerce domain types and logic for the Verdant Leaf storefront.
//!
//! This crate provides the core types of the storefront:
//!
//! - **Catalog**: teas, categories, pack sizes and the static product list
//! - **Cart**: the cart ledger keyed by (tea, pack size) with locked prices
//! - **Pricing**: subtotal / GST / shipping / total quotes
//! - **Checkout**: shipping address and the Address → Summary → Payment flow
//! - **Orders**: immutable order snapshots and the order history
//! - **Loyalty**: membership tiers and points earned per order
//!
//! # Example
//!
//! ```rust
//! use verdant_commerce::prelude::*;
//!
//! let catalog = Catalog::default();
//! let tea = catalog.get(&TeaId::new("1")).unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add(tea, PackSize::G250, tea.price);
//! cart.add(tea, PackSize::G250, tea.price);
//! assert_eq!(cart.item_count(), 2);
//!
//! let quote = Quote::for_cart(&cart).unwrap();
//! assert_eq!(quote.total, quote.subtotal.try_add(&quote.shipping).unwrap().try_add(&quote.gst).unwrap());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod loyalty;
pub mod orders;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Caffeine, Catalog, Category, HarvestInfo, PackSize, SteepingInfo, Tea,
    };

    // Cart
    pub use crate::cart::{Cart, CartLine, Quote};

    // Checkout
    pub use crate::checkout::{AddressKind, CheckoutFlow, CheckoutStage, ShippingAddress};

    // Orders
    pub use crate::orders::{Order, OrderHistory, OrderStatus, PaymentMethod};

    // Loyalty
    pub use crate::loyalty::{points_earned, Tier};
}
