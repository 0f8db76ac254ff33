//! Type-safe local storage for the Verdant Leaf storefront.
//!
//! The storefront has no backend; everything it remembers between runs
//! lives in a small key-value store on the device, one JSON file per key —
//! the same contract the web build gets from browser local storage.
//!
//! # Example
//!
//! ```rust,ignore
//! use verdant_store::{keys, Store};
//!
//! let store = Store::open(".verdant")?;
//!
//! // Store a value
//! store.set(keys::CART, &cart)?;
//!
//! // Retrieve a value
//! let cart: Option<Cart> = store.get(keys::CART)?;
//!
//! // Delete a value
//! store.remove(keys::CART)?;
//! ```

mod error;
mod store;

pub use error::StoreError;
pub use store::Store;

/// The fixed storage keys the storefront persists under.
pub mod keys {
    /// Serialized cart lines.
    pub const CART: &str = "vl_cart";
    /// Login flag ("true" when a customer is signed in).
    pub const LOGGED_IN: &str = "isLoggedIn";
    /// Mobile number of the signed-in customer.
    pub const USER_MOBILE: &str = "userMobile";
    /// Last generated OTP code. Written by the mock login flow; never
    /// actually compared against the entered code.
    pub const OTP_CODE: &str = "generatedOTP";
    /// Unix-millisecond expiry of the generated OTP.
    pub const OTP_EXPIRY: &str = "otpExpiryTime";
    /// Failed verification attempt counter.
    pub const OTP_ATTEMPTS: &str = "otpAttempts";
}
