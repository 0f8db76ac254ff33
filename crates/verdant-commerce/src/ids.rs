//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a TeaId where an OrderId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define all ID types
define_id!(TeaId);
define_id!(OrderId);
define_id!(PaymentId);
define_id!(CustomerId);

impl OrderId {
    /// Generate a new order number in the storefront's `VL-` format.
    pub fn generate() -> Self {
        use rand::Rng;
        let digits: u32 = rand::thread_rng().gen_range(100_000..1_000_000);
        Self(format!("VL-{}", digits))
    }
}

impl PaymentId {
    /// Generate a new payment reference.
    pub fn generate() -> Self {
        Self(format!("PAY-{}", unique_suffix()))
    }
}

impl CustomerId {
    /// Derive the customer ID from a mobile number: `USER-` plus the last
    /// five digits, as printed on order receipts.
    pub fn for_mobile(mobile: &str) -> Self {
        let tail: String = mobile
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect::<String>()
            .chars()
            .rev()
            .take(5)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        Self(format!("USER-{}", tail))
    }
}

/// Generate a unique suffix from the clock and an atomic counter.
fn unique_suffix() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

    format!("{:x}", timestamp as u64 ^ counter.rotate_left(32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = TeaId::new("1");
        assert_eq!(id.as_str(), "1");
    }

    #[test]
    fn test_order_id_format() {
        let id = OrderId::generate();
        assert!(id.as_str().starts_with("VL-"));
        assert_eq!(id.as_str().len(), 9);
    }

    #[test]
    fn test_payment_id_generation() {
        let id1 = PaymentId::generate();
        let id2 = PaymentId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_customer_id_from_mobile() {
        let id = CustomerId::for_mobile("9876543210");
        assert_eq!(id.as_str(), "USER-43210");
    }

    #[test]
    fn test_customer_id_ignores_formatting() {
        let id = CustomerId::for_mobile("+91 98765 43210");
        assert_eq!(id.as_str(), "USER-43210");
    }

    #[test]
    fn test_id_display() {
        let id = OrderId::new("VL-123456");
        assert_eq!(format!("{}", id), "VL-123456");
    }
}
