//! Shipping address types.

use serde::{Deserialize, Serialize};

/// Whether the address is a home or office delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AddressKind {
    #[default]
    Home,
    Office,
}

impl AddressKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressKind::Home => "Home",
            AddressKind::Office => "Office",
        }
    }
}

/// A shipping address collected during checkout.
///
/// Created per checkout attempt; not persisted across sessions. Validation
/// is required-field-only — every field must be non-empty, nothing more.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ShippingAddress {
    /// Recipient full name.
    pub full_name: String,
    /// Contact mobile number.
    pub mobile: String,
    /// Contact email.
    pub email: String,
    /// Flat, house no., building, apartment.
    pub address: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Postal pincode.
    pub pincode: String,
    /// Home or Office.
    pub kind: AddressKind,
}

impl ShippingAddress {
    /// Names of required fields that are currently blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.full_name.trim().is_empty() {
            missing.push("full name");
        }
        if self.mobile.trim().is_empty() {
            missing.push("mobile");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.address.trim().is_empty() {
            missing.push("address");
        }
        if self.city.trim().is_empty() {
            missing.push("city");
        }
        if self.state.trim().is_empty() {
            missing.push("state");
        }
        if self.pincode.trim().is_empty() {
            missing.push("pincode");
        }
        missing
    }

    /// Check if every required field is filled in.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Format as a single delivery line.
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {} ({})",
            self.address,
            self.city,
            self.state,
            self.pincode,
            self.kind.as_str()
        )
    }
}
