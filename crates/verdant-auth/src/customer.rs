//! Customer profile.

use serde::{Deserialize, Serialize};
use verdant_commerce::ids::CustomerId;
use verdant_commerce::loyalty::Tier;

/// A storefront customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer identifier, derived from the login mobile number.
    pub id: CustomerId,
    /// Login mobile number.
    pub mobile: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Membership tier.
    pub tier: Tier,
    /// Loyalty points balance.
    pub points: i64,
    /// Newsletter subscription flag.
    pub is_subscribed: bool,
}

impl Customer {
    /// Build the profile attached to a freshly verified mobile number.
    ///
    /// Profile details come from the seeded demo account; only the id and
    /// mobile vary per login.
    pub fn for_mobile(mobile: impl Into<String>) -> Self {
        let mobile = mobile.into();
        Self {
            id: CustomerId::for_mobile(&mobile),
            mobile,
            name: "Julian Sterling".to_string(),
            email: "julian@luxury.com".to_string(),
            tier: Tier::Gold,
            points: 1_250,
            is_subscribed: false,
        }
    }

    /// Add loyalty points earned by an order.
    pub fn award_points(&mut self, points: i64) {
        self.points = self.points.saturating_add(points);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_for_mobile() {
        let customer = Customer::for_mobile("9876543210");
        assert_eq!(customer.id.as_str(), "USER-43210");
        assert_eq!(customer.tier, Tier::Gold);
        assert_eq!(customer.points, 1_250);
    }

    #[test]
    fn test_award_points() {
        let mut customer = Customer::for_mobile("9876543210");
        customer.award_points(529);
        assert_eq!(customer.points, 1_779);
    }
}
