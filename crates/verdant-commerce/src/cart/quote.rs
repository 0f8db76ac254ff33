//! Cart pricing quotes.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::error::CommerceError;
use crate::money::Money;

/// GST rate applied to the subtotal.
pub const GST_RATE_PERCENT: i64 = 18;

/// Orders with a subtotal strictly above this ship free.
pub const FREE_SHIPPING_ABOVE: Money = Money {
    amount_minor: 49_900,
    currency: crate::money::Currency::INR,
};

/// Flat shipping fee below the free-shipping threshold.
pub const FLAT_SHIPPING_FEE: Money = Money {
    amount_minor: 5_000,
    currency: crate::money::Currency::INR,
};

/// Complete pricing breakdown for a cart.
///
/// Invariant: `total = subtotal + shipping + gst`, where GST is exactly
/// 18% of the subtotal (not of the total).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Sum of quantity × locked unit price over all lines.
    pub subtotal: Money,
    /// Shipping charge.
    pub shipping: Money,
    /// GST at [`GST_RATE_PERCENT`] of the subtotal.
    pub gst: Money,
    /// Grand total.
    pub total: Money,
}

impl Quote {
    /// Quote the current contents of a cart.
    ///
    /// An empty cart quotes to all zeros with the flat shipping fee; the
    /// checkout flow never reaches payment on an empty cart, so the fee is
    /// display-only there.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` when any intermediate amount does not fit.
    pub fn for_cart(cart: &Cart) -> Result<Self, CommerceError> {
        let subtotal = cart.subtotal()?;
        Self::for_subtotal(subtotal)
    }

    /// Quote a known subtotal.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` when any intermediate amount does not fit.
    pub fn for_subtotal(subtotal: Money) -> Result<Self, CommerceError> {
        let shipping = if subtotal.amount_minor > FREE_SHIPPING_ABOVE.amount_minor {
            Money::zero(subtotal.currency)
        } else {
            FLAT_SHIPPING_FEE
        };
        let gst = subtotal.percent(GST_RATE_PERCENT)?;
        let total = subtotal.try_add(&shipping)?.try_add(&gst)?;

        Ok(Quote {
            subtotal,
            shipping,
            gst,
            total,
        })
    }

    /// Check if the order ships free.
    pub fn ships_free(&self) -> bool {
        self.shipping.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, PackSize};
    use crate::ids::TeaId;

    #[test]
    fn test_free_shipping_above_threshold() {
        // Subtotal ₹5,297.00: one ₹1,499.00 line and two ₹1,899.00 packs.
        let catalog = Catalog::default();
        let dragon_well = catalog.get(&TeaId::new("1")).unwrap();
        let golden_needle = catalog.get(&TeaId::new("2")).unwrap();

        let mut cart = Cart::new();
        cart.add(dragon_well, PackSize::G250, dragon_well.price);
        cart.add(golden_needle, PackSize::G250, golden_needle.price);
        cart.add(golden_needle, PackSize::G250, golden_needle.price);

        let quote = Quote::for_cart(&cart).unwrap();
        assert_eq!(quote.subtotal, Money::inr(529_700));
        assert_eq!(quote.shipping, Money::inr(0));
        assert!(quote.ships_free());
        assert_eq!(quote.gst, Money::inr(95_346));
        assert_eq!(quote.total, Money::inr(625_046));
    }

    #[test]
    fn test_flat_fee_below_threshold() {
        // Subtotal ₹300.00 → ₹50.00 shipping, ₹54.00 GST, ₹404.00 total.
        let quote = Quote::for_subtotal(Money::inr(30_000)).unwrap();
        assert_eq!(quote.shipping, Money::inr(5_000));
        assert_eq!(quote.gst, Money::inr(5_400));
        assert_eq!(quote.total, Money::inr(40_400));
    }

    #[test]
    fn test_threshold_is_strict() {
        // Exactly ₹499.00 still pays the flat fee; a paise more ships free.
        let at = Quote::for_subtotal(Money::inr(49_900)).unwrap();
        assert_eq!(at.shipping, FLAT_SHIPPING_FEE);

        let above = Quote::for_subtotal(Money::inr(49_901)).unwrap();
        assert!(above.ships_free());
    }

    #[test]
    fn test_total_invariant() {
        for paise in [1, 999, 30_000, 49_900, 49_901, 529_700, 1_000_000] {
            let quote = Quote::for_subtotal(Money::inr(paise)).unwrap();
            let recombined = quote
                .subtotal
                .try_add(&quote.shipping)
                .unwrap()
                .try_add(&quote.gst)
                .unwrap();
            assert_eq!(quote.total, recombined);
            assert_eq!(quote.gst, quote.subtotal.percent(GST_RATE_PERCENT).unwrap());
        }
    }
}
