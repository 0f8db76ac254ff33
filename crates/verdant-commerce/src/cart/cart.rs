//! Cart and line item types.

use serde::{Deserialize, Serialize};

use crate::catalog::{PackSize, Tea};
use crate::error::CommerceError;
use crate::ids::TeaId;
use crate::money::Money;

/// A line in the cart.
///
/// Uniqueness key is `(tea, size)`. The unit price is locked when the line
/// is created; later catalog price changes never reprice an existing line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Tea being purchased.
    pub tea: TeaId,
    /// Tea name (denormalized for display).
    pub name: String,
    /// Selected pack size.
    pub size: PackSize,
    /// Quantity, always ≥ 1 while the line exists.
    pub quantity: i64,
    /// Unit price locked at add-time.
    pub unit_price: Money,
}

impl CartLine {
    /// Total for this line (unit price × quantity).
    ///
    /// # Errors
    ///
    /// Returns `Overflow` when the product does not fit.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.unit_price.try_multiply(self.quantity)
    }
}

/// The shopping cart: a ledger of lines keyed by `(tea, size)`.
///
/// All mutations are infallible; removing or adjusting a key that is not
/// present is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one pack of a tea at the given size and locked unit price.
    ///
    /// Increments the quantity when the `(tea, size)` key already has a
    /// line, otherwise inserts a new line with quantity 1. The unit price
    /// argument is only consulted for a new line; an existing line keeps
    /// the price it locked at first add.
    pub fn add(&mut self, tea: &Tea, size: PackSize, unit_price: Money) {
        if let Some(line) = self.find_mut(&tea.id, size) {
            line.quantity = line.quantity.saturating_add(1);
            return;
        }
        self.lines.push(CartLine {
            tea: tea.id.clone(),
            name: tea.name.clone(),
            size,
            quantity: 1,
            unit_price,
        });
    }

    /// Remove the `(tea, size)` line entirely. No-op when absent.
    pub fn remove(&mut self, tea: &TeaId, size: PackSize) {
        self.lines.retain(|l| !(l.tea == *tea && l.size == size));
    }

    /// Add `delta` to the quantity of the `(tea, size)` line, removing the
    /// line when the result drops to zero or below. No-op when absent.
    pub fn adjust_quantity(&mut self, tea: &TeaId, size: PackSize, delta: i64) {
        if let Some(line) = self.find_mut(tea, size) {
            line.quantity = line.quantity.saturating_add(delta);
        }
        self.lines.retain(|l| l.quantity > 0);
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Get the line for a `(tea, size)` key.
    pub fn find(&self, tea: &TeaId, size: PackSize) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.tea == *tea && l.size == size)
    }

    fn find_mut(&mut self, tea: &TeaId, size: PackSize) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|l| l.tea == *tea && l.size == size)
    }

    /// All lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct `(tea, size)` lines.
    pub fn unique_line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of line totals.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` when a line total or the sum does not fit.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.lines.iter().try_fold(Money::inr(0), |acc, line| {
            acc.try_add(&line.line_total()?)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn catalog_tea(id: &str) -> Tea {
        Catalog::default().get(&TeaId::new(id)).unwrap().clone()
    }

    #[test]
    fn test_add_inserts_line_with_quantity_one() {
        let tea = catalog_tea("1");
        let mut cart = Cart::new();
        cart.add(&tea, PackSize::G250, tea.price);

        assert_eq!(cart.unique_line_count(), 1);
        assert_eq!(cart.item_count(), 1);
        assert_eq!(
            cart.find(&tea.id, PackSize::G250).unwrap().unit_price,
            tea.price
        );
    }

    #[test]
    fn test_add_same_key_increments_quantity() {
        let tea = catalog_tea("1");
        let mut cart = Cart::new();
        cart.add(&tea, PackSize::G250, tea.price);
        cart.add(&tea, PackSize::G250, tea.price);

        assert_eq!(cart.unique_line_count(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_add_different_size_creates_distinct_line() {
        let tea = catalog_tea("1");
        let mut cart = Cart::new();
        cart.add(&tea, PackSize::G250, tea.price);
        cart.add(
            &tea,
            PackSize::G500,
            PackSize::G500.price_for(tea.price).unwrap(),
        );

        assert_eq!(cart.unique_line_count(), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_locked_price_survives_repeat_adds() {
        let tea = catalog_tea("1");
        let mut cart = Cart::new();
        cart.add(&tea, PackSize::G250, Money::inr(100_000));
        // A later add quoting a different price does not reprice the line.
        cart.add(&tea, PackSize::G250, Money::inr(999_900));

        let line = cart.find(&tea.id, PackSize::G250).unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.unit_price, Money::inr(100_000));
    }

    #[test]
    fn test_remove_deletes_line() {
        let tea = catalog_tea("1");
        let mut cart = Cart::new();
        cart.add(&tea, PackSize::G250, tea.price);
        cart.adjust_quantity(&tea.id, PackSize::G250, 4);

        cart.remove(&tea.id, PackSize::G250);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let tea = catalog_tea("1");
        let mut cart = Cart::new();
        cart.add(&tea, PackSize::G250, tea.price);

        cart.remove(&tea.id, PackSize::Kg1);
        cart.remove(&TeaId::new("99"), PackSize::G250);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_adjust_quantity_accumulates_deltas() {
        let tea = catalog_tea("2");
        let mut cart = Cart::new();
        cart.add(&tea, PackSize::G250, tea.price);
        cart.adjust_quantity(&tea.id, PackSize::G250, 3);
        cart.adjust_quantity(&tea.id, PackSize::G250, -2);

        assert_eq!(cart.find(&tea.id, PackSize::G250).unwrap().quantity, 2);
    }

    #[test]
    fn test_adjust_to_zero_removes_line() {
        let tea = catalog_tea("2");
        let mut cart = Cart::new();
        cart.add(&tea, PackSize::G250, tea.price);

        cart.adjust_quantity(&tea.id, PackSize::G250, -1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_adjust_below_zero_removes_line() {
        let tea = catalog_tea("2");
        let mut cart = Cart::new();
        cart.add(&tea, PackSize::G250, tea.price);
        cart.adjust_quantity(&tea.id, PackSize::G250, -5);

        assert!(cart.find(&tea.id, PackSize::G250).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_adjust_missing_key_is_noop() {
        let mut cart = Cart::new();
        cart.adjust_quantity(&TeaId::new("1"), PackSize::G250, 5);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let tea = catalog_tea("1");
        let mut cart = Cart::new();
        cart.add(&tea, PackSize::G250, tea.price);
        cart.add(&tea, PackSize::G500, tea.price);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_subtotal_uses_locked_prices() {
        let tea = catalog_tea("1");
        let mut cart = Cart::new();
        cart.add(&tea, PackSize::G250, Money::inr(149_900));
        cart.adjust_quantity(&tea.id, PackSize::G250, 1);

        assert_eq!(cart.subtotal().unwrap(), Money::inr(299_800));
    }

    #[test]
    fn test_cart_serde_roundtrip() {
        let tea = catalog_tea("3");
        let mut cart = Cart::new();
        cart.add(&tea, PackSize::G500, Money::inr(449_820));

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }
}
