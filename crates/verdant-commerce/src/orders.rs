//! Order snapshots and history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::{CartLine, Quote};
use crate::checkout::ShippingAddress;
use crate::ids::OrderId;

/// Payment method chosen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    #[default]
    Upi,
    Card,
    NetBanking,
    Wallet,
    CashOnDelivery,
}

impl PaymentMethod {
    /// All methods, in checkout display order.
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::Upi,
        PaymentMethod::Card,
        PaymentMethod::NetBanking,
        PaymentMethod::Wallet,
        PaymentMethod::CashOnDelivery,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Card => "Card",
            PaymentMethod::NetBanking => "NetBanking",
            PaymentMethod::Wallet => "Wallet",
            PaymentMethod::CashOnDelivery => "COD",
        }
    }

    /// Label shown on the payment selection screen.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "UPI (GPay, PhonePe, Paytm)",
            PaymentMethod::Card => "Debit / Credit Card",
            PaymentMethod::NetBanking => "Net Banking",
            PaymentMethod::Wallet => "Wallets",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }
}

/// Order lifecycle status.
///
/// Every new order starts at `Processing`; the later states exist for the
/// order history display but no fulfilment process advances them here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

/// An immutable order snapshot.
///
/// Built exactly once, at successful payment; nothing but the status tag
/// may change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order number (e.g., "VL-483920").
    pub id: OrderId,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
    /// Cart lines at the time of payment.
    pub lines: Vec<CartLine>,
    /// Pricing breakdown captured at payment.
    pub totals: Quote,
    /// Delivery address.
    pub address: ShippingAddress,
    /// Payment method used.
    pub payment_method: PaymentMethod,
    /// Lifecycle status.
    pub status: OrderStatus,
}

impl Order {
    /// Build the order snapshot for a successful payment.
    pub fn place(
        lines: Vec<CartLine>,
        totals: Quote,
        address: ShippingAddress,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            id: OrderId::generate(),
            placed_at: Utc::now(),
            lines,
            totals,
            address,
            payment_method,
            status: OrderStatus::Processing,
        }
    }

    /// Placement date formatted for receipts (e.g., "6 August 2026").
    pub fn placed_date(&self) -> String {
        self.placed_at.format("%-d %B %Y").to_string()
    }

    /// Total item count across all lines.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

/// Order history, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderHistory {
    orders: Vec<Order>,
}

impl OrderHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new order at the front of the history.
    pub fn record(&mut self, order: Order) {
        self.orders.insert(0, order);
    }

    /// Look up an order by id.
    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// The most recently placed order.
    pub fn latest(&self) -> Option<&Order> {
        self.orders.first()
    }

    /// Iterate most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// Number of orders recorded.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check if the history is empty.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
