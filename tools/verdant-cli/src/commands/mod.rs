//! CLI command implementations.

pub mod cart;
pub mod chat;
pub mod checkout;
pub mod login;
pub mod orders;
pub mod profile;
pub mod shop;

use clap::{Args, Subcommand};

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    #[command(subcommand)]
    pub command: Option<ShopCommand>,
}

#[derive(Subcommand)]
pub enum ShopCommand {
    /// List the catalog.
    List {
        /// Filter by category (e.g., "Green Tea").
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one tea in full detail.
    Show {
        /// Tea id.
        tea: String,
    },
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the bag with its pricing breakdown.
    Show,
    /// Add a tea to the bag.
    Add {
        /// Tea id.
        tea: String,

        /// Pack size: 250g, 500g or 1kg.
        #[arg(short, long, default_value = "250g")]
        size: String,

        /// How many packs to add.
        #[arg(short, long, default_value_t = 1)]
        quantity: i64,
    },
    /// Remove a line from the bag.
    Remove {
        /// Tea id.
        tea: String,

        /// Pack size: 250g, 500g or 1kg.
        #[arg(short, long, default_value = "250g")]
        size: String,
    },
    /// Adjust a line's quantity by a delta (negative to reduce).
    Adjust {
        /// Tea id.
        tea: String,

        /// Quantity delta, e.g. 2 or -1.
        delta: i64,

        /// Pack size: 250g, 500g or 1kg.
        #[arg(short, long, default_value = "250g")]
        size: String,
    },
    /// Empty the bag.
    Clear,
}

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Mobile number (prompted for when omitted).
    #[arg(short, long)]
    pub mobile: Option<String>,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Preselect the payment method: UPI, Card, NetBanking, Wallet or COD.
    #[arg(short, long)]
    pub method: Option<String>,
}

/// Arguments for the orders command.
#[derive(Args)]
pub struct OrdersArgs {
    #[command(subcommand)]
    pub command: Option<OrdersCommand>,
}

#[derive(Subcommand)]
pub enum OrdersCommand {
    /// List orders, most recent first.
    List,
    /// Show one order in full detail.
    Show {
        /// Order number (e.g., "VL-483920").
        order: String,
    },
}

/// Arguments for the chat command.
#[derive(Args)]
pub struct ChatArgs {
    /// One-shot question (interactive session when omitted).
    pub message: Option<String>,
}
