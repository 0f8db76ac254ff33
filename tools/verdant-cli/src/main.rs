//! Verdant CLI - the Verdant Leaf storefront at the terminal.
//!
//! Commands:
//! - `verdant shop` - Browse the tea catalog
//! - `verdant cart` - Manage the shopping bag
//! - `verdant login` / `verdant logout` - Mock OTP sign-in
//! - `verdant checkout` - Walk the Address → Summary → Payment flow
//! - `verdant orders` - Review placed orders
//! - `verdant profile` - Loyalty points and tier progress
//! - `verdant chat` - Ask the tea sommelier

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CartArgs, ChatArgs, CheckoutArgs, LoginArgs, OrdersArgs, ShopArgs};

/// Verdant Leaf - artisanal tea, in your terminal
#[derive(Parser)]
#[command(name = "verdant")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the tea catalog
    Shop(ShopArgs),

    /// Manage the shopping bag
    Cart(CartArgs),

    /// Sign in with a mobile number (mock OTP)
    Login(LoginArgs),

    /// Sign out and clear the bag
    Logout,

    /// Walk the checkout flow and place an order
    Checkout(CheckoutArgs),

    /// Review placed orders
    Orders(OrdersArgs),

    /// Loyalty points and tier progress
    Profile,

    /// Ask the tea sommelier
    Chat(ChatArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Route tracing to stderr, gated by RUST_LOG (verbose implies debug).
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config and open the storefront
    let config_path = cli.config.as_deref();
    let mut ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Shop(args) => commands::shop::run(args, &mut ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &mut ctx).await,
        Commands::Login(args) => commands::login::run(args, &mut ctx).await,
        Commands::Logout => commands::login::logout(&mut ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &mut ctx).await,
        Commands::Orders(args) => commands::orders::run(args, &mut ctx).await,
        Commands::Profile => commands::profile::run(&mut ctx).await,
        Commands::Chat(args) => commands::chat::run(args, &mut ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
