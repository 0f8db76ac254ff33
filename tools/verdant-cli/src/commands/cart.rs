//! Shopping bag commands.

use anyhow::{bail, Result};

use verdant_commerce::catalog::PackSize;
use verdant_commerce::ids::TeaId;

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &mut Context) -> Result<()> {
    match args.command {
        Some(CartCommand::Show) | None => show(ctx),
        Some(CartCommand::Add {
            tea,
            size,
            quantity,
        }) => add(&tea, &size, quantity, ctx),
        Some(CartCommand::Remove { tea, size }) => remove(&tea, &size, ctx),
        Some(CartCommand::Adjust { tea, delta, size }) => adjust(&tea, &size, delta, ctx),
        Some(CartCommand::Clear) => clear(ctx),
    }
}

fn parse_size(size: &str) -> Result<PackSize> {
    match PackSize::from_str_tag(size) {
        Some(size) => Ok(size),
        None => bail!("Unknown pack size '{}'. Use 250g, 500g or 1kg.", size),
    }
}

fn add(tea: &str, size: &str, quantity: i64, ctx: &mut Context) -> Result<()> {
    if quantity < 1 {
        bail!("Quantity must be at least 1");
    }
    let size = parse_size(size)?;
    let tea = TeaId::new(tea);

    ctx.storefront.add_to_cart(&tea, size)?;
    if quantity > 1 {
        ctx.storefront.change_quantity(&tea, size, quantity - 1)?;
    }

    if let Some(line) = ctx.storefront.cart().find(&tea, size) {
        ctx.output.success(&format!(
            "Added {} ({}) — {} in bag at {} each",
            line.name,
            size.label(),
            line.quantity,
            line.unit_price.display()
        ));
    }
    Ok(())
}

fn remove(tea: &str, size: &str, ctx: &mut Context) -> Result<()> {
    let size = parse_size(size)?;
    ctx.storefront.remove_from_cart(&TeaId::new(tea), size)?;
    ctx.output.success("Removed from bag");
    Ok(())
}

fn adjust(tea: &str, size: &str, delta: i64, ctx: &mut Context) -> Result<()> {
    let size = parse_size(size)?;
    let tea = TeaId::new(tea);
    ctx.storefront.change_quantity(&tea, size, delta)?;

    match ctx.storefront.cart().find(&tea, size) {
        Some(line) => ctx
            .output
            .success(&format!("{} ({}) — now {} in bag", line.name, size, line.quantity)),
        None => ctx.output.success("Line removed from bag"),
    }
    Ok(())
}

fn clear(ctx: &mut Context) -> Result<()> {
    ctx.storefront.clear_cart()?;
    ctx.output.success("Bag emptied");
    Ok(())
}

fn show(ctx: &mut Context) -> Result<()> {
    let cart = ctx.storefront.cart();

    if ctx.output.is_json() {
        ctx.output.json(cart);
        return Ok(());
    }

    if cart.is_empty() {
        ctx.output.info("Your bag is empty. Browse with `verdant shop`.");
        return Ok(());
    }

    ctx.output.header("Your Bag");
    for line in cart.lines() {
        ctx.output.list_item(&format!(
            "{} ({}) × {} @ {} = {}",
            line.name,
            line.size,
            line.quantity,
            line.unit_price.display(),
            line.line_total()?.display()
        ));
    }

    let quote = ctx.storefront.quote()?;
    println!();
    ctx.output.kv("Subtotal", &quote.subtotal.display());
    ctx.output.kv(
        "Shipping",
        &if quote.ships_free() {
            "FREE".to_string()
        } else {
            quote.shipping.display()
        },
    );
    ctx.output.kv("GST (18%)", &quote.gst.display());
    ctx.output.kv("Grand Total", &quote.total.display());
    Ok(())
}
