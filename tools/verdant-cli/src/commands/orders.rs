//! Order history commands.

use anyhow::{bail, Result};

use verdant_commerce::ids::OrderId;

use super::{OrdersArgs, OrdersCommand};
use crate::context::Context;
use crate::output::status_badge;

/// Run the orders command.
pub async fn run(args: OrdersArgs, ctx: &mut Context) -> Result<()> {
    match args.command {
        Some(OrdersCommand::List) | None => list(ctx),
        Some(OrdersCommand::Show { order }) => show(&order, ctx),
    }
}

fn list(ctx: &Context) -> Result<()> {
    let orders = ctx.storefront.orders();

    if ctx.output.is_json() {
        ctx.output.json(&orders.iter().collect::<Vec<_>>());
        return Ok(());
    }

    if orders.is_empty() {
        ctx.output
            .info("No orders this session. Order history is not persisted between runs.");
        return Ok(());
    }

    ctx.output.header("Recent Orders");
    for order in orders.iter() {
        ctx.output.list_item(&format!(
            "{}  {}  {} item(s)  {}  {}",
            order.id,
            order.placed_date(),
            order.item_count(),
            order.totals.total.display(),
            status_badge(order.status.as_str())
        ));
    }
    Ok(())
}

fn show(order: &str, ctx: &Context) -> Result<()> {
    let Some(order) = ctx.storefront.orders().get(&OrderId::new(order)) else {
        bail!("Order not found: {}", order);
    };

    if ctx.output.is_json() {
        ctx.output.json(order);
        return Ok(());
    }

    ctx.output.header(&format!("Order {}", order.id));
    ctx.output.kv("Placed", &order.placed_date());
    ctx.output.kv("Status", &status_badge(order.status.as_str()));
    ctx.output.kv("Payment", order.payment_method.label());
    ctx.output
        .kv("Ship to", &format!("{}, {}", order.address.full_name, order.address.one_line()));

    ctx.output.header("Items");
    for line in &order.lines {
        ctx.output.list_item(&format!(
            "{} ({}) × {} @ {} = {}",
            line.name,
            line.size,
            line.quantity,
            line.unit_price.display(),
            line.line_total()?.display()
        ));
    }

    println!();
    ctx.output.kv("Subtotal", &order.totals.subtotal.display());
    ctx.output.kv(
        "Shipping",
        &if order.totals.ships_free() {
            "FREE".to_string()
        } else {
            order.totals.shipping.display()
        },
    );
    ctx.output.kv("GST (18%)", &order.totals.gst.display());
    ctx.output.kv("Total", &order.totals.total.display());
    Ok(())
}
