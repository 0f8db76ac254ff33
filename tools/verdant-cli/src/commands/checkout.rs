//! The interactive checkout flow.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Select};

use verdant_app::AppError;
use verdant_commerce::checkout::{AddressKind, CheckoutStage, ShippingAddress};
use verdant_commerce::orders::PaymentMethod;
use verdant_commerce::CommerceError;

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command: Address → Summary → Payment, with backward
/// navigation, then the simulated payment with retry on a gateway outage.
pub async fn run(args: CheckoutArgs, ctx: &mut Context) -> Result<()> {
    if ctx.storefront.customer().is_none() {
        bail!("Sign in first with `verdant login`");
    }
    if ctx.storefront.cart().is_empty() {
        bail!("Your bag is empty. Browse with `verdant shop`.");
    }

    if let Some(method) = args.method.as_deref() {
        // Validate the preselected method up front so a typo fails fast.
        parse_method(method)?;
    }

    ctx.storefront.begin_checkout()?;

    loop {
        let stage = match ctx.storefront.checkout() {
            Some(flow) => flow.stage(),
            None => bail!("No checkout in progress"),
        };

        match stage {
            CheckoutStage::Address => address_stage(ctx)?,
            CheckoutStage::Summary => {
                if !summary_stage(ctx)? {
                    continue; // went back
                }
            }
            CheckoutStage::Payment => {
                payment_stage(&args, ctx).await?;
                return Ok(());
            }
            CheckoutStage::Complete => return Ok(()),
        }
    }
}

fn address_stage(ctx: &mut Context) -> Result<()> {
    ctx.output.step(1, 3, "Shipping Details");

    loop {
        let address = ShippingAddress {
            full_name: prompt("Full name")?,
            mobile: prompt("Mobile number")?,
            email: prompt("Email address")?,
            address: prompt("Flat, house no., building, apartment")?,
            city: prompt("City")?,
            state: prompt("State")?,
            pincode: prompt("Pincode")?,
            kind: match Select::new()
                .with_prompt("Address type")
                .items(&["Home", "Office"])
                .default(0)
                .interact()?
            {
                1 => AddressKind::Office,
                _ => AddressKind::Home,
            },
        };

        match ctx.storefront.submit_address(address) {
            Ok(()) => return Ok(()),
            Err(AppError::Commerce(CommerceError::AddressIncomplete(missing))) => {
                ctx.output
                    .warn(&format!("Required fields missing: {}", missing));
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// Returns false when the shopper navigated back to the address stage.
fn summary_stage(ctx: &mut Context) -> Result<bool> {
    ctx.output.step(2, 3, "Order Summary");

    for line in ctx.storefront.cart().lines() {
        ctx.output.list_item(&format!(
            "{} ({}) × {} = {}",
            line.name,
            line.size,
            line.quantity,
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

    let choice = Select::new()
        .with_prompt("Continue")
        .items(&["Proceed to Payment", "Back to Shipping Details"])
        .default(0)
        .interact()?;

    if choice == 0 {
        ctx.storefront.confirm_summary()?;
        Ok(true)
    } else {
        ctx.storefront.checkout_back()?;
        Ok(false)
    }
}

async fn payment_stage(args: &CheckoutArgs, ctx: &mut Context) -> Result<()> {
    ctx.output.step(3, 3, "Payment Selection");

    let method = match args.method.as_deref() {
        Some(method) => parse_method(method)?,
        None => {
            let labels: Vec<&str> = PaymentMethod::ALL.iter().map(|m| m.label()).collect();
            let picked = Select::new()
                .with_prompt("Payment method")
                .items(&labels)
                .default(0)
                .interact()?;
            PaymentMethod::ALL[picked]
        }
    };
    ctx.storefront.select_payment(method)?;

    loop {
        let total = ctx.storefront.quote()?.total;
        if !Confirm::new()
            .with_prompt(format!("Pay {}?", total.display()))
            .default(true)
            .interact()?
        {
            ctx.output
                .info("Payment cancelled. Your bag and address are untouched.");
            return Ok(());
        }

        let spinner = ctx.output.spinner("Processing...");
        let placed = ctx.storefront.place_order().await;
        spinner.finish_and_clear();

        match placed {
            Ok(order_id) => {
                receipt(&order_id, ctx)?;
                return Ok(());
            }
            Err(err) if err.is_retryable() => {
                ctx.output.warn(&err.to_string());
                if !Confirm::new()
                    .with_prompt("Try again?")
                    .default(true)
                    .interact()?
                {
                    ctx.output
                        .info("No charge was made. Run `verdant checkout` to retry later.");
                    return Ok(());
                }
            }
            Err(err) => return Err(err.into()),
        }
    }
}

fn receipt(order_id: &verdant_commerce::ids::OrderId, ctx: &Context) -> Result<()> {
    let Some(order) = ctx.storefront.orders().get(order_id) else {
        bail!("Order not found: {}", order_id);
    };

    ctx.output
        .success(&format!("Order {} placed on {}", order.id, order.placed_date()));
    ctx.output.kv("Items", &order.item_count().to_string());
    ctx.output.kv("Paid", &order.totals.total.display());
    ctx.output.kv("Via", order.payment_method.label());
    ctx.output.kv("Ship to", &order.address.one_line());
    if let Some(customer) = ctx.storefront.customer() {
        ctx.output.kv(
            "Loyalty",
            &format!("{} points ({} tier)", customer.points, customer.tier.as_str()),
        );
    }
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?)
}

fn parse_method(s: &str) -> Result<PaymentMethod> {
    let found = PaymentMethod::ALL
        .into_iter()
        .find(|m| m.as_str().eq_ignore_ascii_case(s));
    match found {
        Some(method) => Ok(method),
        None => bail!(
            "Unknown payment method '{}'. Use one of: {}",
            s,
            PaymentMethod::ALL
                .iter()
                .map(|m| m.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}
