//! Customer profile command.

use anyhow::{bail, Result};

use verdant_commerce::loyalty::{tier_progress_percent, NEXT_TIER_AT};

use crate::context::Context;

/// Run the profile command.
pub async fn run(ctx: &mut Context) -> Result<()> {
    let Some(customer) = ctx.storefront.customer() else {
        bail!("Not signed in. Run `verdant login` first.");
    };

    if ctx.output.is_json() {
        ctx.output.json(customer);
        return Ok(());
    }

    ctx.output.header(&customer.name);
    ctx.output.kv("Member ID", customer.id.as_str());
    ctx.output.kv("Mobile", &customer.mobile);
    ctx.output.kv("Email", &customer.email);
    ctx.output.kv("Tier", customer.tier.as_str());
    ctx.output.kv("Points", &customer.points.to_string());

    if let Some(next) = customer.tier.next() {
        let remaining = (NEXT_TIER_AT - customer.points).max(0);
        ctx.output.kv(
            &format!("To {}", next.as_str()),
            &format!(
                "{} points to go ({}% there)",
                remaining,
                tier_progress_percent(customer.points)
            ),
        );
    }

    ctx.output.kv(
        "Newsletter",
        if customer.is_subscribed {
            "subscribed"
        } else {
            "not subscribed"
        },
    );
    Ok(())
}
