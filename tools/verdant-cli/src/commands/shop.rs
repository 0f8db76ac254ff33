//! Catalog browsing commands.

use anyhow::{bail, Result};

use verdant_commerce::catalog::{Category, PackSize, Tea};
use verdant_commerce::ids::TeaId;

use super::{ShopArgs, ShopCommand};
use crate::context::Context;

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &mut Context) -> Result<()> {
    match args.command {
        None => list(None, ctx),
        Some(ShopCommand::List { category }) => list(category, ctx),
        Some(ShopCommand::Show { tea }) => show(&tea, ctx),
    }
}

fn list(category: Option<String>, ctx: &Context) -> Result<()> {
    let catalog = ctx.storefront.catalog();

    let filter = match category {
        Some(name) => match Category::from_display_name(&name) {
            Some(c) => Some(c),
            None => bail!(
                "Unknown category '{}'. Try one of: {}",
                name,
                Category::ALL
                    .iter()
                    .map(|c| c.display_name())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        },
        None => None,
    };

    let teas: Vec<&Tea> = match filter {
        Some(c) => catalog.by_category(c).collect(),
        None => catalog.iter().collect(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&teas);
        return Ok(());
    }

    match filter {
        Some(c) => ctx.output.header(&format!("{} — Verdant Leaf", c)),
        None => ctx.output.header("The Verdant Leaf Collection"),
    }

    ctx.output
        .table_row(&["ID", "Tea", "Category", "Caffeine", "Rating", "250g"], &TABLE_WIDTHS);
    for tea in teas {
        ctx.output.table_row(
            &[
                tea.id.as_str(),
                &tea.name,
                tea.category.display_name(),
                tea.caffeine.as_str(),
                &format!("{:.1} ({})", tea.rating, tea.review_count),
                &tea.price.display(),
            ],
            &TABLE_WIDTHS,
        );
    }
    ctx.output
        .info("Use `verdant shop show <id>` for steeping notes and pack prices.");
    Ok(())
}

const TABLE_WIDTHS: [usize; 6] = [4, 26, 18, 9, 11, 12];

fn show(tea: &str, ctx: &Context) -> Result<()> {
    let catalog = ctx.storefront.catalog();
    let Some(tea) = catalog.get(&TeaId::new(tea)) else {
        bail!("Tea not found: {}", tea);
    };

    if ctx.output.is_json() {
        ctx.output.json(tea);
        return Ok(());
    }

    ctx.output.header(&tea.name);
    ctx.output.kv("Category", tea.category.display_name());
    ctx.output.kv("Origin", &format!("{} — {}", tea.origin, tea.region));
    ctx.output.kv("Caffeine", tea.caffeine.as_str());
    ctx.output.kv(
        "Rating",
        &format!("{:.1} stars across {} reviews", tea.rating, tea.review_count),
    );
    println!("\n  {}\n", tea.description);

    ctx.output.header("Pack sizes");
    for size in PackSize::ALL {
        let price = size.price_for(tea.price)?;
        let badge = size.badge().map(|b| format!("  [{}]", b)).unwrap_or_default();
        ctx.output
            .list_item(&format!("{:<10} {}{}", size.label(), price.display(), badge));
    }

    ctx.output.header("Steeping");
    ctx.output.kv("Temperature", &tea.steeping.temperature);
    ctx.output.kv("Time", &tea.steeping.time);
    ctx.output.kv("Yield", &tea.steeping.cups_per_pack);

    ctx.output.header("Harvest");
    ctx.output.kv("Year", &tea.harvest.year);
    ctx.output.kv("Flush", &tea.harvest.flush);
    ctx.output.kv("Elevation", &tea.harvest.elevation);
    ctx.output.kv("Processing", &tea.harvest.processing);
    ctx.output
        .kv("Tasting notes", &tea.harvest.tasting_notes.join(", "));

    Ok(())
}
