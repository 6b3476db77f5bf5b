//! Classify command - show the display variant of every shoe.

use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use shoe_card::config::CardConfig;
use shoe_card::{format_price, Catalog, DisplayVariant};

use super::ClassifyArgs;
use crate::context::Context;
use crate::output::variant_badge;

/// One classified catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedShoe {
    pub slug: String,
    pub name: String,
    pub variant: DisplayVariant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static str>,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<String>,
}

/// Classify every shoe in `catalog` at `now`.
pub fn classify_catalog(
    catalog: &Catalog,
    config: &CardConfig,
    now: DateTime<Utc>,
) -> Result<Vec<ClassifiedShoe>> {
    let currency = config.currency().context("Invalid catalog currency")?;
    let window = config.window();

    Ok(catalog
        .items(currency)
        .into_iter()
        .map(|item| {
            let variant = DisplayVariant::for_item(&item, &window, now);
            ClassifiedShoe {
                badge: variant.style().flag.map(|f| f.text),
                price: format_price(&item.price),
                sale_price: item.sale_price.as_ref().map(format_price),
                variant,
                slug: item.slug,
                name: item.name,
            }
        })
        .collect())
}

pub fn run(args: ClassifyArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(&args.catalog)?;
    let shoes = classify_catalog(&catalog, &ctx.config, ctx.now)?;

    if ctx.output.is_json() {
        ctx.output.json(&shoes);
        return Ok(());
    }

    ctx.output.header(&format!("{} shoes", shoes.len()));
    ctx.output
        .debug(&format!("Release window evaluated at {}", ctx.now.to_rfc3339()));

    let slug_width = shoes.iter().map(|s| s.slug.len()).max().unwrap_or(4).max(4);
    let widths = [slug_width, 10, 10, 14, 11];
    ctx.output
        .table_row(&["SLUG", "PRICE", "SALE", "BADGE", "VARIANT"], &widths);
    for shoe in &shoes {
        let badge = variant_badge(shoe.variant);
        ctx.output.table_row(
            &[
                shoe.slug.as_str(),
                shoe.price.as_str(),
                shoe.sale_price.as_deref().unwrap_or("-"),
                shoe.badge.unwrap_or("-"),
                badge.as_str(),
            ],
            &widths,
        );
    }

    Ok(())
}
