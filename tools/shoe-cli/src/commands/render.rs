//! Render command - produce card HTML for a catalog.

use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use shoe_card::config::CardConfig;
use shoe_card::page::{HeadContent, Shell};
use shoe_card::Catalog;

use super::RenderArgs;
use crate::context::Context;

/// Render the catalog grid, optionally as a full document.
pub fn render_html(
    catalog: &Catalog,
    config: &CardConfig,
    now: DateTime<Utc>,
    page_title: Option<&str>,
) -> Result<String> {
    let currency = config.currency().context("Invalid catalog currency")?;
    let items = catalog.items(currency);
    let renderer = config.renderer();
    let grid = renderer.render_grid(&items, &config.window(), now).to_html();

    Ok(match page_title {
        Some(title) => {
            let head = HeadContent::new(title)
                .with_meta("viewport", "width=device-width, initial-scale=1")
                .with_style(renderer.stylesheet());
            Shell::new(head).wrap(&grid)
        }
        None => format!("{}\n", grid),
    })
}

pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(&args.catalog)?;
    if catalog.is_empty() {
        ctx.output.warn("Catalog has no shoes");
    }

    let title = args.page.then_some(args.title.as_str());
    let html = render_html(&catalog, &ctx.config, ctx.now, title)?;

    match args.out {
        Some(out) => {
            let path = ctx.resolve(&out);
            std::fs::write(&path, &html)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            ctx.output.success(&format!(
                "Rendered {} cards to {}",
                catalog.len(),
                path.display()
            ));
        }
        None => print!("{}", html),
    }

    Ok(())
}
