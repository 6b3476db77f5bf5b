//! Product card renderer.
//!
//! A card is a link to the shoe's detail page wrapping an `article`:
//!
//! ```text
//! a.shoe-card-link
//! └── article.shoe-card[data-variant]
//!     ├── div.image-wrapper > img.image
//!     ├── span.flag            (sale / new release only)
//!     ├── div.spacer
//!     ├── div.row > h3.name, span.price
//!     └── div.row > p.color-info, span.sale-price
//! ```
//!
//! The sale price element is always emitted so the second row keeps its
//! layout; it is hidden unless the card is on sale.

use chrono::{DateTime, Utc};

use crate::html::{Element, Node};
use crate::item::{ShoeDisplayItem, DEFAULT_LINK_PREFIX};
use crate::money::format_price;
use crate::release::RecencyWindow;
use crate::text::pluralize;
use crate::theme::{Palette, Weights};
use crate::variant::DisplayVariant;

/// Space between the image and the name row, in pixels.
const SPACER_PX: u32 = 12;

/// Renders shoe cards with a given theme.
#[derive(Debug, Clone)]
pub struct CardRenderer {
    pub palette: Palette,
    pub weights: Weights,
    pub link_prefix: String,
}

impl Default for CardRenderer {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            weights: Weights::default(),
            link_prefix: DEFAULT_LINK_PREFIX.to_string(),
        }
    }
}

impl CardRenderer {
    pub fn new(palette: Palette, weights: Weights) -> Self {
        Self {
            palette,
            weights,
            ..Default::default()
        }
    }

    pub fn with_link_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.link_prefix = prefix.into();
        self
    }

    /// Render one card for an already classified item.
    pub fn render(&self, item: &ShoeDisplayItem, variant: DisplayVariant) -> Node {
        let style = variant.style();

        let image = Element::new("div").class("image-wrapper").child(
            Element::new("img")
                .class("image")
                .attr("alt", "")
                .attr("src", item.image_src.as_str()),
        );

        let price = if style.strike_price {
            Element::new("span").class("price").style(&[
                ("--text-decoration", "line-through"),
                ("--color", self.palette.gray_700.as_str()),
            ])
        } else {
            Element::new("span").class("price")
        }
        .text(format_price(&item.price));

        let name_row = Element::new("div")
            .class("row")
            .child(Element::new("h3").class("name").text(item.name.as_str()))
            .child(price);

        let sale_text = item.sale_price.as_ref().map(format_price).unwrap_or_default();
        let mut sale_price = Element::new("span").class("sale-price");
        if !style.show_sale_price {
            sale_price = sale_price.flag("hidden").style(&[("display", "none")]);
        }
        let info_row = Element::new("div")
            .class("row")
            .child(
                Element::new("p")
                    .class("color-info")
                    .text(pluralize("Color", item.num_of_colors)),
            )
            .child(sale_price.text(sale_text));

        let mut article = Element::new("article")
            .class("shoe-card")
            .attr("data-variant", variant.as_str())
            .child(image);

        if let Some(flag) = style.flag {
            article = article.child(
                Element::new("span")
                    .class("flag")
                    .style(&[("background-color", self.palette.flag_color(flag.tone))])
                    .text(flag.text),
            );
        }

        let spacer_height = format!("{}px", SPACER_PX);
        let article = article
            .child(
                Element::new("div")
                    .class("spacer")
                    .style(&[("height", spacer_height.as_str())]),
            )
            .child(name_row)
            .child(info_row);

        Element::new("a")
            .class("shoe-card-link")
            .attr("href", item.href(&self.link_prefix))
            .child(article)
            .into()
    }

    /// Classify each item against `now` and render the cards in a grid.
    pub fn render_grid(
        &self,
        items: &[ShoeDisplayItem],
        window: &RecencyWindow,
        now: DateTime<Utc>,
    ) -> Node {
        let cards = items.iter().map(|item| {
            let variant = DisplayVariant::for_item(item, window, now);
            self.render(item, variant)
        });
        let grid = Element::new("div").class("shoe-grid").children(cards);
        tracing::debug!(count = grid.children.len(), "rendered shoe grid");
        grid.into()
    }

    /// CSS rules for cards rendered by this renderer.
    pub fn stylesheet(&self) -> String {
        stylesheet(&self.palette, &self.weights)
    }
}

/// Render a card with the default theme.
pub fn render_card(item: &ShoeDisplayItem, variant: DisplayVariant) -> Node {
    CardRenderer::default().render(item, variant)
}

/// Render a grid of cards with the default theme.
pub fn render_grid(items: &[ShoeDisplayItem], window: &RecencyWindow, now: DateTime<Utc>) -> Node {
    CardRenderer::default().render_grid(items, window, now)
}

/// Card CSS.
pub fn stylesheet(palette: &Palette, weights: &Weights) -> String {
    format!(
        r#".shoe-grid {{
    display: flex;
    flex-wrap: wrap;
    gap: 32px;
}}
.shoe-card-link {{
    text-decoration: none;
    color: inherit;
    flex: 1;
    min-width: 340px;
}}
.shoe-card {{
    position: relative;
}}
.shoe-card .flag {{
    position: absolute;
    z-index: 1;
    top: 12px;
    right: -4px;
    font-family: "Raleway", sans-serif;
    font-size: {flag_size}rem;
    color: {white};
    font-weight: {bold};
    padding: 8px;
    border-radius: 2px;
}}
.shoe-card .image-wrapper {{
    position: relative;
}}
.shoe-card .image {{
    width: 100%;
    border-radius: 16px 16px 4px 4px;
    overflow: hidden;
}}
.shoe-card .row {{
    display: flex;
    justify-content: space-between;
    font-size: 1rem;
}}
.shoe-card .name {{
    font-weight: {medium};
    color: {gray_900};
}}
.shoe-card .price {{
    text-decoration: var(--text-decoration);
    color: var(--color);
}}
.shoe-card .color-info {{
    color: {gray_700};
}}
.shoe-card .sale-price {{
    font-weight: {medium};
    color: {primary};
}}
"#,
        flag_size = 14.0 / 16.0,
        white = palette.white,
        bold = weights.bold,
        medium = weights.medium,
        gray_900 = palette.gray_900,
        gray_700 = palette.gray_700,
        primary = palette.primary,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};
    use chrono::TimeZone;

    fn shoe(sale: Option<f64>) -> ShoeDisplayItem {
        ShoeDisplayItem {
            slug: "stealthy-runner".to_string(),
            name: "Stealthy Runner".to_string(),
            image_src: "/assets/stealthy.png".to_string(),
            price: Money::from_decimal(165.0, Currency::USD),
            sale_price: sale.map(|s| Money::from_decimal(s, Currency::USD)),
            release_date: "2020-01-01".parse().unwrap(),
            num_of_colors: 1,
        }
    }

    #[test]
    fn test_on_sale_card() {
        let card = render_card(&shoe(Some(119.99)), DisplayVariant::OnSale);
        let link = card.as_element().unwrap();
        assert_eq!(link.get_attr("href"), Some("/shoe/stealthy-runner"));

        let flag = card.find_by_class("flag").unwrap();
        assert_eq!(Node::from(flag.clone()).text_content(), "Sale!");
        let palette = Palette::default();
        assert_eq!(
            flag.get_attr("style").unwrap(),
            format!("background-color: {}", palette.primary)
        );

        let price = card.find_by_class("price").unwrap();
        assert!(price.get_attr("style").unwrap().contains("line-through"));

        let sale = card.find_by_class("sale-price").unwrap();
        assert_eq!(sale.get_attr("hidden"), None);
        assert_eq!(Node::from(sale.clone()).text_content(), "$119.99");

        let colors = card.find_by_class("color-info").unwrap();
        assert_eq!(Node::from(colors.clone()).text_content(), "1 Color");
    }

    #[test]
    fn test_new_release_card() {
        let card = render_card(&shoe(None), DisplayVariant::NewRelease);
        let flag = card.find_by_class("flag").unwrap();
        assert_eq!(Node::from(flag.clone()).text_content(), "Just Released!");
        assert!(flag.get_attr("style").unwrap().contains(&Palette::default().secondary));
        assert_eq!(card.find_by_class("price").unwrap().get_attr("style"), None);
    }

    #[test]
    fn test_default_card_hides_sale_price() {
        let card = render_card(&shoe(None), DisplayVariant::Default);
        assert!(card.find_by_class("flag").is_none());

        let sale = card.find_by_class("sale-price").unwrap();
        assert_eq!(sale.get_attr("hidden"), Some(""));
        assert_eq!(sale.get_attr("style"), Some("display: none"));
        assert_eq!(Node::from(sale.clone()).text_content(), "");
    }

    #[test]
    fn test_html_output() {
        let html = render_card(&shoe(Some(119.99)), DisplayVariant::OnSale).to_html();
        assert!(html.starts_with(r#"<a class="shoe-card-link" href="/shoe/stealthy-runner">"#));
        assert!(html.contains(r#"<article class="shoe-card" data-variant="on-sale">"#));
        assert!(html.contains(r#"<img class="image" alt src="/assets/stealthy.png">"#));
        assert!(html.contains("<h3 class=\"name\">Stealthy Runner</h3>"));
        assert!(html.ends_with("</article></a>"));
    }

    #[test]
    fn test_custom_link_prefix() {
        let renderer = CardRenderer::default().with_link_prefix("/products");
        let card = renderer.render(&shoe(None), DisplayVariant::Default);
        assert_eq!(
            card.as_element().unwrap().get_attr("href"),
            Some("/products/stealthy-runner")
        );
    }

    #[test]
    fn test_grid_classifies_each_item() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        let mut fresh = shoe(None);
        fresh.slug = "fresh".to_string();
        fresh.release_date = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap().into();

        let grid = render_grid(
            &[shoe(Some(100.0)), fresh, shoe(None)],
            &RecencyWindow::default(),
            now,
        );
        let variants: Vec<_> = grid
            .find_all_by_class("shoe-card")
            .iter()
            .filter_map(|c| c.get_attr("data-variant"))
            .collect();
        assert_eq!(variants, vec!["on-sale", "new-release", "default"]);
    }

    #[test]
    fn test_grid_has_one_card_per_item() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        let window = RecencyWindow::default();

        let grid = render_grid(&[shoe(None), shoe(Some(50.0))], &window, now);
        assert_eq!(grid.as_element().unwrap().children.len(), 2);

        let empty = render_grid(&[], &window, now);
        assert_eq!(empty.to_html(), r#"<div class="shoe-grid"></div>"#);
    }

    #[test]
    fn test_stylesheet_uses_theme() {
        let css = stylesheet(&Palette::default(), &Weights::default());
        assert!(css.contains("min-width: 340px"));
        assert!(css.contains("font-size: 0.875rem"));
        assert!(css.contains("font-weight: 800"));
        assert!(css.contains(&Palette::default().primary));
    }
}
