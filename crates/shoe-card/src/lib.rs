//! Product card component for the shoe catalog storefront.
//!
//! A card shows a shoe's image, name, price and colour count, plus a corner
//! badge when the shoe is on sale or newly released:
//!
//! - **Variant**: [`DisplayVariant::classify`] picks `on-sale`, `new-release`
//!   or `default`; a sale always wins over a recent release.
//! - **Style**: [`VariantStyle::for_variant`] maps the variant to badge text,
//!   badge tone and price treatment.
//! - **Render**: [`CardRenderer`] builds an element tree that serializes to
//!   HTML, alone or in a grid, with matching CSS.
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use shoe_card::prelude::*;
//!
//! let catalog = Catalog::from_json(r#"[{
//!     "slug": "stealthy-runner", "name": "Stealthy Runner",
//!     "imageSrc": "/assets/stealthy.png", "price": 165.0,
//!     "salePrice": 119.99, "releaseDate": "2020-01-01", "numOfColors": 1
//! }]"#).unwrap();
//!
//! let items = catalog.items(Currency::USD);
//! let variant = DisplayVariant::for_item(&items[0], &RecencyWindow::default(), Utc::now());
//! assert_eq!(variant, DisplayVariant::OnSale);
//!
//! let html = render_card(&items[0], variant).to_html();
//! assert!(html.contains("Sale!"));
//! ```

pub mod config;
pub mod error;
pub mod html;
pub mod item;
pub mod money;
pub mod page;
pub mod release;
pub mod render;
pub mod text;
pub mod theme;
pub mod variant;

pub use error::CardError;
pub use item::{Catalog, ShoeDisplayItem, ShoeRecord};
pub use money::{format_price, Currency, Money};
pub use release::{is_new_shoe, RecencyWindow, ReleaseDate};
pub use render::{render_card, render_grid, stylesheet, CardRenderer};
pub use text::pluralize;
pub use variant::{DisplayVariant, Flag, FlagTone, VariantStyle};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::CardConfig;
    pub use crate::error::CardError;
    pub use crate::html::{Element, Node};
    pub use crate::item::{Catalog, ShoeDisplayItem, ShoeRecord};
    pub use crate::money::{format_price, Currency, Money};
    pub use crate::page::{HeadContent, Shell};
    pub use crate::release::{is_new_shoe, RecencyWindow, ReleaseDate};
    pub use crate::render::{render_card, render_grid, stylesheet, CardRenderer};
    pub use crate::text::pluralize;
    pub use crate::theme::{Palette, Weights};
    pub use crate::variant::{DisplayVariant, Flag, FlagTone, VariantStyle};
}
