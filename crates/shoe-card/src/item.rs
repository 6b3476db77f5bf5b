//! Shoe data as the catalog provides it and as the card consumes it.

use serde::{Deserialize, Serialize};

use crate::error::CardError;
use crate::money::{Currency, Money};
use crate::release::{ReleaseDate, INVALID_RELEASE_DATE};

/// Default path prefix for shoe detail pages.
pub const DEFAULT_LINK_PREFIX: &str = "/shoe";

/// A shoe entry in the catalog feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoeRecord {
    pub slug: String,
    pub name: String,
    pub image_src: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    pub release_date: ReleaseDate,
    pub num_of_colors: u32,
}

impl ShoeRecord {
    /// Convert decimal prices into the given currency.
    pub fn into_item(self, currency: Currency) -> ShoeDisplayItem {
        ShoeDisplayItem {
            slug: self.slug,
            name: self.name,
            image_src: self.image_src,
            price: Money::from_decimal(self.price, currency),
            sale_price: self.sale_price.map(|p| Money::from_decimal(p, currency)),
            release_date: self.release_date,
            num_of_colors: self.num_of_colors,
        }
    }
}

/// Everything a product card displays for one shoe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoeDisplayItem {
    pub slug: String,
    pub name: String,
    pub image_src: String,
    pub price: Money,
    /// Present when the shoe is discounted.
    pub sale_price: Option<Money>,
    pub release_date: ReleaseDate,
    pub num_of_colors: u32,
}

impl ShoeDisplayItem {
    /// Detail page path, e.g. `/shoe/tail-lift`.
    pub fn href(&self, prefix: &str) -> String {
        format!("{}/{}", prefix.trim_end_matches('/'), self.slug)
    }
}

#[derive(Deserialize)]
struct WrappedFeed {
    shoes: Vec<ShoeRecord>,
}

/// A catalog feed of shoes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    pub shoes: Vec<ShoeRecord>,
}

impl Catalog {
    /// Parse a feed that is either a bare array or `{ "shoes": [...] }`.
    pub fn from_json(json: &str) -> Result<Self, CardError> {
        let shoes = match json.trim_start().as_bytes().first() {
            Some(b'{') => serde_json::from_str::<WrappedFeed>(json)
                .map(|feed| feed.shoes)
                .map_err(feed_error)?,
            _ => serde_json::from_str::<Vec<ShoeRecord>>(json).map_err(feed_error)?,
        };
        Ok(Self { shoes })
    }

    pub fn len(&self) -> usize {
        self.shoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shoes.is_empty()
    }

    /// Display items priced in `currency`.
    pub fn items(&self, currency: Currency) -> Vec<ShoeDisplayItem> {
        self.shoes
            .iter()
            .cloned()
            .map(|record| record.into_item(currency))
            .collect()
    }
}

/// Keep bad release dates distinguishable from other feed errors.
fn feed_error(e: serde_json::Error) -> CardError {
    let message = e.to_string();
    match message.strip_prefix(INVALID_RELEASE_DATE) {
        Some(detail) => CardError::InvalidReleaseDate(detail.to_string()),
        None => CardError::from(e),
    }
}
