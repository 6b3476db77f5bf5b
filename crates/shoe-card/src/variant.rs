//! Display variant selection and the styling each variant implies.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::item::ShoeDisplayItem;
use crate::money::Money;
use crate::release::{RecencyWindow, ReleaseDate};

/// Visual treatment of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayVariant {
    #[default]
    Default,
    OnSale,
    NewRelease,
}

impl DisplayVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::OnSale => "on-sale",
            Self::NewRelease => "new-release",
        }
    }

    /// Pick the variant for a shoe. First match wins:
    ///
    /// 1. any sale price, zero included, gives `OnSale`
    /// 2. a release inside `window` gives `NewRelease`
    /// 3. otherwise `Default`
    pub fn classify(
        sale_price: Option<&Money>,
        release_date: &ReleaseDate,
        window: &RecencyWindow,
        now: DateTime<Utc>,
    ) -> Self {
        if sale_price.is_some() {
            Self::OnSale
        } else if window.is_recent(release_date, now) {
            Self::NewRelease
        } else {
            Self::Default
        }
    }

    /// Classify a display item and record the outcome at debug level.
    pub fn for_item(item: &ShoeDisplayItem, window: &RecencyWindow, now: DateTime<Utc>) -> Self {
        let variant = Self::classify(item.sale_price.as_ref(), &item.release_date, window, now);
        tracing::debug!(slug = %item.slug, variant = %variant, "classified shoe");
        variant
    }

    pub fn style(&self) -> VariantStyle {
        VariantStyle::for_variant(*self)
    }
}

impl fmt::Display for DisplayVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which accent colour a badge uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagTone {
    Primary,
    Secondary,
}

/// Corner badge shown on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Flag {
    pub text: &'static str,
    pub tone: FlagTone,
}

/// Presentation attributes derived from a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariantStyle {
    pub flag: Option<Flag>,
    /// Base price is struck through.
    pub strike_price: bool,
    /// Sale price row is visible.
    pub show_sale_price: bool,
}

impl VariantStyle {
    pub fn for_variant(variant: DisplayVariant) -> Self {
        match variant {
            DisplayVariant::OnSale => Self {
                flag: Some(Flag {
                    text: "Sale!",
                    tone: FlagTone::Primary,
                }),
                strike_price: true,
                show_sale_price: true,
            },
            DisplayVariant::NewRelease => Self {
                flag: Some(Flag {
                    text: "Just Released!",
                    tone: FlagTone::Secondary,
                }),
                strike_price: false,
                show_sale_price: false,
            },
            DisplayVariant::Default => Self {
                flag: None,
                strike_price: false,
                show_sale_price: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap()
    }

    fn days_ago(days: i64) -> ReleaseDate {
        (now() - Duration::days(days)).into()
    }

    #[test]
    fn test_sale_wins_over_new_release() {
        let sale = Money::from_decimal(119.99, Currency::USD);
        let window = RecencyWindow::default();
        assert_eq!(
            DisplayVariant::classify(Some(&sale), &days_ago(3), &window, now()),
            DisplayVariant::OnSale
        );
        assert_eq!(
            DisplayVariant::classify(Some(&sale), &days_ago(2000), &window, now()),
            DisplayVariant::OnSale
        );
    }

    #[test]
    fn test_zero_sale_price_counts_as_sale() {
        let zero = Money::zero(Currency::USD);
        assert_eq!(
            DisplayVariant::classify(Some(&zero), &days_ago(400), &RecencyWindow::default(), now()),
            DisplayVariant::OnSale
        );
    }

    #[test]
    fn test_recent_and_old_releases() {
        let window = RecencyWindow::default();
        assert_eq!(
            DisplayVariant::classify(None, &days_ago(10), &window, now()),
            DisplayVariant::NewRelease
        );
        assert_eq!(
            DisplayVariant::classify(None, &days_ago(730), &window, now()),
            DisplayVariant::Default
        );
    }

    #[test]
    fn test_wider_window() {
        let window = RecencyWindow::months(3);
        assert_eq!(
            DisplayVariant::classify(None, &days_ago(60), &window, now()),
            DisplayVariant::NewRelease
        );
    }

    #[test]
    fn test_style_table() {
        let sale = DisplayVariant::OnSale.style();
        assert_eq!(sale.flag.map(|f| f.text), Some("Sale!"));
        assert_eq!(sale.flag.map(|f| f.tone), Some(FlagTone::Primary));
        assert!(sale.strike_price && sale.show_sale_price);

        let new = DisplayVariant::NewRelease.style();
        assert_eq!(new.flag.map(|f| f.text), Some("Just Released!"));
        assert_eq!(new.flag.map(|f| f.tone), Some(FlagTone::Secondary));
        assert!(!new.strike_price && !new.show_sale_price);

        let plain = DisplayVariant::Default.style();
        assert_eq!(plain.flag, None);
        assert!(!plain.strike_price && !plain.show_sale_price);
    }

    #[test]
    fn test_variant_names() {
        assert_eq!(DisplayVariant::OnSale.to_string(), "on-sale");
        assert_eq!(
            serde_json::to_string(&DisplayVariant::NewRelease).unwrap(),
            "\"new-release\""
        );
    }
}
