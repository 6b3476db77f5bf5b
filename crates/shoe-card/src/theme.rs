//! Storefront colours and font weights used by the card.

use serde::{Deserialize, Serialize};

use crate::variant::FlagTone;

/// Colour palette. Values are CSS colour strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub white: String,
    pub gray_700: String,
    pub gray_900: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "hsl(340deg 65% 47%)".to_string(),
            secondary: "hsl(240deg 60% 63%)".to_string(),
            white: "hsl(0deg 0% 100%)".to_string(),
            gray_700: "hsl(220deg 5% 40%)".to_string(),
            gray_900: "hsl(220deg 3% 20%)".to_string(),
        }
    }
}

impl Palette {
    /// Badge background for a tone.
    pub fn flag_color(&self, tone: FlagTone) -> &str {
        match tone {
            FlagTone::Primary => &self.primary,
            FlagTone::Secondary => &self.secondary,
        }
    }
}

/// Font weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub normal: u16,
    pub medium: u16,
    pub bold: u16,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            normal: 500,
            medium: 600,
            bold: 800,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_colors_follow_tone() {
        let palette = Palette::default();
        assert_eq!(palette.flag_color(FlagTone::Primary), palette.primary);
        assert_eq!(palette.flag_color(FlagTone::Secondary), palette.secondary);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let palette: Palette = serde_json::from_str(r##"{"primary": "#c5295d"}"##).unwrap();
        assert_eq!(palette.primary, "#c5295d");
        assert_eq!(palette.secondary, Palette::default().secondary);
    }
}
