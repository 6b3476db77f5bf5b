//! Card configuration, loaded from TOML or JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CardError;
use crate::item::DEFAULT_LINK_PREFIX;
use crate::money::Currency;
use crate::release::RecencyWindow;
use crate::render::CardRenderer;
use crate::theme::{Palette, Weights};

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CardConfig {
    /// Load from a file; `.json` is parsed as JSON, anything else as TOML.
    pub fn load(path: &Path) -> Result<Self, CardError> {
        let content = std::fs::read_to_string(path)?;
        if is_json(path) {
            Ok(serde_json::from_str(&content)?)
        } else {
            Self::from_toml(&content)
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, CardError> {
        Ok(toml::from_str(content)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), CardError> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Catalog currency.
    pub fn currency(&self) -> Result<Currency, CardError> {
        self.catalog.currency.parse()
    }

    pub fn window(&self) -> RecencyWindow {
        RecencyWindow::months(self.display.recent_window_months)
    }

    /// Renderer with the configured theme and link prefix.
    pub fn renderer(&self) -> CardRenderer {
        CardRenderer::new(self.theme.palette.clone(), self.theme.weights)
            .with_link_prefix(self.display.link_prefix.clone())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}

/// Catalog settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// ISO code the catalog prices are expressed in.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

fn default_currency() -> String {
    Currency::USD.code().to_string()
}

/// Card display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Calendar months a release counts as new.
    #[serde(default = "default_window_months")]
    pub recent_window_months: u32,

    /// Path prefix for detail links.
    #[serde(default = "default_link_prefix")]
    pub link_prefix: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            recent_window_months: default_window_months(),
            link_prefix: default_link_prefix(),
        }
    }
}

fn default_window_months() -> u32 {
    RecencyWindow::default().months
}

fn default_link_prefix() -> String {
    DEFAULT_LINK_PREFIX.to_string()
}

/// Theme overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub palette: Palette,

    #[serde(default)]
    pub weights: Weights,
}

/// Diagnostic logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty`, `compact` or `json`.
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}
