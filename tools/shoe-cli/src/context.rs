//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use shoe_card::config::CardConfig;
use shoe_card::{Catalog, ReleaseDate};

use crate::output::Output;

/// Config file names searched for, in order, from the working directory up.
pub const CONFIG_NAMES: [&str; 3] = ["shoe.toml", ".shoe.toml", "shoe.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// Card configuration.
    pub config: CardConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Instant release windows are evaluated at.
    pub now: DateTime<Utc>,
}

impl Context {
    /// Load context from an explicit config file or the nearest discovered one.
    pub fn load(config_path: Option<&str>, now: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                let config = CardConfig::load(&path)
                    .with_context(|| format!("Failed to load config file: {}", path.display()))?;
                (config, Some(path))
            }
            None => match Self::find_config(&cwd, &output) {
                Some((config, path)) => (config, Some(path)),
                None => (CardConfig::default(), None),
            },
        };

        let now = match now {
            Some(raw) => parse_now(raw)?,
            None => Utc::now(),
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            now,
        })
    }

    /// Find a config file in the directory tree.
    fn find_config(start: &Path, output: &Output) -> Option<(CardConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let candidate = current.join(name);
                if candidate.exists() {
                    match CardConfig::load(&candidate) {
                        Ok(config) => return Some((config, candidate)),
                        Err(e) => output.warn(&format!(
                            "Skipping unreadable config {}: {}",
                            candidate.display(),
                            e
                        )),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path against the working directory.
    pub fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    /// Read and parse a catalog feed.
    pub fn load_catalog(&self, path: &str) -> Result<Catalog> {
        let path = self.resolve(path);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        let catalog = Catalog::from_json(&content)
            .with_context(|| format!("Failed to parse catalog: {}", path.display()))?;
        tracing::info!(path = %path.display(), shoes = catalog.len(), "loaded catalog");
        Ok(catalog)
    }
}

/// Parse the `--now` override.
pub fn parse_now(raw: &str) -> Result<DateTime<Utc>> {
    let date: ReleaseDate = raw
        .parse()
        .with_context(|| format!("Invalid --now value: {}", raw))?;
    Ok(date.as_datetime())
}
