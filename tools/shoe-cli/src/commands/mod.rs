//! CLI command implementations.

pub mod classify;
pub mod config;
pub mod render;

use clap::{Args, Subcommand};

/// Arguments for the classify command.
#[derive(Args)]
pub struct ClassifyArgs {
    /// Catalog feed (JSON).
    pub catalog: String,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Catalog feed (JSON).
    pub catalog: String,

    /// Wrap the cards in a standalone HTML document with styles.
    #[arg(long)]
    pub page: bool,

    /// Page title when rendering a document.
    #[arg(long, default_value = "Shoes")]
    pub title: String,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    pub out: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write a default shoe.toml in the current directory
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}
