//! Shoe CLI - classify and render shoe catalog cards.
//!
//! Commands:
//! - `shoe classify` - Show the display variant of every shoe in a catalog
//! - `shoe render` - Render catalog cards as HTML
//! - `shoe config` - Manage configuration

mod commands;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ClassifyArgs, ConfigArgs, RenderArgs};

/// Shoe CLI - Classify and render shoe catalog cards
#[derive(Parser)]
#[command(name = "shoe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Evaluate release windows at this instant (YYYY-MM-DD or RFC 3339)
    #[arg(long, global = true)]
    now: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the display variant of every shoe in a catalog
    Classify(ClassifyArgs),

    /// Render catalog cards as HTML
    Render(RenderArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = context::Context::load(cli.config.as_deref(), cli.now.as_deref(), output)?;
    logging::init(&ctx.config.logging, cli.verbose);

    let result = match cli.command {
        Commands::Classify(args) => commands::classify::run(args, &ctx),
        Commands::Render(args) => commands::render::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
