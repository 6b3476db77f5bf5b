//! Config command - show or create the configuration file.

use anyhow::{bail, Context as _, Result};
use shoe_card::config::CardConfig;

use super::{ConfigArgs, ConfigCommand};
use crate::context::{Context, CONFIG_NAMES};

pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Init { force } => init(ctx, force),
    }
}

fn show(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("source", &path.display().to_string()),
        None => ctx.output.kv("source", "defaults"),
    }
    ctx.output.kv("currency", &ctx.config.catalog.currency);
    ctx.output.kv(
        "recent window",
        &format!("{} month(s)", ctx.config.display.recent_window_months),
    );
    ctx.output.kv("link prefix", &ctx.config.display.link_prefix);
    ctx.output.kv("primary", &ctx.config.theme.palette.primary);
    ctx.output.kv("secondary", &ctx.config.theme.palette.secondary);
    ctx.output.kv(
        "logging",
        &format!("{} ({})", ctx.config.logging.level, ctx.config.logging.format),
    );
    Ok(())
}

fn init(ctx: &Context, force: bool) -> Result<()> {
    let path = ctx.cwd.join(CONFIG_NAMES[0]);
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    CardConfig::default()
        .save(&path)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    ctx.output.success(&format!("Wrote {}", path.display()));
    ctx.output.info("Edit [display] recent_window_months or [theme.palette] to customise cards");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::scratch_dir;
    use crate::output::Output;
    use chrono::Utc;

    fn context_in(dir: &std::path::Path) -> Context {
        Context {
            config: CardConfig::default(),
            config_path: None,
            output: Output::new(false, true),
            cwd: dir.to_path_buf(),
            now: Utc::now(),
        }
    }

    #[test]
    fn test_init_writes_default_config() {
        let dir = scratch_dir("init");
        init(&context_in(&dir), false).unwrap();

        let written = CardConfig::load(&dir.join("shoe.toml")).unwrap();
        assert_eq!(written, CardConfig::default());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = scratch_dir("init-force");
        let path = dir.join("shoe.toml");
        std::fs::write(&path, "[display]\nlink_prefix = \"/mine\"\n").unwrap();
        let ctx = context_in(&dir);

        let err = init(&ctx, false).unwrap_err();
        assert!(err.to_string().contains("already exists"), "{err}");
        assert_eq!(CardConfig::load(&path).unwrap().display.link_prefix, "/mine");

        init(&ctx, true).unwrap();
        assert_eq!(CardConfig::load(&path).unwrap(), CardConfig::default());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
