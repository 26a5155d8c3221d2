use super::HandlerContext;
use crate::config::Config;
use anyhow::{Context, Result, bail};
use viewprint_printer::Level;

pub fn init(ctx: &mut HandlerContext, force: bool) -> Result<()> {
    let path = ctx.config_path.clone();
    if path.exists() && !force {
        bail!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default()
        .save_to(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    ctx.log.info(format_args!("wrote default config to {}", path.display()));

    let mut printer = ctx.printer()?;
    printer.print(Level::Info, "created", path.display().to_string());
    printer.finish()?;
    Ok(())
}

pub fn show(ctx: &mut HandlerContext) -> Result<()> {
    let effective = serde_json::to_value(&ctx.config)?;

    let mut printer = ctx.printer()?;
    printer
        .print(Level::Info, "path", ctx.config_path.display().to_string())
        .print(Level::Info, "exists", ctx.config_path.exists())
        .print_json_at(Level::Info, "effective", &effective);
    printer.finish()?;
    Ok(())
}
