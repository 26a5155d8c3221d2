use super::{HandlerContext, display_name};
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use viewprint_printer::Level;

pub fn handle(ctx: &mut HandlerContext, file: &Path) -> Result<()> {
    let text = if file == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        text
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?
    };

    let document: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", display_name(file)))?;
    ctx.log
        .debug(format_args!("parsed {} byte(s) of JSON", text.len()));

    let mut printer = ctx.printer()?;
    printer.print_json_at(Level::Info, "", &document);
    printer.finish()?;
    Ok(())
}
