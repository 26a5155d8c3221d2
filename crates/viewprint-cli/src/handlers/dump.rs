use super::{HandlerContext, display_name, read_data};
use crate::types::{SwapArg, WidthArg};
use anyhow::{Context, Result};
use std::path::Path;
use viewprint_printer::Level;
use viewprint_var::ByteView;

pub struct DumpOptions {
    pub width: Option<WidthArg>,
    pub hex: bool,
    pub unsigned: bool,
    pub signed: bool,
    pub character: bool,
    pub swap: SwapArg,
    pub offset: usize,
    pub length: Option<usize>,
}

impl DumpOptions {
    /// Any column switch on the command line replaces the configured columns.
    fn columns_given(&self) -> bool {
        self.hex || self.unsigned || self.signed || self.character
    }
}

pub fn handle(ctx: &mut HandlerContext, file: &Path, options: DumpOptions) -> Result<()> {
    let mut data = read_data(file)?;
    let size = data.size();
    ctx.log
        .debug(format_args!("read {} byte(s) from {}", size, file.display()));

    let length = options
        .length
        .unwrap_or_else(|| size.saturating_sub(options.offset));
    let mut whole = data.view_mut();
    let mut window = whole
        .subview_mut(options.offset, length)
        .context("requested window does not fit the file")?;
    window.swap_byte_order(options.swap.into());
    let window = window.into_view();

    let mut flags = ctx.print_flags()?;
    if let Some(width) = options.width {
        flags.width = width.into();
    }
    if options.columns_given() {
        flags = flags.with_columns(
            options.hex,
            options.unsigned,
            options.signed,
            options.character,
        );
    }

    let tail = window.size() % flags.width.bytes();
    if tail != 0 {
        ctx.log.warning(format_args!(
            "ignoring {} trailing byte(s) that do not fill a {}-bit word",
            tail,
            flags.width.bits()
        ));
    }

    let mut printer = ctx.printer_with(flags);
    printer
        .open_object(Level::Info, &display_name(file))
        .key("size", size)
        .key("offset", options.offset)
        .key("length", window.size())
        .print_bytes("bytes", window.bytes())
        .close_object();
    printer.finish()?;
    Ok(())
}
