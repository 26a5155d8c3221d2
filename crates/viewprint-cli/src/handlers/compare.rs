use super::{HandlerContext, read_data};
use crate::log::Log;
use anyhow::Result;
use std::path::Path;
use viewprint_printer::Level;
use viewprint_var::{ByteView, View};

const CHUNK: usize = 64 * 1024;

pub fn handle(ctx: &mut HandlerContext, left_path: &Path, right_path: &Path) -> Result<()> {
    let left_data = read_data(left_path)?;
    let right_data = read_data(right_path)?;
    let (left, right) = (left_data.view(), right_data.view());

    let first = first_difference(&mut ctx.log, left, right)?;
    let equal = left == right;
    if !equal {
        ctx.log.info(format_args!(
            "{} and {} differ",
            left_path.display(),
            right_path.display()
        ));
    }

    let mut printer = ctx.printer()?;
    printer
        .open_object(Level::Info, "compare")
        .key("left", left_path.display().to_string())
        .key("right", right_path.display().to_string())
        .key("left_size", left.size())
        .key("right_size", right.size())
        .key("equal", equal)
        .key("first_difference", first)
        .close_object();
    printer.finish()?;
    Ok(())
}

/// Walks the common prefix chunk by chunk; a length mismatch differs at the
/// end of the shorter view.
fn first_difference(log: &mut Log, left: View<'_>, right: View<'_>) -> Result<Option<usize>> {
    let common = left.size().min(right.size());
    for start in (0..common).step_by(CHUNK) {
        let len = CHUNK.min(common - start);
        let chunk = left.subview(start, len)?;
        let other = right.subview(start, len)?;
        log.progress(start + len, common);
        if let Some(offset) = chunk.first_difference(&other) {
            if start + len < common {
                log.progress(common, common);
            }
            return Ok(Some(start + offset));
        }
    }
    Ok((left.size() != right.size()).then_some(common))
}
