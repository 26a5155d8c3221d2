mod context;

pub mod compare;
pub mod config;
pub mod dump;
pub mod json;

pub use context::HandlerContext;

use anyhow::{Context, Result};
use std::path::Path;
use viewprint_var::Data;

pub(crate) fn read_data(path: &Path) -> Result<Data> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(Data::from_vec(bytes))
}

/// File name used as the top-level key for per-file output.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
