use crate::types::{LogLevel, OutputFormat};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use viewprint_printer::{Color, PrintFlags, WordWidth};

/// Output settings shared by every command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub level: LogLevel,
    /// Threshold for diagnostics written to stderr
    pub log_level: LogLevel,
    /// Colors are only used when stdout is a terminal
    pub color: bool,
    pub bold_objects: bool,
    pub key_color: Option<String>,
    pub progress_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            level: LogLevel::Info,
            log_level: LogLevel::Warning,
            color: true,
            bold_objects: true,
            key_color: Some("light blue".to_string()),
            progress_width: 50,
        }
    }
}

/// Default columns for `dump`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DumpConfig {
    /// Element width in bits: 8, 16 or 32
    pub width: u32,
    pub hex: bool,
    pub unsigned: bool,
    pub signed: bool,
    pub character: bool,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            width: 8,
            hex: true,
            unsigned: false,
            signed: false,
            character: false,
        }
    }
}

/// Main configuration for viewprint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub dump: DumpConfig,
}

impl Config {
    /// Load config from a specific path; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a specific path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config file path (~/.viewprint/config.toml)
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("could not determine home directory")?;
        Ok(home.join(".viewprint").join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        self.word_width()?;
        self.key_color()?;
        Ok(())
    }

    pub fn word_width(&self) -> Result<WordWidth> {
        WordWidth::from_bits(self.dump.width).context("invalid dump.width")
    }

    pub fn key_color(&self) -> Result<Option<Color>> {
        self.output
            .key_color
            .as_deref()
            .map(str::parse::<Color>)
            .transpose()
            .context("invalid output.key_color")
    }

    /// Printer flags for this config; styling only when `styled` is set.
    pub fn print_flags(&self, styled: bool) -> Result<PrintFlags> {
        Ok(PrintFlags {
            width: self.word_width()?,
            hex: self.dump.hex,
            unsigned: self.dump.unsigned,
            signed: self.dump.signed,
            character: self.dump.character,
            bold_objects: styled && self.output.bold_objects,
            key_color: if styled { self.key_color()? } else { None },
            progress_width: self.output.progress_width,
        })
    }
}
