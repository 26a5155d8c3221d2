use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use viewprint_printer::{Format, Level, WordWidth};
use viewprint_var::SwapBy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Plain => Format::Plain,
            OutputFormat::Json => Format::Json,
            OutputFormat::Yaml => Format::Yaml,
        }
    }
}

/// Verbosity as accepted on the command line and in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Message,
    Warning,
    Error,
    Fatal,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Level::Debug,
            LogLevel::Info => Level::Info,
            LogLevel::Message => Level::Message,
            LogLevel::Warning => Level::Warning,
            LogLevel::Error => Level::Error,
            LogLevel::Fatal => Level::Fatal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WidthArg {
    #[value(name = "8")]
    Bits8,
    #[value(name = "16")]
    Bits16,
    #[value(name = "32")]
    Bits32,
}

impl From<WidthArg> for WordWidth {
    fn from(width: WidthArg) -> Self {
        match width {
            WidthArg::Bits8 => WordWidth::Bits8,
            WidthArg::Bits16 => WordWidth::Bits16,
            WidthArg::Bits32 => WordWidth::Bits32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum SwapArg {
    #[default]
    Byte,
    HalfWord,
    Word,
}

impl fmt::Display for SwapArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapArg::Byte => write!(f, "byte"),
            SwapArg::HalfWord => write!(f, "half-word"),
            SwapArg::Word => write!(f, "word"),
        }
    }
}

impl From<SwapArg> for SwapBy {
    fn from(swap: SwapArg) -> Self {
        match swap {
            SwapArg::Byte => SwapBy::Byte,
            SwapArg::HalfWord => SwapBy::HalfWord,
            SwapArg::Word => SwapBy::Word,
        }
    }
}
