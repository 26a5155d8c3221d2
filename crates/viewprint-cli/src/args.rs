use crate::types::{LogLevel, OutputFormat, SwapArg, WidthArg};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "viewprint")]
#[command(about = "Dump, compare and re-render data as plain text, JSON or YAML", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file [default: ~/.viewprint/config.toml]
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Output grammar [default: from config, else plain]
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Verbosity threshold for command output [default: from config, else info]
    #[arg(long, global = true)]
    pub level: Option<LogLevel>,

    /// Verbosity threshold for diagnostics on stderr [default: from config, else warning]
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the bytes of a file column by column
    Dump {
        file: PathBuf,

        #[arg(long)]
        width: Option<WidthArg>,

        #[arg(long)]
        hex: bool,

        #[arg(long)]
        unsigned: bool,

        #[arg(long)]
        signed: bool,

        #[arg(long = "char")]
        character: bool,

        /// Reverse byte order inside each unit before printing
        #[arg(long, default_value = "byte")]
        swap: SwapArg,

        #[arg(long, default_value = "0")]
        offset: usize,

        #[arg(long)]
        length: Option<usize>,
    },

    /// Re-render a JSON document (`-` reads stdin)
    Json { file: PathBuf },

    /// Compare two files byte by byte
    Compare { left: PathBuf, right: PathBuf },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write a default config file
    Init {
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}
