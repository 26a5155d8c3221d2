use crate::args::Cli;
use crate::config::Config;
use crate::log::Log;
use crate::types::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use std::io;
use std::path::PathBuf;
use viewprint_printer::{DynPrinter, Format, PrintFlags, Printer};

/// Effective settings for one command run: config file, then CLI overrides.
pub struct HandlerContext {
    pub config_path: PathBuf,
    pub config: Config,
    pub log: Log,
    styled: bool,
}

impl HandlerContext {
    pub fn new(cli: &Cli, config_path: PathBuf, mut config: Config) -> Result<Self> {
        if let Some(format) = cli.format {
            config.output.format = format;
        }
        if let Some(level) = cli.level {
            config.output.level = level;
        }
        if let Some(level) = cli.log_level {
            config.output.log_level = level;
        }
        if cli.no_color {
            config.output.color = false;
        }
        config.validate()?;

        // ANSI codes would corrupt JSON and YAML documents.
        let styled = config.output.color
            && config.output.format == OutputFormat::Plain
            && io::stdout().is_terminal();
        let log = Log::new(config.output.log_level.into(), config.output.progress_width);

        Ok(Self {
            config_path,
            config,
            log,
            styled,
        })
    }

    pub fn format(&self) -> Format {
        self.config.output.format.into()
    }

    pub fn print_flags(&self) -> Result<PrintFlags> {
        self.config.print_flags(self.styled)
    }

    /// Stdout printer honoring the configured format, level and flags.
    pub fn printer(&self) -> Result<DynPrinter<io::Stdout>> {
        Ok(self.printer_with(self.print_flags()?))
    }

    pub fn printer_with(&self, flags: PrintFlags) -> DynPrinter<io::Stdout> {
        Printer::with_format(io::stdout(), self.format())
            .with_verbose_level(self.config.output.level.into())
            .with_flags(flags)
    }
}
