//! Diagnostics on stderr.
//!
//! Messages go through a plain [`Printer`] so they share the leveled
//! `debug: ...` / `warning: ...` layout of regular output, filtered by
//! `--log-level`.

use std::fmt;
use std::io;
use viewprint_printer::{Level, PlainPrinter, PrintFlags, Printer};

pub struct Log {
    printer: PlainPrinter<io::Stderr>,
}

impl Log {
    pub fn new(threshold: Level, progress_width: usize) -> Self {
        let flags = PrintFlags {
            progress_width,
            ..PrintFlags::default()
        };
        Self {
            printer: Printer::plain(io::stderr())
                .with_flags(flags)
                .with_verbose_level(threshold),
        }
    }

    pub fn debug(&mut self, message: impl fmt::Display) {
        self.printer.debug(message.to_string());
    }

    pub fn info(&mut self, message: impl fmt::Display) {
        self.printer.info(message.to_string());
    }

    pub fn warning(&mut self, message: impl fmt::Display) {
        self.printer.warning(message.to_string());
    }

    /// Progress bar on stderr, drawn only when `info` is enabled.
    pub fn progress(&mut self, done: usize, total: usize) {
        self.printer.update_progress(done, total);
    }
}
