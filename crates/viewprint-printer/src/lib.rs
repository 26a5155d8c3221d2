//! Streaming structured printer.
//!
//! Callers describe output as a sequence of events: open a container, print a
//! key/value entry, close the container. A [`Printer`] filters the events by
//! verbosity and hands the survivors to a [`Syntax`] that renders them as
//! indented plain text, JSON or YAML.
//!
//! ```
//! use viewprint_printer::{Level, Printer};
//!
//! let mut printer = Printer::yaml(Vec::new());
//! printer
//!     .key("name", "widget")
//!     .open_object(Level::Info, "meta")
//!     .key("size", 4)
//!     .print(Level::Debug, "hidden", true)
//!     .close_object();
//!
//! let out = String::from_utf8(printer.finish()?).unwrap();
//! assert_eq!(out, "- name: widget\n- meta:\n   size: 4\n");
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod container;
pub mod dump;
pub mod error;
pub mod flags;
pub mod level;
pub mod printer;
pub mod syntax;
pub mod value;

pub use container::{ContainerKind, Frame};
pub use error::{Error, Result};
pub use flags::{Color, PrintFlags, WordWidth};
pub use level::Level;
pub use printer::{DynPrinter, JsonPrinter, PlainPrinter, Printer, YamlPrinter};
pub use syntax::{Format, JsonSyntax, PlainSyntax, Syntax, YamlSyntax};
pub use value::Value;
