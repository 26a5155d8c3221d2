//! Textual grammars a [`Printer`](crate::Printer) can emit.
//!
//! A syntax only writes glyphs. The printer decides visibility, keeps the
//! container stack and resolves keys before calling in, so `cx` always
//! describes the container the event lands in.

mod json;
mod plain;
mod yaml;

pub use json::JsonSyntax;
pub use plain::PlainSyntax;
pub use yaml::YamlSyntax;

use crate::container::{ContainerKind, Context, Frame};
use crate::error::Error;
use crate::value::Value;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

pub trait Syntax {
    /// Opening marker of a container about to be pushed inside `cx`.
    fn open(
        &mut self,
        out: &mut dyn Write,
        cx: &Context<'_>,
        key: Option<&str>,
        kind: ContainerKind,
    ) -> io::Result<()>;

    /// Closing marker of `closed`, which has just been popped off `cx`.
    fn close(&mut self, out: &mut dyn Write, cx: &Context<'_>, closed: &Frame) -> io::Result<()>;

    fn entry(
        &mut self,
        out: &mut dyn Write,
        cx: &Context<'_>,
        key: Option<&str>,
        value: &Value<'_>,
    ) -> io::Result<()>;

    /// Starts a line that later writes extend in place.
    ///
    /// Returns `false` when the grammar has no room for free-form output.
    fn begin_inline(&mut self, out: &mut dyn Write, cx: &Context<'_>, key: &str) -> io::Result<bool> {
        let _ = (out, cx, key);
        Ok(false)
    }

    fn end_inline(&mut self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)
    }

    /// Trailer written once all containers are closed.
    fn finish(&mut self, out: &mut dyn Write, cx: &Context<'_>) -> io::Result<()> {
        let _ = (out, cx);
        Ok(())
    }
}

impl<S: Syntax + ?Sized> Syntax for Box<S> {
    fn open(
        &mut self,
        out: &mut dyn Write,
        cx: &Context<'_>,
        key: Option<&str>,
        kind: ContainerKind,
    ) -> io::Result<()> {
        (**self).open(out, cx, key, kind)
    }

    fn close(&mut self, out: &mut dyn Write, cx: &Context<'_>, closed: &Frame) -> io::Result<()> {
        (**self).close(out, cx, closed)
    }

    fn entry(
        &mut self,
        out: &mut dyn Write,
        cx: &Context<'_>,
        key: Option<&str>,
        value: &Value<'_>,
    ) -> io::Result<()> {
        (**self).entry(out, cx, key, value)
    }

    fn begin_inline(&mut self, out: &mut dyn Write, cx: &Context<'_>, key: &str) -> io::Result<bool> {
        (**self).begin_inline(out, cx, key)
    }

    fn end_inline(&mut self, out: &mut dyn Write) -> io::Result<()> {
        (**self).end_inline(out)
    }

    fn finish(&mut self, out: &mut dyn Write, cx: &Context<'_>) -> io::Result<()> {
        (**self).finish(out, cx)
    }
}

/// Output grammar selectable at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    #[default]
    Plain,
    Json,
    Yaml,
}

impl Format {
    pub fn syntax(self) -> Box<dyn Syntax> {
        match self {
            Format::Plain => Box::new(PlainSyntax),
            Format::Json => Box::new(JsonSyntax::default()),
            Format::Yaml => Box::new(YamlSyntax),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Format::Plain => "plain",
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(Format::Plain),
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// Writes `levels` repetitions of `unit`.
pub(crate) fn indent(out: &mut dyn Write, unit: &str, levels: usize) -> io::Result<()> {
    for _ in 0..levels {
        out.write_all(unit.as_bytes())?;
    }
    Ok(())
}

/// Number text shared by JSON and YAML; `None` for non-finite floats.
pub(crate) fn number_text(value: &Value<'_>) -> Option<String> {
    match value {
        Value::Int(n) => Some(n.to_string()),
        Value::UInt(n) => Some(n.to_string()),
        Value::Float(x) => serde_json::Number::from_f64(*x).map(|n| n.to_string()),
        _ => None,
    }
}
