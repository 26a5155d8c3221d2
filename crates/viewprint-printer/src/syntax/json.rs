use super::{Syntax, indent, number_text};
use crate::container::{ContainerKind, Context, Frame};
use crate::value::Value;
use std::io::{self, Write};

const INDENT: &str = "  ";

/// Pretty-printed JSON. The root array is opened on first output and closed
/// by [`Syntax::finish`].
///
/// A keyed entry or container inside an array is wrapped in a single-member
/// object so the key survives and the document stays valid.
#[derive(Debug, Clone, Default)]
pub struct JsonSyntax {
    started: bool,
}

impl JsonSyntax {
    fn start(&mut self, out: &mut dyn Write) -> io::Result<()> {
        if !self.started {
            out.write_all(b"[")?;
            self.started = true;
        }
        Ok(())
    }

    /// Comma after a previous sibling, then a fresh indented line.
    fn separate(&mut self, out: &mut dyn Write, cx: &Context<'_>) -> io::Result<()> {
        self.start(out)?;
        if cx.has_siblings() {
            out.write_all(b",")?;
        }
        out.write_all(b"\n")?;
        indent(out, INDENT, cx.depth())
    }

    /// Writes the member name; returns whether a wrapping `{` was opened.
    fn member(out: &mut dyn Write, cx: &Context<'_>, key: Option<&str>) -> io::Result<bool> {
        match (cx.in_array(), key) {
            (true, None) => Ok(false),
            (true, Some(key)) => {
                out.write_all(b"{")?;
                write_key(out, key)?;
                Ok(true)
            }
            (false, key) => {
                write_key(out, key.unwrap_or_default())?;
                Ok(false)
            }
        }
    }
}

fn write_key(out: &mut dyn Write, key: &str) -> io::Result<()> {
    serde_json::to_writer(&mut *out, key)?;
    out.write_all(b": ")
}

fn write_value(out: &mut dyn Write, value: &Value<'_>) -> io::Result<()> {
    match value {
        Value::Null => out.write_all(b"null"),
        Value::Bool(b) => write!(out, "{b}"),
        Value::Text(text) => Ok(serde_json::to_writer(&mut *out, &**text)?),
        number => match number_text(number) {
            Some(text) => out.write_all(text.as_bytes()),
            None => out.write_all(b"null"),
        },
    }
}

fn glyph(kind: ContainerKind, opening: bool) -> &'static [u8] {
    match (kind, opening) {
        (ContainerKind::Object, true) => b"{",
        (ContainerKind::Object, false) => b"}",
        (ContainerKind::Array, true) => b"[",
        (ContainerKind::Array, false) => b"]",
    }
}

impl Syntax for JsonSyntax {
    fn open(
        &mut self,
        out: &mut dyn Write,
        cx: &Context<'_>,
        key: Option<&str>,
        kind: ContainerKind,
    ) -> io::Result<()> {
        self.separate(out, cx)?;
        Self::member(out, cx, key)?;
        out.write_all(glyph(kind, true))
    }

    /// Arrays and objects share this path; only the glyph differs.
    fn close(&mut self, out: &mut dyn Write, cx: &Context<'_>, closed: &Frame) -> io::Result<()> {
        if closed.children > 0 {
            out.write_all(b"\n")?;
            indent(out, INDENT, cx.depth())?;
        }
        out.write_all(glyph(closed.kind, false))?;
        if closed.keyed && cx.in_array() {
            out.write_all(b"}")?;
        }
        Ok(())
    }

    fn entry(
        &mut self,
        out: &mut dyn Write,
        cx: &Context<'_>,
        key: Option<&str>,
        value: &Value<'_>,
    ) -> io::Result<()> {
        self.separate(out, cx)?;
        let wrapped = Self::member(out, cx, key)?;
        write_value(out, value)?;
        if wrapped {
            out.write_all(b"}")?;
        }
        Ok(())
    }

    fn finish(&mut self, out: &mut dyn Write, cx: &Context<'_>) -> io::Result<()> {
        self.start(out)?;
        if cx.has_siblings() {
            out.write_all(b"\n")?;
        }
        out.write_all(b"]\n")
    }
}
