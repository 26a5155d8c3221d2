use super::{Syntax, indent};
use crate::container::{ContainerKind, Context, Frame};
use crate::flags::PrintFlags;
use crate::value::Value;
use owo_colors::OwoColorize;
use std::io::{self, Write};

const INDENT: &str = "  ";

/// Indented `key: value` lines with `- ` bullets inside arrays.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainSyntax;

impl PlainSyntax {
    fn line_start(out: &mut dyn Write, cx: &Context<'_>) -> io::Result<()> {
        indent(out, INDENT, cx.depth() - 1)
    }
}

fn styled_key(key: &str, flags: &PrintFlags, container: bool) -> String {
    let mut text = key.to_string();
    if let Some(color) = flags.key_color {
        text = text.color(color.ansi()).to_string();
    }
    if container && flags.bold_objects {
        text = text.bold().to_string();
    }
    text
}

impl Syntax for PlainSyntax {
    fn open(
        &mut self,
        out: &mut dyn Write,
        cx: &Context<'_>,
        key: Option<&str>,
        _kind: ContainerKind,
    ) -> io::Result<()> {
        Self::line_start(out, cx)?;
        if cx.in_array() {
            out.write_all(b"-")?;
            if key.is_some() {
                out.write_all(b" ")?;
            }
        }
        if let Some(key) = key {
            write!(out, "{}:", styled_key(key, cx.flags, true))?;
        }
        writeln!(out)
    }

    fn close(&mut self, _out: &mut dyn Write, _cx: &Context<'_>, _closed: &Frame) -> io::Result<()> {
        Ok(())
    }

    fn entry(
        &mut self,
        out: &mut dyn Write,
        cx: &Context<'_>,
        key: Option<&str>,
        value: &Value<'_>,
    ) -> io::Result<()> {
        Self::line_start(out, cx)?;
        if cx.in_array() {
            out.write_all(b"- ")?;
        }
        if let Some(key) = key {
            write!(out, "{}: ", styled_key(key, cx.flags, false))?;
        }
        writeln!(out, "{value}")
    }

    fn begin_inline(&mut self, out: &mut dyn Write, cx: &Context<'_>, key: &str) -> io::Result<bool> {
        Self::line_start(out, cx)?;
        if cx.in_array() {
            out.write_all(b"- ")?;
        }
        write!(out, "{}: ", styled_key(key, cx.flags, false))?;
        Ok(true)
    }
}
