use super::{Syntax, indent, number_text};
use crate::container::{ContainerKind, Context, Frame};
use crate::value::Value;
use std::borrow::Cow;
use std::fmt::Write as _;
use std::io::{self, Write};

const INDENT: &str = "   ";

/// Block-style YAML. The root array is the document's top-level sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlSyntax;

impl YamlSyntax {
    fn line_start(out: &mut dyn Write, cx: &Context<'_>) -> io::Result<()> {
        indent(out, INDENT, cx.depth() - 1)
    }
}

impl Syntax for YamlSyntax {
    fn open(
        &mut self,
        out: &mut dyn Write,
        cx: &Context<'_>,
        key: Option<&str>,
        _kind: ContainerKind,
    ) -> io::Result<()> {
        Self::line_start(out, cx)?;
        match (cx.in_array(), key) {
            (true, Some(key)) => writeln!(out, "- {}:", scalar(key)),
            (true, None) => writeln!(out, "-"),
            (false, key) => writeln!(out, "{}:", scalar(key.unwrap_or_default())),
        }
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
            write!(out, "{}: ", scalar(key))?;
        }
        writeln!(out, "{}", value_text(value))
    }

    fn begin_inline(&mut self, out: &mut dyn Write, cx: &Context<'_>, key: &str) -> io::Result<bool> {
        Self::line_start(out, cx)?;
        if cx.in_array() {
            out.write_all(b"- ")?;
        }
        write!(out, "{}: \"", scalar(key))?;
        Ok(true)
    }

    fn end_inline(&mut self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "\"")
    }
}

fn value_text<'v>(value: &'v Value<'_>) -> Cow<'v, str> {
    match value {
        Value::Null => Cow::Borrowed("null"),
        Value::Bool(true) => Cow::Borrowed("true"),
        Value::Bool(false) => Cow::Borrowed("false"),
        Value::Float(x) if x.is_nan() => Cow::Borrowed(".nan"),
        Value::Float(x) if x.is_infinite() => {
            Cow::Borrowed(if *x > 0.0 { ".inf" } else { "-.inf" })
        }
        Value::Text(text) => scalar(text),
        number => Cow::Owned(number_text(number).unwrap_or_default()),
    }
}

/// Plain scalar when it reads back as the same string, double-quoted otherwise.
fn scalar(text: &str) -> Cow<'_, str> {
    if needs_quotes(text) {
        Cow::Owned(quote(text))
    } else {
        Cow::Borrowed(text)
    }
}

fn needs_quotes(text: &str) -> bool {
    let Some(first) = text.chars().next() else {
        return true;
    };
    if first.is_whitespace() || text.ends_with(char::is_whitespace) {
        return true;
    }
    if "-?:,[]{}#&*!|>'\"%@`".contains(first) {
        return true;
    }
    if text.contains(": ") || text.contains(" #") || text.ends_with(':') {
        return true;
    }
    if text.chars().any(is_special) {
        return true;
    }
    let lower = text.to_ascii_lowercase();
    if matches!(
        lower.as_str(),
        "true" | "false" | "yes" | "no" | "on" | "off" | "y" | "n" | "null" | "~"
    ) {
        return true;
    }
    looks_numeric(&lower)
}

/// Digits, signs and separators that some YAML resolver could read as a number.
fn looks_numeric(lower: &str) -> bool {
    let starts_like_number = lower.starts_with(|c: char| c.is_ascii_digit() || c == '+' || c == '.');
    starts_like_number
        && lower
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | ':' | '+' | '-'))
}

fn is_special(c: char) -> bool {
    c.is_control() || matches!(c, '\u{2028}' | '\u{2029}' | '\u{feff}' | '\u{fffe}' | '\u{ffff}')
}

fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if is_special(c) => {
                let _ = write!(out, "\\u{:04X}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
