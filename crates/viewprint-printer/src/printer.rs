use crate::container::{ContainerKind, ContainerStack, Context, Frame};
use crate::dump;
use crate::flags::PrintFlags;
use crate::level::Level;
use crate::syntax::{Format, JsonSyntax, PlainSyntax, Syntax, YamlSyntax};
use crate::value::Value;
use std::borrow::Cow;
use std::io::{self, Write};

pub type PlainPrinter<W> = Printer<W, PlainSyntax>;
pub type JsonPrinter<W> = Printer<W, JsonSyntax>;
pub type YamlPrinter<W> = Printer<W, YamlSyntax>;
/// Printer whose grammar is picked at run time.
pub type DynPrinter<W> = Printer<W, Box<dyn Syntax>>;

/// Streaming structured printer.
///
/// Output is produced in call order as events arrive. The printer owns the
/// container stack and all visibility decisions; `S` only renders glyphs.
///
/// Something at `level` is printed when `level` passes the threshold and every
/// open container was printed and opened at a level that passes it too, so a
/// quiet container silences everything inside it. Hidden containers are still
/// pushed so closes stay balanced.
///
/// Write errors do not interrupt a chain of calls. The first one is kept and
/// reported by [`error`](Self::error) and [`finish`](Self::finish).
pub struct Printer<W: Write, S: Syntax> {
    out: W,
    syntax: S,
    stack: ContainerStack,
    flags: PrintFlags,
    threshold: Level,
    progress: usize,
    error: Option<io::Error>,
}

impl<W: Write> Printer<W, PlainSyntax> {
    pub fn plain(out: W) -> Self {
        Printer::new(out, PlainSyntax)
    }
}

impl<W: Write> Printer<W, JsonSyntax> {
    pub fn json(out: W) -> Self {
        Printer::new(out, JsonSyntax::default())
    }
}

impl<W: Write> Printer<W, YamlSyntax> {
    pub fn yaml(out: W) -> Self {
        Printer::new(out, YamlSyntax)
    }
}

impl<W: Write> Printer<W, Box<dyn Syntax>> {
    pub fn with_format(out: W, format: Format) -> Self {
        Printer::new(out, format.syntax())
    }
}

impl<W: Write, S: Syntax> Printer<W, S> {
    pub fn new(out: W, syntax: S) -> Self {
        Self {
            out,
            syntax,
            stack: ContainerStack::new(),
            flags: PrintFlags::default(),
            threshold: Level::default(),
            progress: 0,
            error: None,
        }
    }

    pub fn with_flags(mut self, flags: PrintFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_verbose_level(mut self, threshold: Level) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn flags(&self) -> &PrintFlags {
        &self.flags
    }

    pub fn flags_mut(&mut self) -> &mut PrintFlags {
        &mut self.flags
    }

    pub fn set_verbose_level(&mut self, threshold: Level) -> &mut Self {
        self.threshold = threshold;
        self
    }

    pub fn verbose_level(&self) -> Level {
        self.threshold
    }

    /// Level of the innermost open container.
    pub fn current_level(&self) -> Level {
        self.stack.current().level
    }

    /// Open containers, the implicit root included.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Whether something at `level` would be printed right now.
    pub fn is_visible(&self, level: Level) -> bool {
        level.passes(self.threshold) && self.stack.allows(self.threshold)
    }

    /// First write error seen so far.
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    pub fn open_object(&mut self, level: Level, key: &str) -> &mut Self {
        self.open(level, key, ContainerKind::Object)
    }

    pub fn open_array(&mut self, level: Level, key: &str) -> &mut Self {
        self.open(level, key, ContainerKind::Array)
    }

    pub fn close_object(&mut self) -> &mut Self {
        self.close()
    }

    pub fn close_array(&mut self) -> &mut Self {
        self.close()
    }

    /// Closes the innermost container. The root is never closed.
    pub fn close(&mut self) -> &mut Self {
        self.end_progress();
        let Some(closed) = self.stack.pop() else {
            return self;
        };
        if closed.emitted {
            let cx = Context::new(&self.stack, &self.flags);
            let result = self.syntax.close(&mut self.out, &cx, &closed);
            self.record(result);
        }
        self
    }

    pub fn print<'v>(&mut self, level: Level, key: &str, value: impl Into<Value<'v>>) -> &mut Self {
        if !self.is_visible(level) {
            return self;
        }
        self.end_progress();
        let value = value.into();
        let key = self.resolve_key(key);
        let cx = Context::new(&self.stack, &self.flags);
        let result = self.syntax.entry(&mut self.out, &cx, key.as_deref(), &value);
        self.record(result);
        self.stack.current_mut().children += 1;
        self
    }

    /// Entry at the level of the innermost container.
    pub fn key<'v>(&mut self, key: &str, value: impl Into<Value<'v>>) -> &mut Self {
        let level = self.current_level();
        self.print(level, key, value)
    }

    pub fn debug<'v>(&mut self, message: impl Into<Value<'v>>) -> &mut Self {
        self.print(Level::Debug, Level::Debug.as_str(), message)
    }

    pub fn info<'v>(&mut self, message: impl Into<Value<'v>>) -> &mut Self {
        self.print(Level::Info, Level::Info.as_str(), message)
    }

    pub fn message<'v>(&mut self, message: impl Into<Value<'v>>) -> &mut Self {
        self.print(Level::Message, Level::Message.as_str(), message)
    }

    pub fn warning<'v>(&mut self, message: impl Into<Value<'v>>) -> &mut Self {
        self.print(Level::Warning, Level::Warning.as_str(), message)
    }

    pub fn error_message<'v>(&mut self, message: impl Into<Value<'v>>) -> &mut Self {
        self.print(Level::Error, Level::Error.as_str(), message)
    }

    pub fn fatal<'v>(&mut self, message: impl Into<Value<'v>>) -> &mut Self {
        self.print(Level::Fatal, Level::Fatal.as_str(), message)
    }

    /// Runs `body` inside an object opened at `level`.
    pub fn object(&mut self, level: Level, key: &str, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.open_object(level, key);
        body(self);
        self.close_object()
    }

    /// Runs `body` inside an array opened at `level`.
    pub fn array(&mut self, level: Level, key: &str, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.open_array(level, key);
        body(self);
        self.close_array()
    }

    /// Dumps `bytes` as an object of element index to formatted columns.
    pub fn print_bytes(&mut self, key: &str, bytes: &[u8]) -> &mut Self {
        let level = self.current_level();
        self.open_object(level, key);
        if self.is_visible(level) {
            let rows: Vec<String> = dump::elements(bytes, &self.flags).collect();
            for (index, row) in rows.into_iter().enumerate() {
                self.print(level, &index.to_string(), row);
            }
        }
        self.close_object()
    }

    /// Walks a JSON tree at the level of the innermost container.
    pub fn print_json(&mut self, key: &str, value: &serde_json::Value) -> &mut Self {
        let level = self.current_level();
        self.print_json_at(level, key, value)
    }

    /// Walks a JSON tree: objects and arrays become containers opened at
    /// `level`, scalars entries at `level`.
    pub fn print_json_at(&mut self, level: Level, key: &str, value: &serde_json::Value) -> &mut Self {
        match value {
            serde_json::Value::Object(map) => {
                self.open_object(level, key);
                for (name, member) in map {
                    self.print_json_at(level, name, member);
                }
                self.close_object()
            }
            serde_json::Value::Array(items) => {
                self.open_array(level, key);
                for item in items {
                    self.print_json_at(level, "", item);
                }
                self.close_array()
            }
            scalar => self.print(level, key, scalar),
        }
    }

    /// Draws a `progress: ####` line that grows as `progress` approaches `total`.
    ///
    /// Shown only when `Info` is visible and the syntax supports inline output.
    /// Reaching `total` ends the line, as does any other event on the printer.
    pub fn update_progress(&mut self, progress: usize, total: usize) -> &mut Self {
        if total == 0 || !self.is_visible(Level::Info) {
            return self;
        }
        if self.progress == 0 {
            let cx = Context::new(&self.stack, &self.flags);
            match self.syntax.begin_inline(&mut self.out, &cx, "progress") {
                Ok(true) => self.progress = 1,
                Ok(false) => return self,
                Err(e) => {
                    self.record(Err(e));
                    return self;
                }
            }
        }

        let marks = progress_marks(progress, total, self.flags.progress_width);
        while self.progress <= marks {
            let result = self.out.write_all(b"#");
            self.record(result);
            self.progress += 1;
        }
        if progress >= total {
            self.end_progress();
        }
        let result = self.out.flush();
        self.record(result);
        self
    }

    /// Closes every open container, writes the trailer and flushes.
    pub fn finish(mut self) -> io::Result<W> {
        self.end_progress();
        while self.stack.depth() > 1 {
            self.close();
        }
        let cx = Context::new(&self.stack, &self.flags);
        let result = self.syntax.finish(&mut self.out, &cx);
        self.record(result);
        let result = self.out.flush();
        self.record(result);
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }

    fn open(&mut self, level: Level, key: &str, kind: ContainerKind) -> &mut Self {
        self.end_progress();
        let visible = self.is_visible(level);
        let mut keyed = false;
        if visible {
            let key = self.resolve_key(key);
            keyed = key.is_some();
            let cx = Context::new(&self.stack, &self.flags);
            let result = self.syntax.open(&mut self.out, &cx, key.as_deref(), kind);
            self.record(result);
            self.stack.current_mut().children += 1;
        }
        self.stack.push(Frame::new(kind, level, visible, keyed));
        self
    }

    /// Terminates a progress line left open by an unfinished bar.
    fn end_progress(&mut self) {
        if self.progress == 0 {
            return;
        }
        let result = self.syntax.end_inline(&mut self.out);
        self.record(result);
        self.stack.current_mut().children += 1;
        self.progress = 0;
    }

    /// Empty keys are numbered inside objects and dropped inside arrays.
    fn resolve_key<'k>(&mut self, key: &'k str) -> Option<Cow<'k, str>> {
        if !key.is_empty() {
            return Some(Cow::Borrowed(key));
        }
        let frame = self.stack.current_mut();
        match frame.kind {
            ContainerKind::Array => None,
            ContainerKind::Object => {
                let number = frame.unlabeled;
                frame.unlabeled += 1;
                Some(Cow::Owned(number.to_string()))
            }
        }
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            self.error.get_or_insert(e);
        }
    }
}

/// Rounded share of `width` that `progress` covers, capped at `width`.
fn progress_marks(progress: usize, total: usize, width: usize) -> usize {
    let (progress, total, width) = (progress.min(total) as u128, total as u128, width as u128);
    ((progress * width + total / 2) / total) as usize
}
