use crate::flags::PrintFlags;
use crate::level::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Object,
    Array,
}

/// One open container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub kind: ContainerKind,
    /// Level the container was opened at; restricts everything inside it.
    pub level: Level,
    /// Whether the opening marker was written.
    pub emitted: bool,
    /// Whether the container was opened under a key.
    pub keyed: bool,
    /// Emitted children so far.
    pub children: usize,
    /// Empty-keyed entries numbered so far (objects only).
    pub unlabeled: usize,
}

impl Frame {
    pub fn new(kind: ContainerKind, level: Level, emitted: bool, keyed: bool) -> Self {
        Self {
            kind,
            level,
            emitted,
            keyed,
            children: 0,
            unlabeled: 0,
        }
    }

    /// The implicit outermost array. It is always visible.
    pub fn root() -> Self {
        Self::new(ContainerKind::Array, Level::Fatal, true, false)
    }

    pub fn is_array(&self) -> bool {
        self.kind == ContainerKind::Array
    }
}

/// Stack of open containers. The root frame is never popped.
#[derive(Debug, Clone)]
pub struct ContainerStack {
    frames: Vec<Frame>,
}

impl Default for ContainerStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerStack {
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::root()],
        }
    }

    /// Number of open frames, root included.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn current(&self) -> &Frame {
        // The root frame is only ever replaced, never removed.
        &self.frames[self.frames.len() - 1]
    }

    pub fn current_mut(&mut self) -> &mut Frame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Pops the innermost frame; `None` when only the root is left.
    pub fn pop(&mut self) -> Option<Frame> {
        if self.frames.len() > 1 {
            self.frames.pop()
        } else {
            None
        }
    }

    /// Every open frame was emitted and none was opened below `threshold`.
    pub fn allows(&self, threshold: Level) -> bool {
        self.frames
            .iter()
            .all(|frame| frame.emitted && frame.level.passes(threshold))
    }
}

/// What a syntax sees when asked to render an event.
#[derive(Debug, Clone, Copy)]
pub struct Context<'p> {
    pub frames: &'p [Frame],
    pub flags: &'p PrintFlags,
}

impl<'p> Context<'p> {
    pub fn new(stack: &'p ContainerStack, flags: &'p PrintFlags) -> Self {
        Self {
            frames: stack.frames(),
            flags,
        }
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Innermost open container.
    pub fn container(&self) -> &'p Frame {
        &self.frames[self.frames.len() - 1]
    }

    pub fn in_array(&self) -> bool {
        self.container().is_array()
    }

    /// The container already holds an emitted child.
    pub fn has_siblings(&self) -> bool {
        self.container().children > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_never_popped() {
        let mut stack = ContainerStack::new();
        stack.push(Frame::new(ContainerKind::Object, Level::Info, true, true));
        assert_eq!(stack.depth(), 2);
        assert!(stack.pop().is_some());
        assert!(stack.pop().is_none());
        assert!(stack.pop().is_none());
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current(), &Frame::root());
    }

    #[test]
    fn test_allows_checks_every_frame() {
        let mut stack = ContainerStack::new();
        assert!(stack.allows(Level::Fatal));

        stack.push(Frame::new(ContainerKind::Array, Level::Debug, true, false));
        stack.push(Frame::new(ContainerKind::Object, Level::Warning, true, false));
        assert!(stack.allows(Level::Debug));
        assert!(!stack.allows(Level::Info));

        stack.pop();
        stack.pop();
        stack.push(Frame::new(ContainerKind::Object, Level::Fatal, false, false));
        assert!(!stack.allows(Level::Debug));
    }

    #[test]
    fn test_context_reports_innermost_container() {
        let mut stack = ContainerStack::new();
        stack.push(Frame::new(ContainerKind::Object, Level::Info, true, true));
        stack.current_mut().children = 2;
        let flags = PrintFlags::default();
        let cx = Context::new(&stack, &flags);
        assert_eq!(cx.depth(), 2);
        assert!(!cx.in_array());
        assert!(cx.has_siblings());
    }
}
