use crate::access::ByteView;
use crate::error::{Error, Result};
use crate::plain::Plain;
use crate::view::{SwapBy, View, ViewMut};

/// A view whose write capability is only known at run time.
///
/// Most code should take [`View`] or [`ViewMut`] directly. `Reference` exists
/// for call sites that decide writability dynamically, e.g. a buffer handed out
/// with a `writable` flag. Mutating through a read-only reference returns
/// [`Error::ReadOnly`] rather than writing through a null pointer.
#[derive(Debug)]
pub enum Reference<'a> {
    ReadOnly(View<'a>),
    ReadWrite(ViewMut<'a>),
}

impl Default for Reference<'_> {
    fn default() -> Self {
        Reference::ReadOnly(View::empty())
    }
}

impl<'a> Reference<'a> {
    /// Refers to `bytes`, writable only when `writable` is set.
    pub fn new(bytes: &'a mut [u8], writable: bool) -> Self {
        if writable {
            Reference::ReadWrite(ViewMut::new(bytes))
        } else {
            Reference::ReadOnly(View::new(bytes))
        }
    }

    pub fn read_only(bytes: &'a [u8]) -> Self {
        Reference::ReadOnly(View::new(bytes))
    }

    pub fn refer_to(&mut self, bytes: &'a mut [u8], writable: bool) -> &mut Self {
        *self = Reference::new(bytes, writable);
        self
    }

    /// Referring through a shared handle: the result is always read-only.
    pub fn downgrade(&self) -> Reference<'_> {
        Reference::ReadOnly(self.as_view())
    }

    /// Referring through an exclusive handle: writability is preserved.
    pub fn reborrow(&mut self) -> Reference<'_> {
        match self {
            Reference::ReadOnly(view) => Reference::ReadOnly(*view),
            Reference::ReadWrite(view) => Reference::ReadWrite(view.reborrow()),
        }
    }

    pub fn as_view(&self) -> View<'_> {
        match self {
            Reference::ReadOnly(view) => *view,
            Reference::ReadWrite(view) => view.as_view(),
        }
    }

    /// Writable view, or `None` for read-only references.
    pub fn as_view_mut(&mut self) -> Option<ViewMut<'_>> {
        match self {
            Reference::ReadOnly(_) => None,
            Reference::ReadWrite(view) => Some(view.reborrow()),
        }
    }

    /// Write access to the bytes, or `None` for read-only references.
    pub fn bytes_mut(&mut self) -> Option<&mut [u8]> {
        match self {
            Reference::ReadOnly(_) => None,
            Reference::ReadWrite(view) => Some(view.bytes_mut()),
        }
    }

    pub fn set<T: Plain>(&mut self, position: usize, value: T) -> Result<bool> {
        Ok(self.writable()?.set(position, value))
    }

    pub fn fill<T: Plain>(&mut self, value: T) -> Result<()> {
        self.writable()?.fill(value);
        Ok(())
    }

    pub fn copy_from<V: ByteView + ?Sized>(&mut self, source: &V) -> Result<usize> {
        Ok(self.writable()?.copy_from(source))
    }

    pub fn swap_byte_order(&mut self, order: SwapBy) -> Result<()> {
        self.writable()?.swap_byte_order(order);
        Ok(())
    }

    fn writable(&mut self) -> Result<&mut ViewMut<'a>> {
        match self {
            Reference::ReadOnly(_) => Err(Error::ReadOnly),
            Reference::ReadWrite(view) => Ok(view),
        }
    }
}

impl ByteView for Reference<'_> {
    fn as_bytes(&self) -> &[u8] {
        match self {
            Reference::ReadOnly(view) => view.bytes(),
            Reference::ReadWrite(view) => view.as_bytes(),
        }
    }

    fn is_read_only(&self) -> bool {
        matches!(self, Reference::ReadOnly(_))
    }
}

impl<'a> From<View<'a>> for Reference<'a> {
    fn from(view: View<'a>) -> Self {
        Reference::ReadOnly(view)
    }
}

impl<'a> From<ViewMut<'a>> for Reference<'a> {
    fn from(view: ViewMut<'a>) -> Self {
        Reference::ReadWrite(view)
    }
}

impl PartialEq for Reference<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Reference<'_> {}
