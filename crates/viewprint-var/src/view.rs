use crate::access::ByteView;
use crate::error::{Error, Result};
use crate::plain::{self, Plain, element_count};
use std::fmt;

/// Unit for [`ViewMut::swap_byte_order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapBy {
    Byte,
    HalfWord,
    Word,
}

impl SwapBy {
    pub fn width(self) -> usize {
        match self {
            SwapBy::Byte => 1,
            SwapBy::HalfWord => 2,
            SwapBy::Word => 4,
        }
    }
}

/// Read-only window over bytes owned elsewhere.
///
/// A `View` never owns, allocates or copies. It is `Copy`, so handing one out
/// is as cheap as handing out the slice it wraps, and it can never be turned
/// into a [`ViewMut`].
#[derive(Clone, Copy, Default)]
pub struct View<'a> {
    bytes: &'a [u8],
}

impl<'a> View<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// A null view (size 0).
    pub fn empty() -> Self {
        Self { bytes: &[] }
    }

    /// View covering the whole of a single plain value.
    pub fn of<T: Plain>(value: &'a T) -> Self {
        Self::new(plain::bytes_of(value))
    }

    pub fn from_slice<T: Plain>(values: &'a [T]) -> Self {
        Self::new(plain::slice_bytes(values))
    }

    /// Rebinds this view. Whatever `source` was, the result is read-only.
    pub fn refer_to(&mut self, source: impl Into<View<'a>>) -> &mut Self {
        *self = source.into();
        self
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Shrinks the view; sizes at or above the current size are ignored.
    pub fn reduce_size(&mut self, size: usize) -> &mut Self {
        if size < self.bytes.len() {
            self.bytes = &self.bytes[..size];
        }
        self
    }

    /// Narrower view starting at `offset`, `len` bytes long.
    pub fn subview(&self, offset: usize, len: usize) -> Result<View<'a>> {
        let end = checked_range(offset, len, self.bytes.len())?;
        Ok(View::new(&self.bytes[offset..end]))
    }
}

impl ByteView for View<'_> {
    fn as_bytes(&self) -> &[u8] {
        self.bytes
    }

    fn is_read_only(&self) -> bool {
        true
    }
}

impl fmt::Debug for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("size", &self.bytes.len())
            .field("read_only", &true)
            .finish()
    }
}

impl<'a> From<&'a [u8]> for View<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        View::new(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for View<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        View::new(bytes)
    }
}

impl<'a> From<&'a mut [u8]> for View<'a> {
    fn from(bytes: &'a mut [u8]) -> Self {
        View::new(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for View<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        View::new(bytes)
    }
}

/// String bytes, without any terminator.
impl<'a> From<&'a str> for View<'a> {
    fn from(text: &'a str) -> Self {
        View::new(text.as_bytes())
    }
}

impl<'a> From<&'a String> for View<'a> {
    fn from(text: &'a String) -> Self {
        View::new(text.as_bytes())
    }
}

impl<'a> From<ViewMut<'a>> for View<'a> {
    fn from(view: ViewMut<'a>) -> Self {
        view.into_view()
    }
}

impl<'a> From<&'a ViewMut<'_>> for View<'a> {
    fn from(view: &'a ViewMut<'_>) -> Self {
        view.as_view()
    }
}

/// Read-write window over bytes owned elsewhere.
///
/// Holding a `ViewMut` is the write capability: there is no null write
/// pointer to check, and narrowing to [`View`] is the only conversion offered.
#[derive(Default)]
pub struct ViewMut<'a> {
    bytes: &'a mut [u8],
}

impl<'a> ViewMut<'a> {
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self { bytes }
    }

    pub fn of_mut<T: Plain>(value: &'a mut T) -> Self {
        Self::new(plain::bytes_of_mut(value))
    }

    pub fn from_slice_mut<T: Plain>(values: &'a mut [T]) -> Self {
        Self::new(plain::slice_bytes_mut(values))
    }

    /// Rebinds this view to another writable view; write access is kept.
    pub fn refer_to(&mut self, source: ViewMut<'a>) -> &mut Self {
        *self = source;
        self
    }

    /// Read-only view of the same bytes.
    pub fn as_view(&self) -> View<'_> {
        View::new(&*self.bytes)
    }

    pub fn into_view(self) -> View<'a> {
        View::new(self.bytes)
    }

    /// Shorter-lived writable view of the same bytes.
    pub fn reborrow(&mut self) -> ViewMut<'_> {
        ViewMut::new(&mut *self.bytes)
    }

    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut *self.bytes
    }

    pub fn reduce_size(&mut self, size: usize) -> &mut Self {
        if size < self.bytes.len() {
            let bytes = std::mem::take(&mut self.bytes);
            self.bytes = &mut bytes[..size];
        }
        self
    }

    pub fn subview_mut(&mut self, offset: usize, len: usize) -> Result<ViewMut<'_>> {
        let end = checked_range(offset, len, self.bytes.len())?;
        Ok(ViewMut::new(&mut self.bytes[offset..end]))
    }

    /// Typed write with the same wraparound as [`ByteView::at`].
    ///
    /// Returns `false` (and writes nothing) when the view cannot hold a `T`.
    pub fn set<T: Plain>(&mut self, position: usize, value: T) -> bool {
        let count = element_count::<T>(self.bytes.len());
        if count == 0 {
            return false;
        }
        let offset = (position % count) * size_of::<T>();
        plain::write(&mut self.bytes[offset..], value);
        true
    }

    /// Writes `value` into every whole `T` slot; a partial tail is untouched.
    pub fn fill<T: Plain>(&mut self, value: T) -> &mut Self {
        for slot in self.slots::<T>() {
            plain::write(slot, value);
        }
        self
    }

    /// Writes `calculate(position, count)` into the first `count` slots.
    ///
    /// A `count` of zero means every slot; larger counts are clamped.
    pub fn populate<T: Plain>(
        &mut self,
        calculate: impl Fn(usize, usize) -> T,
        count: usize,
    ) -> &mut Self {
        let available = element_count::<T>(self.bytes.len());
        let count = if count == 0 {
            available
        } else {
            count.min(available)
        };
        for (position, slot) in self.slots::<T>().take(count).enumerate() {
            plain::write(slot, calculate(position, count));
        }
        self
    }

    /// Copies as many bytes as both views hold; returns the number copied.
    pub fn copy_from<V: ByteView + ?Sized>(&mut self, source: &V) -> usize {
        let source = source.as_bytes();
        let len = self.bytes.len().min(source.len());
        self.bytes[..len].copy_from_slice(&source[..len]);
        len
    }

    /// Reverses byte order inside each `order`-wide unit.
    pub fn swap_byte_order(&mut self, order: SwapBy) -> &mut Self {
        let width = order.width();
        if width > 1 {
            for unit in self.bytes.chunks_exact_mut(width) {
                unit.reverse();
            }
        }
        self
    }

    fn slots<T: Plain>(&mut self) -> impl Iterator<Item = &mut [u8]> + '_ {
        let width = size_of::<T>().max(1);
        let count = element_count::<T>(self.bytes.len());
        self.bytes.chunks_exact_mut(width).take(count)
    }
}

impl ByteView for ViewMut<'_> {
    fn as_bytes(&self) -> &[u8] {
        &*self.bytes
    }

    fn is_read_only(&self) -> bool {
        false
    }
}

impl fmt::Debug for ViewMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewMut")
            .field("size", &self.bytes.len())
            .field("read_only", &false)
            .finish()
    }
}

impl<'a> From<&'a mut [u8]> for ViewMut<'a> {
    fn from(bytes: &'a mut [u8]) -> Self {
        ViewMut::new(bytes)
    }
}

impl<'a, const N: usize> From<&'a mut [u8; N]> for ViewMut<'a> {
    fn from(bytes: &'a mut [u8; N]) -> Self {
        ViewMut::new(bytes)
    }
}

impl<'a> From<&'a mut Vec<u8>> for ViewMut<'a> {
    fn from(bytes: &'a mut Vec<u8>) -> Self {
        ViewMut::new(bytes)
    }
}

pub(crate) fn checked_range(offset: usize, len: usize, size: usize) -> Result<usize> {
    match offset.checked_add(len) {
        Some(end) if end <= size => Ok(end),
        _ => Err(Error::InvalidRange {
            offset,
            end: offset.saturating_add(len),
            size,
        }),
    }
}

/// Equality is by content only; addresses and capabilities are ignored.
macro_rules! content_eq {
    ($($lhs:ty => $rhs:ty),* $(,)?) => {
        $(
            impl PartialEq<$rhs> for $lhs {
                fn eq(&self, other: &$rhs) -> bool {
                    self.as_bytes() == other.as_bytes()
                }
            }
        )*
    };
}

content_eq!(
    View<'_> => View<'_>,
    View<'_> => ViewMut<'_>,
    ViewMut<'_> => View<'_>,
    ViewMut<'_> => ViewMut<'_>,
);

impl Eq for View<'_> {}
impl Eq for ViewMut<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_view_over_buffer() {
        let mut buffer = [0u8; 16];
        let view = ViewMut::new(&mut buffer);
        assert!(view.is_valid());
        assert!(!view.is_read_only());
        assert_eq!(view.size(), 16);
    }

    #[test]
    fn test_empty_view_is_null() {
        let view = View::empty();
        assert!(view.is_null());
        assert!(!view.is_valid());
        assert!(view.is_read_only());
    }

    #[test]
    fn test_read_only_narrowing() {
        let mut buffer = [7u8; 4];
        let writable = ViewMut::new(&mut buffer);
        let mut narrowed = View::empty();
        narrowed.refer_to(&writable);
        assert!(narrowed.is_read_only());
        assert_eq!(narrowed, writable);
    }

    #[test]
    fn test_mut_refer_to_preserves_write() {
        let mut first = [0u8; 4];
        let mut second = [0u8; 8];
        let mut view = ViewMut::new(&mut first);
        view.refer_to(ViewMut::new(&mut second));
        assert!(!view.is_read_only());
        assert_eq!(view.size(), 8);
        view.fill(0xAAu8);
        assert_eq!(second, [0xAA; 8]);
    }

    #[test]
    fn test_fill_then_read_every_slot() {
        let mut words = [0u32; 5];
        let mut view = ViewMut::from_slice_mut(&mut words);
        view.fill(0xDEAD_BEEFu32);
        assert!(view.iter::<u32>().all(|word| word == 0xDEAD_BEEF));
        assert_eq!(view.count::<u32>(), 5);
    }

    #[test]
    fn test_fill_leaves_partial_tail() {
        let mut buffer = [0u8; 7];
        ViewMut::new(&mut buffer).fill(0x1111u16);
        assert_eq!(buffer, [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x00]);
    }

    #[test]
    fn test_populate_clamps_count() {
        let mut buffer = [0u8; 4];
        ViewMut::new(&mut buffer).populate(|position, count| (position * 10 + count) as u8, 9);
        assert_eq!(buffer, [4, 14, 24, 34]);

        let mut buffer = [0u8; 4];
        ViewMut::new(&mut buffer).populate(|position, _| position as u8 + 1, 2);
        assert_eq!(buffer, [1, 2, 0, 0]);
    }

    #[test]
    fn test_set_wraps_around() {
        let mut buffer = [0u16; 3];
        let mut view = ViewMut::from_slice_mut(&mut buffer);
        assert!(view.set::<u16>(4, 5));
        assert_eq!(view.at::<u16>(1), Some(5));
        assert!(!ViewMut::new(&mut [0u8; 1]).set::<u16>(0, 1));
    }

    #[test]
    fn test_copy_truncates_to_smaller() {
        let source = [1u8, 2, 3, 4, 5];
        let mut short = [0u8; 3];
        assert_eq!(ViewMut::new(&mut short).copy_from(&View::new(&source)), 3);
        assert_eq!(short, [1, 2, 3]);

        let mut long = [9u8; 8];
        assert_eq!(ViewMut::new(&mut long).copy_from(&View::new(&source)), 5);
        assert_eq!(long, [1, 2, 3, 4, 5, 9, 9, 9]);
    }

    #[test]
    fn test_swap_byte_order() {
        let mut buffer = [1u8, 2, 3, 4, 5, 6, 7];
        ViewMut::new(&mut buffer).swap_byte_order(SwapBy::HalfWord);
        assert_eq!(buffer, [2, 1, 4, 3, 6, 5, 7]);

        let mut buffer = [1u8, 2, 3, 4, 5, 6];
        ViewMut::new(&mut buffer).swap_byte_order(SwapBy::Word);
        assert_eq!(buffer, [4, 3, 2, 1, 5, 6]);

        let mut buffer = [1u8, 2, 3];
        ViewMut::new(&mut buffer).swap_byte_order(SwapBy::Byte);
        assert_eq!(buffer, [1, 2, 3]);
    }

    #[test]
    fn test_equality_is_by_content() {
        let a = [1u8, 2, 3];
        let b = vec![1u8, 2, 3];
        let c = [1u8, 2];
        assert_eq!(View::new(&a), View::from(&b));
        assert_eq!(View::new(&a), View::new(&a));
        assert_ne!(View::new(&a), View::new(&c));
        assert_ne!(View::new(&c), View::new(&a));
    }

    #[test]
    fn test_scalar_and_text_views() {
        let value = 0x1234_5678u32;
        let view = View::of(&value);
        assert_eq!(view.size(), 4);
        assert_eq!(view.at::<u32>(0), Some(0x1234_5678));

        let view = View::from("hello");
        assert_eq!(view.size(), 5);
        assert_eq!(view.at::<u8>(1), Some(b'e'));
    }

    #[test]
    fn test_scalar_view_mut_writes_through() {
        let mut value = 0u64;
        ViewMut::of_mut(&mut value).fill(0xFFu8);
        assert_eq!(value, u64::MAX);
    }

    #[test]
    fn test_reduce_size_and_subview() {
        let data = [0u8, 1, 2, 3, 4, 5];
        let mut view = View::new(&data);
        view.reduce_size(10);
        assert_eq!(view.size(), 6);
        view.reduce_size(4);
        assert_eq!(view.size(), 4);
        assert_eq!(view.subview(1, 2).unwrap().bytes(), &[1, 2]);
        assert_eq!(
            view.subview(3, 2).unwrap_err(),
            Error::InvalidRange {
                offset: 3,
                end: 5,
                size: 4
            }
        );
    }

    #[test]
    fn test_subview_mut_writes_window_only() {
        let mut buffer = [0u8; 6];
        let mut view = ViewMut::new(&mut buffer);
        view.subview_mut(2, 2).unwrap().fill(0x55u8);
        view.reduce_size(3);
        assert_eq!(view.size(), 3);
        assert_eq!(buffer, [0, 0, 0x55, 0x55, 0, 0]);
    }
}
