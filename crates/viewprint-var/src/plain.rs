//! Element types that may be reinterpreted from raw bytes.
//!
//! A view only ever stores bytes. Typed access (`at::<u32>`, `fill::<u16>` ...)
//! goes through [`Plain`], which is implemented for types where every bit
//! pattern is a valid value and there is no padding. Loads and stores are
//! unaligned, so a view over any byte offset can be read as any element type.

mod private {
    pub trait Sealed {}
}

/// Marker for plain-old-data element types.
///
/// # Safety
///
/// Implementors must have no padding bytes and accept every bit pattern as a
/// valid value. The trait is sealed; the implementations below are the only ones.
pub unsafe trait Plain: Copy + 'static + private::Sealed {}

macro_rules! plain {
    ($($ty:ty),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}
            unsafe impl Plain for $ty {}
        )*
    };
}

plain!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl<T: Plain, const N: usize> private::Sealed for [T; N] {}
unsafe impl<T: Plain, const N: usize> Plain for [T; N] {}

/// Number of whole `T` elements that fit in `len` bytes.
pub fn element_count<T: Plain>(len: usize) -> usize {
    match size_of::<T>() {
        0 => 0,
        width => len / width,
    }
}

/// Bytes of a single plain value.
pub fn bytes_of<T: Plain>(value: &T) -> &[u8] {
    // SAFETY: `T: Plain` has no padding, so all `size_of::<T>()` bytes are initialized.
    unsafe { std::slice::from_raw_parts((value as *const T).cast::<u8>(), size_of::<T>()) }
}

/// Mutable bytes of a single plain value.
pub fn bytes_of_mut<T: Plain>(value: &mut T) -> &mut [u8] {
    // SAFETY: as above, and any bytes written back form a valid `T`.
    unsafe { std::slice::from_raw_parts_mut((value as *mut T).cast::<u8>(), size_of::<T>()) }
}

/// Bytes backing a slice of plain values.
pub fn slice_bytes<T: Plain>(values: &[T]) -> &[u8] {
    // SAFETY: contiguous, padding-free elements.
    unsafe { std::slice::from_raw_parts(values.as_ptr().cast::<u8>(), size_of_val(values)) }
}

/// Mutable bytes backing a slice of plain values.
pub fn slice_bytes_mut<T: Plain>(values: &mut [T]) -> &mut [u8] {
    let len = size_of_val(values);
    // SAFETY: contiguous, padding-free elements; every bit pattern is valid.
    unsafe { std::slice::from_raw_parts_mut(values.as_mut_ptr().cast::<u8>(), len) }
}

/// Reads one `T` from the front of `bytes`.
///
/// Panics if `bytes` is shorter than `T`; callers index by element count first.
pub(crate) fn read<T: Plain>(bytes: &[u8]) -> T {
    assert!(bytes.len() >= size_of::<T>());
    // SAFETY: length checked above, `read_unaligned` has no alignment requirement.
    unsafe { std::ptr::read_unaligned(bytes.as_ptr().cast::<T>()) }
}

/// Writes one `T` to the front of `bytes`.
pub(crate) fn write<T: Plain>(bytes: &mut [u8], value: T) {
    assert!(bytes.len() >= size_of::<T>());
    // SAFETY: length checked above, `write_unaligned` has no alignment requirement.
    unsafe { std::ptr::write_unaligned(bytes.as_mut_ptr().cast::<T>(), value) }
}
