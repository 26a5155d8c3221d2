use crate::error::{Error, Result};
use crate::plain::{self, Plain, element_count};
use std::fmt::Write as _;

/// Read access shared by every byte view and by [`Data`](crate::Data).
///
/// Only `as_bytes` and `is_read_only` are required; the typed accessors are
/// derived from them.
pub trait ByteView {
    fn as_bytes(&self) -> &[u8];

    /// Whether the holder lacks write capability.
    fn is_read_only(&self) -> bool;

    fn size(&self) -> usize {
        self.as_bytes().len()
    }

    /// A view is valid iff it covers at least one byte.
    fn is_valid(&self) -> bool {
        self.size() > 0
    }

    fn is_null(&self) -> bool {
        self.size() == 0
    }

    /// Number of whole `T` elements in the view.
    fn count<T: Plain>(&self) -> usize {
        element_count::<T>(self.size())
    }

    /// Typed read with modulo wraparound.
    ///
    /// `position` is reduced modulo `count::<T>()`, so an out-of-range index
    /// silently aliases an earlier element. Returns `None` only when the view
    /// cannot hold a single `T`. Use [`get`](Self::get) for a strict lookup.
    fn at<T: Plain>(&self, position: usize) -> Option<T> {
        let count = self.count::<T>();
        if count == 0 {
            return None;
        }
        Some(read_slot(self.as_bytes(), position % count))
    }

    /// Typed read without wraparound.
    fn get<T: Plain>(&self, position: usize) -> Option<T> {
        (position < self.count::<T>()).then(|| read_slot(self.as_bytes(), position))
    }

    /// Typed read without wraparound, reporting the failing index.
    fn checked_at<T: Plain>(&self, position: usize) -> Result<T> {
        let count = self.count::<T>();
        self.get(position)
            .ok_or(Error::OutOfBounds { position, count })
    }

    fn iter<T: Plain>(&self) -> impl Iterator<Item = T> + '_ {
        let bytes = self.as_bytes();
        (0..element_count::<T>(bytes.len())).map(move |index| read_slot(bytes, index))
    }

    fn to_vec<T: Plain>(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Upper-case hex rendering of the contents, two digits per byte.
    fn to_hex_string(&self) -> String {
        let bytes = self.as_bytes();
        let mut out = String::with_capacity(bytes.len() * 2);
        for byte in bytes {
            let _ = write!(out, "{:02X}", byte);
        }
        out
    }

    /// Offset of the first byte where the two views differ.
    ///
    /// When one view is a prefix of the other, the shorter length is returned.
    fn first_difference<V: ByteView + ?Sized>(&self, other: &V) -> Option<usize> {
        let (left, right) = (self.as_bytes(), other.as_bytes());
        left.iter()
            .zip(right)
            .position(|(a, b)| a != b)
            .or_else(|| (left.len() != right.len()).then(|| left.len().min(right.len())))
    }
}

fn read_slot<T: Plain>(bytes: &[u8], index: usize) -> T {
    plain::read(&bytes[index * size_of::<T>()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<u8>);

    impl ByteView for Fixed {
        fn as_bytes(&self) -> &[u8] {
            &self.0
        }

        fn is_read_only(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_at_wraps_around() {
        let view = Fixed(vec![1, 0, 2, 0, 3, 0]);
        assert_eq!(view.count::<u16>(), 3);
        for position in 0..12 {
            assert_eq!(view.at::<u16>(position), view.at::<u16>(position % 3));
        }
        assert_eq!(view.at::<u16>(4).map(u16::from_le), Some(2));
        assert_eq!(view.at::<u8>(7), Some(0));
    }

    #[test]
    fn test_at_on_too_small_view() {
        let view = Fixed(vec![1, 2, 3]);
        assert_eq!(view.at::<u32>(0), None);
        assert_eq!(Fixed(Vec::new()).at::<u8>(5), None);
    }

    #[test]
    fn test_get_is_strict() {
        let view = Fixed(vec![9, 8, 7]);
        assert_eq!(view.get::<u8>(2), Some(7));
        assert_eq!(view.get::<u8>(3), None);
        assert_eq!(
            view.checked_at::<u8>(5),
            Err(Error::OutOfBounds {
                position: 5,
                count: 3
            })
        );
    }

    #[test]
    fn test_iter_ignores_partial_tail() {
        let view = Fixed(vec![0xFF; 10]);
        assert_eq!(view.to_vec::<u32>(), vec![u32::MAX, u32::MAX]);
    }

    #[test]
    fn test_hex_string() {
        assert_eq!(Fixed(vec![0x00, 0xAB, 0x7f]).to_hex_string(), "00AB7F");
        assert_eq!(Fixed(Vec::new()).to_hex_string(), "");
    }

    #[test]
    fn test_first_difference() {
        let a = Fixed(vec![1, 2, 3]);
        assert_eq!(a.first_difference(&Fixed(vec![1, 2, 3])), None);
        assert_eq!(a.first_difference(&Fixed(vec![1, 9, 3])), Some(1));
        assert_eq!(a.first_difference(&Fixed(vec![1, 2])), Some(2));
    }

    #[test]
    fn test_validity_follows_size() {
        assert!(Fixed(vec![0]).is_valid());
        assert!(Fixed(Vec::new()).is_null());
        assert!(!Fixed(Vec::new()).is_valid());
    }
}
