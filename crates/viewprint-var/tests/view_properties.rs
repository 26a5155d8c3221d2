use viewprint_var::{ByteView, Data, Error, Reference, SwapBy, View, ViewMut};

#[test]
fn writable_reference_exposes_both_accessors() {
    for size in [1usize, 3, 8, 64] {
        let mut buffer = vec![0u8; size];
        let address = buffer.as_ptr();
        let mut reference = Reference::new(&mut buffer, true);
        assert!(reference.is_valid());
        assert_eq!(reference.size(), size);
        assert_eq!(reference.as_view().bytes().as_ptr(), address);
        assert_eq!(reference.bytes_mut().map(|bytes| bytes.as_ptr()), Some(address));
    }
}

#[test]
fn read_only_reference_keeps_read_address_only() {
    let mut buffer = [7u8; 16];
    let address = buffer.as_ptr();
    let mut reference = Reference::new(&mut buffer, false);
    assert!(reference.bytes_mut().is_none());
    assert_eq!(reference.as_view().bytes().as_ptr(), address);
}

#[test]
fn referring_through_shared_handles_downgrades() {
    let mut buffer = [0u8; 4];
    let mut writable = ViewMut::new(&mut buffer);

    let mut narrowed = View::empty();
    narrowed.refer_to(&writable);
    assert!(narrowed.is_read_only());
    assert_eq!(narrowed.size(), 4);

    let mut rebound = ViewMut::default();
    rebound.refer_to(writable.reborrow());
    assert!(!rebound.is_read_only());
    rebound.fill(1u8);
    assert_eq!(buffer, [1; 4]);
}

#[test]
fn fill_round_trips_every_slot() {
    const X: u32 = 0xCAFE_F00D;
    for words in [1usize, 2, 5, 16] {
        let mut data = Data::new(words * 4);
        data.view_mut().fill(X);
        assert!(data.view().iter::<u32>().all(|word| word == X));
        assert_eq!(data.view().count::<u32>(), words);
    }
}

#[test]
fn at_wraps_for_every_element_type() {
    let mut data = Data::new(24);
    data.view_mut().populate(|position, _| position as u8, 0);
    let view = data.view();

    fn check<T: viewprint_var::Plain + PartialEq + std::fmt::Debug>(view: View<'_>) {
        let count = view.count::<T>();
        for position in count..count * 3 {
            assert_eq!(view.at::<T>(position), view.at::<T>(position % count));
        }
    }

    check::<u8>(view);
    check::<u16>(view);
    check::<u32>(view);
    check::<u64>(view);
    check::<i32>(view);
    check::<f32>(view);
    check::<[u8; 3]>(view);
}

#[test]
fn strict_access_reports_out_of_bounds() {
    let view = View::new(&[1, 2, 3, 4]);
    assert_eq!(view.get::<u16>(2), None);
    assert_eq!(
        view.checked_at::<u16>(2),
        Err(Error::OutOfBounds { position: 2, count: 2 })
    );
}

#[test]
fn equality_is_content_based() {
    let first = vec![1u8, 2, 3];
    let second = vec![1u8, 2, 3];
    let (a, b) = (View::from(&first), View::from(&second));
    assert_ne!(a.bytes().as_ptr(), b.bytes().as_ptr());
    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_ne!(a, View::new(&first[..2]));
    assert_ne!(View::new(&[0, 0]), View::new(&[0, 0, 0]));
}

#[test]
fn capability_violations_surface_as_errors() {
    let mut buffer = [1u8, 2, 3, 4];
    let mut reference = Reference::new(&mut buffer, false);
    assert_eq!(reference.swap_byte_order(SwapBy::HalfWord), Err(Error::ReadOnly));
    assert_eq!(reference.fill(0u16), Err(Error::ReadOnly));
    assert_eq!(buffer, [1, 2, 3, 4]);
}

#[test]
fn subviews_stay_in_range() {
    let data = Data::from_hex("00 11 22 33 44").unwrap();
    let window = data.view().subview(1, 3).unwrap();
    assert_eq!(window.to_hex_string(), "112233");
    assert_eq!(
        data.view().subview(4, 2),
        Err(Error::InvalidRange { offset: 4, end: 6, size: 5 })
    );
}

#[test]
fn debug_shows_size_and_capability() {
    let mut buffer = [0u8; 4];
    insta::assert_debug_snapshot!(View::new(&buffer), @r"
    View {
        size: 4,
        read_only: true,
    }
    ");
    insta::assert_debug_snapshot!(ViewMut::new(&mut buffer), @r"
    ViewMut {
        size: 4,
        read_only: false,
    }
    ");
}
