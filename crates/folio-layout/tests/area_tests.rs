//! Integration tests for geometry records.

use std::borrow::Cow;

use folio_layout::{Align, Alignment, Area, Rect, Units};

fn area(left: f32, top: f32, width: f32, height: f32) -> Area {
    Area::with_bounds(left, top, width, height)
}

#[test]
fn test_is_empty() {
    assert!(Area::new().is_empty());

    let mut a = Area::new();
    a.top = Some(0.0);
    assert!(!a.is_empty());
}

#[test]
fn test_page_position_defaults_to_offset() {
    let mut a = Area::new();
    a.left = Some(1.5);
    assert_eq!(a.page_left(), Some(1.5));
    assert_eq!(a.page_top(), None);
}

#[test]
fn test_page_position_is_cached_on_first_read() {
    let mut a = Area::new();
    a.left = Some(1.0);
    assert_eq!(a.page_left(), Some(1.0));

    // later writes to left do not refresh the cached page position
    a.left = Some(4.0);
    assert_eq!(a.page_left(), Some(1.0));

    a.set_page_left(None);
    assert_eq!(a.page_left(), Some(4.0));
}

#[test]
fn test_add_container_page_position() {
    let container = area(5.0, 3.0, 10.0, 10.0);

    let mut unplaced = Area::new();
    unplaced.add(&container);
    assert_eq!(unplaced.page_left(), Some(5.0));
    assert_eq!(unplaced.page_top(), Some(3.0));

    let mut placed = Area::new();
    placed.left = Some(2.0);
    placed.add(&container);
    assert_eq!(placed.page_left(), Some(7.0));
    assert_eq!(placed.page_top(), Some(3.0));
}

#[test]
fn test_add_unknown_container_changes_nothing() {
    let mut a = Area::new();
    a.left = Some(2.0);
    a.add(&Area::new());
    assert_eq!(a.page_left(), Some(2.0));
    assert_eq!(a.page_top(), None);
}

#[test]
fn test_add_does_not_touch_container() {
    let container = area(5.0, 3.0, 10.0, 10.0);
    let before = container.clone();
    let mut a = Area::new();
    a.add(&container);
    assert_eq!(container, before);
}

#[test]
fn test_inherit_alignment() {
    let mut container = Area::new();
    container.align = Alignment::new(Align::Center, Align::BOTTOM);

    let mut a = Area::new();
    a.align.horizontal = Align::Left;
    a.inherit(&container);
    assert_eq!(a.align, Alignment::new(Align::Left, Align::Right));
}

#[test]
fn test_calculate_from_right() {
    let container = area(0.0, 0.0, 10.0, 8.0);

    let mut a = Area::new();
    a.width = Some(3.0);
    a.calculate(&container, None, Some(1.0));
    assert_eq!(a.left, Some(6.0));

    let mut b = Area::new();
    b.left = Some(2.0);
    b.calculate(&container, None, Some(1.0));
    assert_eq!(b.width, Some(7.0));
}

#[test]
fn test_calculate_from_bottom() {
    let container = area(0.0, 0.0, 10.0, 8.0);

    let mut a = Area::new();
    a.height = Some(2.0);
    a.calculate(&container, Some(1.0), None);
    assert_eq!(a.top, Some(5.0));

    let mut b = Area::new();
    b.top = Some(1.0);
    b.calculate(&container, Some(1.0), None);
    assert_eq!(b.height, Some(6.0));
}

#[test]
fn test_calculate_keeps_known_values() {
    let container = area(0.0, 0.0, 10.0, 8.0);
    let mut a = area(1.0, 1.0, 2.0, 2.0);
    a.calculate(&container, Some(1.0), Some(1.0));
    assert_eq!(a, area(1.0, 1.0, 2.0, 2.0));
}

#[test]
fn test_calculate_needs_container_size() {
    let mut a = Area::new();
    a.width = Some(3.0);
    a.calculate(&Area::new(), Some(1.0), Some(1.0));
    assert_eq!(a.left, None);
    assert_eq!(a.top, None);
}

#[test]
fn test_calculate_is_idempotent() {
    let container = area(0.0, 0.0, 10.0, 8.0);
    let mut a = Area::new();
    a.width = Some(3.0);
    a.top = Some(1.0);
    a.calculate(&container, Some(2.0), Some(1.0));
    let once = a.clone();
    a.calculate(&container, Some(2.0), Some(1.0));
    assert_eq!(a, once);
}

#[test]
fn test_reset() {
    let mut a = area(1.0, 2.0, 3.0, 4.0);
    a.align.horizontal = Align::Center;
    let _ = a.page_left();
    a.reset();
    assert!(a.is_empty());
    assert_eq!(a.page_left(), None);
    assert_eq!(a.align, Alignment::default());
}

#[test]
fn test_overlaps() {
    let a = area(0.0, 0.0, 4.0, 4.0);
    assert!(a.overlaps(&area(2.0, 2.0, 1.0, 1.0)));
    assert!(!a.overlaps(&area(5.0, 0.0, 1.0, 1.0)));
    assert!(!a.overlaps(&area(0.0, 4.0, 1.0, 1.0)));
}

#[test]
fn test_overlaps_unknown_is_false() {
    let a = area(0.0, 0.0, 4.0, 4.0);
    assert!(!a.overlaps(&Area::new()));
    assert!(!Area::new().overlaps(&a));
}

#[test]
fn test_copy_is_independent() {
    let a = area(1.0, 2.0, 3.0, 4.0);
    let mut b = a.copy();
    b.left = Some(9.0);
    assert_eq!(a.left, Some(1.0));

    let mut target = Area::new();
    a.copy_into(&mut target);
    assert_eq!(target, a);
}

#[test]
fn test_pixel_conversion() {
    let units = Units::new(100.0);
    let a = area(1.0, 0.5, 2.0, 1.5);

    let pixels = a.pixels(units);
    assert!(matches!(pixels, Cow::Owned(_)));
    assert!(pixels.is_pixels);
    assert_eq!(pixels.left, Some(100.0));
    assert_eq!(pixels.height, Some(150.0));
    assert!(matches!(pixels.pixels(units), Cow::Borrowed(_)));

    let inches = pixels.inches(units);
    assert!(!inches.is_pixels);
    assert_eq!(inches.width, Some(2.0));
    assert!(matches!(a.inches(units), Cow::Borrowed(_)));
}

#[test]
fn test_pixel_conversion_keeps_unknowns() {
    let pixels = Area::new().pixels(Units::default()).into_owned();
    assert!(pixels.is_empty());
    assert_eq!(pixels.page_left(), None);
}

#[test]
fn test_resolved_rect() {
    let mut a = area(1.0, 2.0, 3.0, 4.0);
    a.set_page_left(Some(5.0));
    assert_eq!(
        a.resolved_rect(),
        Some(Rect {
            x: 5.0,
            y: 2.0,
            width: 3.0,
            height: 4.0
        })
    );

    a.height = None;
    assert_eq!(a.resolved_rect(), None);
}

#[test]
fn test_align_parsing() {
    let alignment: Alignment =
        serde_json::from_str(r#"{ "horizontal": "center", "vertical": "bottom" }"#).unwrap();
    assert_eq!(alignment, Alignment::new(Align::Center, Align::BOTTOM));

    let alignment: Alignment = serde_json::from_str(r#"{ "vertical": "top" }"#).unwrap();
    assert_eq!(alignment, Alignment::new(Align::Inherit, Align::TOP));
    assert_eq!(serde_json::to_string(&Align::Right).unwrap(), r#""right""#);
}
