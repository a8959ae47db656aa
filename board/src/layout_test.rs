#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Rect math
// =============================================================

#[test]
fn relative_to_maps_viewport_rects_into_board_space() {
    let board = Rect::new(100.0, 40.0, 800.0, 600.0);
    let card = Rect::new(130.0, 90.0, 200.0, 150.0);
    let rel = card.relative_to(&board);
    assert_eq!(rel, Rect::new(30.0, 50.0, 200.0, 150.0));
}

#[test]
fn translated_offsets_origin_only() {
    let rect = Rect::new(10.0, 20.0, 5.0, 6.0);
    let moved = rect.translated(15.0, -20.0);
    assert_eq!(moved, Rect::new(25.0, 0.0, 5.0, 6.0));
}

// =============================================================
// Export sizing
// =============================================================

#[test]
fn sizing_is_width_proportional_in_the_middle_range() {
    let sizing = export_sizing(1200.0);
    assert_eq!(sizing.font_px, 30.0);
    assert_eq!(sizing.gap_px, 80.0);
}

#[test]
fn sizing_clamps_to_minimums_for_narrow_boards() {
    let sizing = export_sizing(100.0);
    assert_eq!(sizing.font_px, 20.0);
    assert_eq!(sizing.gap_px, 32.0);
}

#[test]
fn sizing_clamps_to_maximums_for_wide_boards() {
    let sizing = export_sizing(10_000.0);
    assert_eq!(sizing.font_px, 48.0);
    assert_eq!(sizing.gap_px, 128.0);
}

#[test]
fn sizing_clamps_are_ordered() {
    for width in [0.0, 500.0, 1000.0, 2000.0, 6000.0] {
        let sizing = export_sizing(width);
        assert!((20.0..=48.0).contains(&sizing.font_px), "width {width}");
        assert!((32.0..=128.0).contains(&sizing.gap_px), "width {width}");
    }
}

// =============================================================
// Capture regions
// =============================================================

#[test]
fn visible_region_tracks_scroll_state() {
    let region = visible_region(250.0, 0.0, 1024.0, 768.0);
    assert_eq!(region, Rect::new(250.0, 0.0, 1024.0, 768.0));
}

#[test]
fn full_region_covers_content_from_origin() {
    let region = full_region(3200.0, 900.0);
    assert_eq!(region, Rect::new(0.0, 0.0, 3200.0, 900.0));
}
