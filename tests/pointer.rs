//! Pointer click tests - token slots, midpoint rule, line and buffer areas

mod common;

use common::{cursor_at, px, test_model};
use linecursor::view::{HitTarget, PixelPoint, PointerEvent, Rect};

#[test]
fn test_click_inside_each_column_lands_on_its_left_edge() {
    let mut model = test_model("abc\nde\n\nfghij", 0, 0);
    let lines: Vec<usize> = model.grid.lines().iter().map(|l| l.len()).collect();

    for (line, &len) in lines.iter().enumerate() {
        for column in 0..len {
            let top_left = px(line, column);
            let click = PixelPoint::new(top_left.top + 7.0, top_left.left + 2.0);
            let event = model.layout.pointer_event(&model.grid, click);
            assert_eq!(event.target, HitTarget::Token { line, column });

            let pixel = model.cursor.resolve_from_pointer(&model.grid, &event);
            assert_eq!(pixel, top_left);
            assert_eq!(cursor_at(&model), (line, column));
        }
    }
}

#[test]
fn test_click_on_midpoint_stays_on_glyph() {
    let mut model = test_model("abc", 0, 0);
    let event = PointerEvent::new(
        HitTarget::Token { line: 0, column: 0 },
        Rect::new(0.0, 50.0, 30.0, 20.0),
        65.0,
        Some("abc".to_string()),
    );
    assert_eq!(model.cursor.resolve_from_pointer(&model.grid, &event), px(0, 1));
    assert_eq!(cursor_at(&model), (0, 1));
}

#[test]
fn test_click_past_midpoint_snaps_to_next_slot() {
    let mut model = test_model("abc", 0, 0);
    let event = PointerEvent::new(
        HitTarget::Token { line: 0, column: 0 },
        Rect::new(0.0, 50.0, 30.0, 20.0),
        66.0,
        Some("abc".to_string()),
    );
    assert_eq!(model.cursor.resolve_from_pointer(&model.grid, &event), px(0, 2));
}

#[test]
fn test_click_on_right_half_of_last_glyph_lands_after_it() {
    let mut model = test_model("abc", 0, 0);
    let event = model
        .layout
        .pointer_event(&model.grid, PixelPoint::new(3.0, 78.0));
    assert_eq!(model.cursor.resolve_from_pointer(&model.grid, &event), px(0, 3));
    assert_eq!(cursor_at(&model), (0, 3));
}

#[test]
fn test_token_without_text_uses_glyph_step() {
    let mut model = test_model("abcd", 0, 0);
    let event = PointerEvent::new(
        HitTarget::Token { line: 0, column: 0 },
        Rect::new(0.0, 50.0, 40.0, 20.0),
        74.0,
        None,
    );
    assert_eq!(model.cursor.resolve_from_pointer(&model.grid, &event), px(0, 2));
}

#[test]
fn test_click_on_empty_line_area_lands_at_its_origin() {
    let mut model = test_model("abc\n\nxy", 0, 2);
    let event = model
        .layout
        .pointer_event(&model.grid, PixelPoint::new(25.0, 300.0));
    assert_eq!(event.target, HitTarget::LineArea { line: 1 });

    assert_eq!(model.cursor.resolve_from_pointer(&model.grid, &event), px(1, 0));
    assert_eq!(cursor_at(&model), (1, 0));
}

#[test]
fn test_click_past_line_end_lands_after_last_column() {
    let mut model = test_model("abc\nxy", 0, 0);
    let event = model
        .layout
        .pointer_event(&model.grid, PixelPoint::new(25.0, 400.0));
    assert_eq!(model.cursor.resolve_from_pointer(&model.grid, &event), px(1, 2));
}

#[test]
fn test_click_below_all_lines_lands_at_buffer_end() {
    let mut model = test_model("abc\nxyz1", 0, 0);
    let event = model
        .layout
        .pointer_event(&model.grid, PixelPoint::new(300.0, 60.0));
    assert_eq!(event.target, HitTarget::BufferArea);

    assert_eq!(model.cursor.resolve_from_pointer(&model.grid, &event), px(1, 4));
    assert_eq!(cursor_at(&model), (1, 4));
}

#[test]
fn test_click_on_gutter_or_outside_is_no_op() {
    let mut model = test_model("abc\nxy", 1, 1);
    for click in [PixelPoint::new(5.0, 10.0), PixelPoint::new(5.0, 1000.0)] {
        let event = model.layout.pointer_event(&model.grid, click);
        assert_eq!(model.cursor.resolve_from_pointer(&model.grid, &event), px(1, 1));
        assert_eq!(cursor_at(&model), (1, 1));
    }
}

#[test]
fn test_click_on_stale_line_is_ignored() {
    let mut model = test_model("abc", 0, 1);
    let event = PointerEvent::new(
        HitTarget::LineArea { line: 7 },
        Rect::new(140.0, 50.0, 800.0, 20.0),
        60.0,
        None,
    );
    assert_eq!(model.cursor.resolve_from_pointer(&model.grid, &event), px(0, 1));
}
