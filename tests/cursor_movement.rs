//! Cursor movement tests - arrow keys, line boundaries, grid boundaries

mod common;

use common::{cursor_at, layout_with_height, px, test_model, test_model_with_layout};
use linecursor::config::{LayoutConfig, ReferenceGlyph};
use linecursor::messages::Direction;
use linecursor::model::{AppModel, GridModel, GridPosition};
use linecursor::EditorConfig;
use linecursor::view::{HitTarget, Layout, PixelPoint, Rect};

fn step(model: &mut AppModel, direction: Direction) -> PixelPoint {
    model
        .cursor
        .move_directional(&model.grid, model.layout.as_ref(), direction)
        .unwrap()
}

// ========================================================================
// Intra-line moves
// ========================================================================

#[test]
fn test_right_moves_one_column() {
    let mut model = test_model("abc", 0, 1);
    assert_eq!(step(&mut model, Direction::Right), px(0, 2));
    assert_eq!(cursor_at(&model), (0, 2));
}

#[test]
fn test_right_then_left_round_trips() {
    for (line, column) in [(0, 1), (0, 2), (1, 1), (1, 2)] {
        let mut model = test_model("abcd\nefgh", line, column);
        let start = model.cursor.pixel();
        step(&mut model, Direction::Right);
        step(&mut model, Direction::Left);
        assert_eq!(model.cursor.pixel(), start, "from ({}, {})", line, column);
        assert_eq!(cursor_at(&model), (line, column));
    }
}

#[test]
fn test_left_from_line_end_lands_on_last_token() {
    let mut model = test_model("abc", 0, 3);
    assert_eq!(step(&mut model, Direction::Left), px(0, 2));
}

// ========================================================================
// End of line (adjacency rule)
// ========================================================================

#[test]
fn test_right_past_last_token_of_only_line_stays_put() {
    // [a,b,c], cursor on b: first Right lands on c, second has nowhere to go
    let mut model = test_model("abc", 0, 1);
    assert_eq!(step(&mut model, Direction::Right), px(0, 2));
    assert_eq!(step(&mut model, Direction::Right), px(0, 2));
    assert_eq!(cursor_at(&model), (0, 2));
}

#[test]
fn test_right_past_last_token_continues_on_next_line() {
    let mut model = test_model("abc\nxy", 0, 2);
    assert_eq!(step(&mut model, Direction::Right), px(1, 0));
    assert_eq!(cursor_at(&model), (1, 0));
}

#[test]
fn test_right_from_line_end_continues_on_next_line() {
    let mut model = test_model("abc\nxy", 0, 3);
    assert_eq!(step(&mut model, Direction::Right), px(1, 0));
}

#[test]
fn test_right_skips_empty_lines() {
    let mut model = test_model("ab\n\n\ncd", 0, 1);
    assert_eq!(step(&mut model, Direction::Right), px(3, 0));
}

#[test]
fn test_right_from_empty_line_goes_to_next_token() {
    let mut model = test_model("abc\n\nx", 1, 0);
    assert_eq!(step(&mut model, Direction::Right), px(2, 0));
}

#[test]
fn test_right_on_trailing_empty_line_is_no_op() {
    let mut model = test_model("abc\n", 1, 0);
    assert_eq!(step(&mut model, Direction::Right), px(1, 0));
}

#[test]
fn test_left_at_line_start_lands_after_previous_line() {
    let mut model = test_model("abc\nde", 1, 0);
    assert_eq!(step(&mut model, Direction::Left), px(0, 3));
    assert_eq!(cursor_at(&model), (0, 3));
}

#[test]
fn test_left_at_buffer_start_is_no_op() {
    let mut model = test_model("abc", 0, 0);
    assert_eq!(step(&mut model, Direction::Left), px(0, 0));
}

// ========================================================================
// Vertical moves
// ========================================================================

#[test]
fn test_down_onto_longer_line_keeps_column() {
    let mut model = test_model("ab\nwxyz", 0, 1);
    assert_eq!(step(&mut model, Direction::Down), px(1, 1));
}

#[test]
fn test_down_onto_shorter_line_snaps_to_line_end() {
    let mut model = test_model("abcdef\nxy", 0, 5);
    assert_eq!(step(&mut model, Direction::Down), px(1, 2));
    assert_eq!(cursor_at(&model), (1, 2));
}

#[test]
fn test_down_onto_empty_line_lands_at_its_origin() {
    let mut model = test_model("abc\n\nx", 0, 2);
    assert_eq!(step(&mut model, Direction::Down), px(1, 0));
}

#[test]
fn test_down_from_last_line_snaps_to_its_end() {
    let mut model = test_model("ab\ncd", 1, 1);
    assert_eq!(step(&mut model, Direction::Down), px(1, 2));
    assert_eq!(cursor_at(&model), (1, 2));
}

#[test]
fn test_down_past_code_area_resets_to_origin() {
    // Code area ends right under the last line: nothing is hit below it
    let mut model = test_model_with_layout("ab\ncd", 1, 1, Box::new(layout_with_height(40.0)));
    let minimum = model.grid.minimum_position();
    assert_eq!(step(&mut model, Direction::Down), minimum);
    assert_eq!(cursor_at(&model), (0, 0));
}

#[test]
fn test_up_onto_shorter_line_snaps_to_line_end() {
    let mut model = test_model("ab\nwxyz", 1, 3);
    assert_eq!(step(&mut model, Direction::Up), px(0, 2));
}

#[test]
fn test_up_onto_longer_line_keeps_column() {
    let mut model = test_model("wxyz\nab", 1, 1);
    assert_eq!(step(&mut model, Direction::Up), px(0, 1));
}

#[test]
fn test_up_from_first_line_resets_to_minimum_position() {
    let mut model = test_model("a\nb", 0, 0);
    assert_eq!(step(&mut model, Direction::Up), model.grid.minimum_position());

    let mut model = test_model("abc", 0, 2);
    assert_eq!(step(&mut model, Direction::Up), model.grid.minimum_position());
    assert_eq!(cursor_at(&model), (0, 0));
}

// ========================================================================
// Host layouts
// ========================================================================

/// Host that reports nothing anywhere
#[derive(Debug)]
struct EmptyHost;

impl Layout for EmptyHost {
    fn hit_test(&self, _grid: &GridModel, _point: PixelPoint) -> HitTarget {
        HitTarget::Nothing
    }

    fn bounds(&self, _grid: &GridModel, _target: HitTarget) -> Option<Rect> {
        None
    }
}

#[test]
fn test_nothing_hit_always_resets_to_origin() {
    let mut model = test_model_with_layout("abc\ndef", 1, 2, Box::new(EmptyHost));
    assert_eq!(step(&mut model, Direction::Right), px(0, 0));
    assert_eq!(cursor_at(&model), (0, 0));
}

#[test]
fn test_pixel_and_grid_stay_in_sync_over_a_walk() {
    let mut model = test_model("fn main() {\n    let x = 1;\n\n}", 0, 0);
    let walk = [
        Direction::Right,
        Direction::Right,
        Direction::Down,
        Direction::Down,
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Down,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];
    for direction in walk {
        step(&mut model, direction);
        let (line, column) = cursor_at(&model);
        assert_eq!(model.cursor.pixel(), px(line, column), "after {:?}", direction);
    }
}

// ========================================================================
// Fractional glyph steps
// ========================================================================

/// Model whose glyph step is `reference_width / 10` by 19.7, at an unaligned origin
fn fractional_model(reference_width: f32, text: &str) -> AppModel {
    let config = EditorConfig {
        reference_glyph: ReferenceGlyph {
            text: "0123456789".to_string(),
            width: reference_width,
            height: 19.7,
        },
        layout: LayoutConfig {
            origin_top: 3.3,
            origin_left: 47.1,
            ..LayoutConfig::default()
        },
        ..EditorConfig::default()
    };
    AppModel::new(config, Some(text)).unwrap()
}

fn assert_pixel_matches_grid(model: &AppModel, context: &str) {
    let expected = model
        .cursor
        .geometry(&model.grid)
        .to_pixel(model.cursor.grid_position());
    assert_eq!(model.cursor.pixel(), expected, "{}", context);
}

#[test]
fn test_right_walk_with_fractional_steps_wraps_at_line_end() {
    let text = format!("{}\nyz", "x".repeat(60));
    for width in [73.0, 96.0, 84.0, 88.0, 77.0, 61.0] {
        let mut model = fractional_model(width, &text);

        for i in 1..60 {
            step(&mut model, Direction::Right);
            assert_eq!(cursor_at(&model), (0, i), "width {} step {}", width, i);
            assert_pixel_matches_grid(&model, &format!("width {} step {}", width, i));
        }

        step(&mut model, Direction::Right);
        assert_eq!(cursor_at(&model), (1, 0), "width {} wrap", width);
        assert_pixel_matches_grid(&model, &format!("width {} wrap", width));
    }
}

#[test]
fn test_left_walk_with_fractional_steps_returns_to_start() {
    let text = format!("{}\nyz", "x".repeat(60));
    let mut model = fractional_model(73.0, &text);
    model
        .cursor
        .place(&model.grid, GridPosition::new(1, 0))
        .unwrap();

    step(&mut model, Direction::Left);
    assert_eq!(cursor_at(&model), (0, 60));
    for i in (0..60).rev() {
        step(&mut model, Direction::Left);
        assert_eq!(cursor_at(&model), (0, i));
        assert_pixel_matches_grid(&model, &format!("left to {}", i));
    }

    step(&mut model, Direction::Left);
    assert_eq!(cursor_at(&model), (0, 0));
}

#[test]
fn test_down_walk_with_fractional_steps_keeps_column() {
    let text = vec!["x".repeat(60); 25].join("\n");
    let mut model = fractional_model(73.0, &text);
    model
        .cursor
        .place(&model.grid, GridPosition::new(0, 37))
        .unwrap();

    for line in 1..25 {
        step(&mut model, Direction::Down);
        assert_eq!(cursor_at(&model), (line, 37));
        assert_pixel_matches_grid(&model, &format!("down to {}", line));
    }

    // Below the last line: buffer area, snaps to the last line's end
    step(&mut model, Direction::Down);
    assert_eq!(cursor_at(&model), (24, 60));
    assert_pixel_matches_grid(&model, "below last line");
}
