//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.
//!
//! Default geometry: code area origin at (top 0, left 50), glyph step
//! 10 x 20, a 50px gutter, and an 800 x 600 code area.

#![allow(dead_code)]

use linecursor::model::{AppModel, GridPosition};
use linecursor::view::{GridLayout, Layout, PixelPoint};
use linecursor::{EditorConfig, GlyphMetrics, GridModel};

pub const ORIGIN: PixelPoint = PixelPoint::new(0.0, 50.0);
pub const STEP_X: f32 = 10.0;
pub const STEP_Y: f32 = 20.0;

/// Create a test model with given text and cursor position
pub fn test_model(text: &str, line: usize, column: usize) -> AppModel {
    let mut model = AppModel::new(EditorConfig::default(), Some(text)).unwrap();
    model
        .cursor
        .place(&model.grid, GridPosition::new(line, column))
        .unwrap();
    model
}

/// Create a test model over a custom host layout
pub fn test_model_with_layout(
    text: &str,
    line: usize,
    column: usize,
    layout: Box<dyn Layout>,
) -> AppModel {
    let grid = GridModel::from_text(ORIGIN, text);
    let mut model = AppModel::with_layout(grid, metrics(), layout, EditorConfig::default());
    model
        .cursor
        .place(&model.grid, GridPosition::new(line, column))
        .unwrap();
    model
}

pub fn metrics() -> GlyphMetrics {
    GlyphMetrics::from_steps(STEP_X, STEP_Y).unwrap()
}

/// Built-in layout with a code area of the given height
pub fn layout_with_height(area_height: f32) -> GridLayout {
    GridLayout::new(metrics(), 50.0, 800.0, area_height)
}

/// Pixel anchor of a grid position under the default geometry
pub fn px(line: usize, column: usize) -> PixelPoint {
    PixelPoint::new(
        ORIGIN.top + line as f32 * STEP_Y,
        ORIGIN.left + column as f32 * STEP_X,
    )
}

/// Current cursor as (line, column)
pub fn cursor_at(model: &AppModel) -> (usize, usize) {
    let pos = model.cursor.grid_position();
    (pos.line, pos.column)
}

/// Displayed line numbers, in buffer order
pub fn line_numbers(model: &AppModel) -> Vec<usize> {
    model.grid.lines().iter().map(|l| l.number()).collect()
}
