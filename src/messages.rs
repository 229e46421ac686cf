//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::time::Instant;

use crate::view::geometry::PixelPoint;
use crate::view::hit_test::PointerEvent;

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step as `(dy, dx)`; exactly one of them is nonzero
    pub const fn offsets(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Cursor messages (clicks, arrow keys, Enter)
#[derive(Debug, Clone)]
pub enum CursorMsg {
    /// Pointer click already resolved by the host
    Click(PointerEvent),
    /// Pointer click at a pixel; the layout resolves the element under it
    ClickAt(PixelPoint),
    /// Move cursor one step in a direction
    Move(Direction),
    /// Insert an empty line after the cursor's line (Enter)
    InsertLine,
}

/// UI-specific messages (cursor blink)
#[derive(Debug, Clone)]
pub enum UiMsg {
    /// Advance the cursor blink to the given instant
    BlinkTick(Instant),
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Cursor(CursorMsg),
    Ui(UiMsg),
}
