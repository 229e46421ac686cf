//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The core never paints; it hands these to the host's [`Painter`].

use crate::view::geometry::PixelPoint;
use crate::view::Painter;

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Move the visual cursor
    PaintCursor(PixelPoint),
    /// Show or hide the visual cursor
    SetCursorVisible(bool),
    /// Multiple commands, applied in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Paint the cursor at `at` and make it visible
    pub fn show_cursor_at(at: PixelPoint) -> Self {
        Cmd::Batch(vec![Cmd::PaintCursor(at), Cmd::SetCursorVisible(true)])
    }

    /// Hand the command to the host painter
    pub fn apply(self, painter: &mut dyn Painter) {
        match self {
            Cmd::PaintCursor(at) => painter.move_cursor(at),
            Cmd::SetCursorVisible(visible) => painter.set_cursor_visible(visible),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    cmd.apply(painter);
                }
            }
        }
    }
}
