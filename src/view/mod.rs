//! View layer seams: geometry, hit-testing, and the host painter
//!
//! Rendering itself belongs to the host. The core only tells it where the
//! cursor goes and whether it is visible.

pub mod geometry;

pub use geometry::{GridGeometry, PixelPoint, Rect};
pub use hit_test::{GridLayout, HitTarget, Layout, PointerEvent};

/// Paints the visual cursor on behalf of the core
pub trait Painter {
    /// Move the visual cursor to `at`
    fn move_cursor(&mut self, at: PixelPoint);

    /// Show or hide the visual cursor
    fn set_cursor_visible(&mut self, visible: bool);
}

/// Painter that records every request, for headless hosts and tests
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingPainter {
    pub position: Option<PixelPoint>,
    pub visible: bool,
    pub moves: Vec<PixelPoint>,
}

impl Painter for RecordingPainter {
    fn move_cursor(&mut self, at: PixelPoint) {
        self.position = Some(at);
        self.moves.push(at);
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
