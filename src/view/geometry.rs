//! Centralized geometry helpers for cursor placement and hit-testing
//!
//! This module is the single source of truth for converting between the
//! logical grid (line, column) and pixel space. Both the cursor controller
//! and the built-in layout go through [`GridGeometry`], so the pixel cursor
//! and the logical cursor can never drift apart.
//!
//! All functions here are pure (no I/O, no side effects).

use serde::Serialize;

use crate::metrics::GlyphMetrics;
use crate::model::grid::GridModel;
use crate::model::GridPosition;

/// A point in code-area coordinates (pixels)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PixelPoint {
    pub top: f32,
    pub left: f32,
}

impl PixelPoint {
    pub const fn new(top: f32, left: f32) -> Self {
        Self { top, left }
    }

    /// Shift the point by a pixel delta
    #[inline]
    pub fn offset(self, dy: f32, dx: f32) -> Self {
        Self {
            top: self.top + dy,
            left: self.left + dx,
        }
    }
}

/// A pixel bounding box as reported by the host (or computed by the layout)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Half-open containment: the top/left edges belong to the box, the
    /// bottom/right edges belong to the neighbour.
    #[inline]
    pub fn contains(&self, point: PixelPoint) -> bool {
        point.left >= self.left
            && point.left < self.right()
            && point.top >= self.top
            && point.top < self.bottom()
    }
}

/// Converts grid coordinates to pixels and back for a monospace code area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub metrics: GlyphMetrics,
    /// Top-left of the first line's code area
    pub origin: PixelPoint,
}

impl GridGeometry {
    pub fn new(metrics: GlyphMetrics, origin: PixelPoint) -> Self {
        Self { metrics, origin }
    }

    /// Geometry for a buffer, anchored at its minimum position
    pub fn for_grid(metrics: GlyphMetrics, grid: &GridModel) -> Self {
        Self::new(metrics, grid.minimum_position())
    }

    /// Pixel anchor of a grid position (the left edge of `column`).
    ///
    /// `column == line length` yields the right edge of the last column.
    pub fn to_pixel(&self, pos: GridPosition) -> PixelPoint {
        PixelPoint::new(
            self.origin.top + pos.line as f32 * self.metrics.vertical_step(),
            self.origin.left + pos.column as f32 * self.metrics.horizontal_step(),
        )
    }

    /// Nearest grid position to a pixel point, clamped into the buffer.
    ///
    /// The column may equal the line's length ("after the last column").
    pub fn to_grid(&self, grid: &GridModel, point: PixelPoint) -> GridPosition {
        let last_line = grid.line_count().saturating_sub(1);
        let line = Self::nearest_index(
            point.top - self.origin.top,
            self.metrics.vertical_step(),
            last_line,
        );
        let max_column = grid.column_count(line).unwrap_or(0);
        let column = Self::nearest_index(
            point.left - self.origin.left,
            self.metrics.horizontal_step(),
            max_column,
        );
        GridPosition::new(line, column)
    }

    /// Line band index containing `top`, if it is at or below the origin
    pub fn line_at_top(&self, top: f32) -> Option<usize> {
        let offset = top - self.origin.top;
        if offset < 0.0 {
            return None;
        }
        Some((offset / self.metrics.vertical_step()).floor() as usize)
    }

    /// Column slot containing `left`, if it is at or right of the origin
    pub fn column_at_left(&self, left: f32) -> Option<usize> {
        let offset = left - self.origin.left;
        if offset < 0.0 {
            return None;
        }
        Some((offset / self.metrics.horizontal_step()).floor() as usize)
    }

    /// Bounding box of a single column
    pub fn token_rect(&self, line: usize, column: usize) -> Rect {
        let top_left = self.to_pixel(GridPosition::new(line, column));
        Rect::new(
            top_left.top,
            top_left.left,
            self.metrics.horizontal_step(),
            self.metrics.vertical_step(),
        )
    }

    /// Bounding box of a line's code area of the given width
    pub fn line_rect(&self, line: usize, width: f32) -> Rect {
        let top_left = self.to_pixel(GridPosition::new(line, 0));
        Rect::new(
            top_left.top,
            top_left.left,
            width,
            self.metrics.vertical_step(),
        )
    }

    fn nearest_index(offset: f32, step: f32, max: usize) -> usize {
        let index = (offset / step).round();
        if index <= 0.0 {
            0
        } else {
            (index as usize).min(max)
        }
    }
}
