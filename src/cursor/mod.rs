//! Cursor controller - click, directional and newline navigation
//!
//! Owns the single cursor of an editor session. The cursor keeps two
//! coordinates in lock-step: the logical grid position and the pixel anchor
//! the host paints at. Every placement goes through [`GridGeometry`] so the
//! two cannot drift.

pub mod adjacency;

use serde::Serialize;

use crate::messages::Direction;
use crate::metrics::GlyphMetrics;
use crate::model::grid::{GridError, GridModel, GridPosition};
use crate::view::geometry::{GridGeometry, PixelPoint, Rect};
use crate::view::hit_test::{HitTarget, Layout, PointerEvent};

/// Current cursor in both coordinate systems
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CursorPosition {
    pub grid: GridPosition,
    pub pixel: PixelPoint,
}

/// Pixel anchor of the glyph slot nearest to a click inside a token.
///
/// Picks the smallest slot `i` whose right edge, pulled back by half a glyph,
/// reaches `x`. A click exactly on a glyph's midpoint stays on that glyph's
/// slot; anything past it snaps to the next slot.
pub fn snap_to_glyph_slot(bounds: Rect, glyph_count: usize, x: f32) -> PixelPoint {
    let count = glyph_count.max(1);
    let width = bounds.width / count as f32;
    let half = width * 0.5;

    let mut index = 0;
    while index < count && bounds.left + (index as f32 * width + width) - half < x {
        index += 1;
    }

    PixelPoint::new(bounds.top, bounds.left + index as f32 * width)
}

/// The cursor of one editor session
#[derive(Debug, Clone)]
pub struct CursorController {
    metrics: GlyphMetrics,
    current: CursorPosition,
}

impl CursorController {
    /// Cursor at the buffer's minimum position
    pub fn new(metrics: GlyphMetrics, grid: &GridModel) -> Self {
        Self {
            metrics,
            current: CursorPosition {
                grid: GridPosition::default(),
                pixel: grid.minimum_position(),
            },
        }
    }

    #[inline]
    pub fn position(&self) -> CursorPosition {
        self.current
    }

    #[inline]
    pub fn pixel(&self) -> PixelPoint {
        self.current.pixel
    }

    #[inline]
    pub fn grid_position(&self) -> GridPosition {
        self.current.grid
    }

    #[inline]
    pub fn metrics(&self) -> GlyphMetrics {
        self.metrics
    }

    pub fn geometry(&self, grid: &GridModel) -> GridGeometry {
        GridGeometry::for_grid(self.metrics, grid)
    }

    /// Move to a grid position, recomputing the pixel anchor
    pub fn place(&mut self, grid: &GridModel, pos: GridPosition) -> Result<PixelPoint, GridError> {
        let columns = grid.column_count(pos.line)?;
        if pos.column > columns {
            return Err(GridError::ColumnOutOfRange {
                line: pos.line,
                column: pos.column,
                column_count: columns,
            });
        }
        Ok(self.commit(grid, pos))
    }

    /// Store an already validated grid position with its derived pixel anchor
    fn commit(&mut self, grid: &GridModel, pos: GridPosition) -> PixelPoint {
        self.current = CursorPosition {
            grid: pos,
            pixel: self.geometry(grid).to_pixel(pos),
        };
        self.current.pixel
    }

    /// Back to the buffer origin
    pub fn reset(&mut self, grid: &GridModel) -> PixelPoint {
        self.commit(grid, GridPosition::default())
    }

    /// Resolve a pointer click into a cursor position.
    ///
    /// Clicks on anything but a token, a line's code area or the buffer area
    /// leave the cursor where it is.
    pub fn resolve_from_pointer(
        &mut self,
        grid: &GridModel,
        event: &PointerEvent,
    ) -> PixelPoint {
        match event.target {
            HitTarget::Token { .. } => {
                let glyphs = match event.text.as_deref() {
                    Some(text) if !text.is_empty() => text.chars().count(),
                    _ => (event.bounds.width / self.metrics.horizontal_step())
                        .round()
                        .max(1.0) as usize,
                };
                let slot = snap_to_glyph_slot(event.bounds, glyphs, event.x);
                let pos = self.geometry(grid).to_grid(grid, slot);
                self.commit(grid, pos);
            }
            HitTarget::LineArea { line } => match grid.line_end(line) {
                Ok(end) => {
                    self.commit(grid, end);
                }
                Err(e) => tracing::warn!("Ignoring click on stale line area: {}", e),
            },
            HitTarget::BufferArea => {
                self.commit(grid, grid.buffer_end());
            }
            HitTarget::Gutter { .. } | HitTarget::Nothing => {
                tracing::trace!(hit = ?event.target, "Click outside code area, cursor unchanged");
            }
        }

        tracing::debug!(
            hit = ?event.target,
            x = event.x,
            cursor = ?self.current,
            "Pointer resolved"
        );
        self.current.pixel
    }

    /// Move one step in `direction`.
    ///
    /// The cell one glyph step away is hit-tested at its center: a token is
    /// accepted, nothing at all resets to the buffer origin, and anything
    /// else in the editor goes through the adjacency rule. The pixel anchor
    /// always comes from the resulting grid position.
    pub fn move_directional(
        &mut self,
        grid: &GridModel,
        layout: &dyn Layout,
        direction: Direction,
    ) -> Result<PixelPoint, GridError> {
        let (dy, dx) = direction.offsets();
        let (delta_top, delta_left) = self.metrics.pixel_delta(dy, dx);
        let candidate = self.current.pixel.offset(
            delta_top + self.metrics.vertical_step() * 0.5,
            delta_left + self.metrics.horizontal_step() * 0.5,
        );
        let hit = layout.hit_test(grid, candidate);

        match hit {
            HitTarget::Token { line, column } => {
                self.place(grid, GridPosition::new(line, column))?;
            }
            HitTarget::Nothing => {
                tracing::debug!(?direction, "Move left the grid, resetting to origin");
                self.reset(grid);
            }
            HitTarget::LineArea { .. } | HitTarget::Gutter { .. } | HitTarget::BufferArea => {
                match adjacency::resolve(grid, self.current.grid, direction)? {
                    Some(target) => {
                        self.place(grid, target)?;
                    }
                    None => tracing::debug!(?direction, "No adjacent token, cursor unchanged"),
                }
            }
        }

        tracing::debug!(?direction, ?hit, cursor = ?self.current, "Moved cursor");
        Ok(self.current.pixel)
    }

    /// Insert an empty line after the cursor's line and move onto it
    pub fn insert_line_after_current(
        &mut self,
        grid: &mut GridModel,
    ) -> Result<PixelPoint, GridError> {
        let line = self.current.grid.line;
        let next_number = grid.line_at(line)?.number() + 1;

        let new_index = grid.insert_line_after(line)?;
        debug_assert_eq!(grid.line_at(new_index).map(|l| l.number()), Ok(next_number));

        let pixel = self.place(grid, GridPosition::new(new_index, 0))?;
        tracing::debug!(line, new_index, next_number, "Cursor moved to inserted line");
        Ok(pixel)
    }
}
