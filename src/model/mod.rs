//! Application model - the complete state of one editor session
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod grid;
pub mod ui;

pub use grid::{Column, GridError, GridModel, GridPosition, Line, TokenRef};
pub use ui::CursorBlink;

use crate::config::EditorConfig;
use crate::cursor::CursorController;
use crate::metrics::{GlyphMetrics, MetricsError};
use crate::view::hit_test::{GridLayout, Layout};

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// The line grid
    pub grid: GridModel,
    /// The single cursor of this session
    pub cursor: CursorController,
    /// Cursor blink state
    pub blink: CursorBlink,
    /// Host hit-testing and geometry
    pub layout: Box<dyn Layout>,
    /// Editor configuration
    pub config: EditorConfig,
}

impl AppModel {
    /// Create a session from config, with the built-in monospace layout.
    ///
    /// Fails if the configured reference glyph yields invalid metrics.
    pub fn new(config: EditorConfig, text: Option<&str>) -> Result<Self, MetricsError> {
        let metrics = config.glyph_metrics()?;
        let origin = config.layout.origin();
        let grid = match text {
            Some(text) => GridModel::from_text(origin, text),
            None => GridModel::new(origin),
        };
        let layout = GridLayout::new(
            metrics,
            config.layout.gutter_width,
            config.layout.area_width,
            config.layout.area_height,
        );
        Ok(Self::with_layout(grid, metrics, Box::new(layout), config))
    }

    /// Create a session over an existing grid and host layout
    pub fn with_layout(
        grid: GridModel,
        metrics: GlyphMetrics,
        layout: Box<dyn Layout>,
        config: EditorConfig,
    ) -> Self {
        let cursor = CursorController::new(metrics, &grid);
        let blink = CursorBlink::new(config.blink_interval());
        Self {
            grid,
            cursor,
            blink,
            layout,
            config,
        }
    }
}
