//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging cursor
//! navigation and line insertion.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=linecursor::cursor=debug` - navigation decisions only
//! - `RUST_LOG=linecursor::update=trace` - cursor transition diffs
//!
//! # Log Files
//!
//! Logs are written to `~/.config/linecursor/logs/linecursor.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::AppModel;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering and goes to
/// stderr, keeping stdout free for the driver's own output.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "linecursor.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of cursor and buffer state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct CursorSnapshot {
    pub line: usize,
    pub column: usize,
    pub top: f32,
    pub left: f32,
    pub visible: bool,
    pub line_count: usize,
}

impl CursorSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        let position = model.cursor.position();
        Self {
            line: position.grid.line,
            column: position.grid.column,
            top: position.pixel.top,
            left: position.pixel.left,
            visible: model.blink.visible,
            line_count: model.grid.line_count(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &CursorSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.line != other.line || self.column != other.column {
            changes.push(format!(
                "cursor: ({},{}) → ({},{})",
                self.line, self.column, other.line, other.column
            ));
        }
        if self.top != other.top || self.left != other.left {
            changes.push(format!(
                "pixel: ({},{}) → ({},{})",
                self.top, self.left, other.top, other.left
            ));
        }
        if self.visible != other.visible {
            let status = if other.visible { "shown" } else { "hidden" };
            changes.push(format!("cursor {}", status));
        }
        if self.line_count != other.line_count {
            changes.push(format!(
                "lines: {} → {}",
                self.line_count, other.line_count
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
