//! linecursor - cursor and line-grid navigation for a monospace code area
//!
//! This crate provides the core types and logic for a blinking cursor over
//! a grid of numbered lines, implementing the Elm Architecture pattern.
//! Painting and glyph measurement are left to the host.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod cursor;
pub mod debug_dump;
pub mod input;
pub mod messages;
pub mod metrics;
pub mod model;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use cursor::CursorController;
pub use messages::Msg;
pub use metrics::GlyphMetrics;
pub use model::{AppModel, GridModel};
