//! State dump for diagnostics
//!
//! Serializes a snapshot of the grid and cursor to JSON.

use serde::Serialize;

use crate::cursor::CursorPosition;
use crate::metrics::GlyphMetrics;
use crate::model::AppModel;

#[derive(Debug, Serialize)]
pub struct StateDump {
    pub metrics: GlyphMetrics,
    pub cursor: CursorPosition,
    pub cursor_visible: bool,
    pub lines: Vec<LineDump>,
}

#[derive(Debug, Serialize)]
pub struct LineDump {
    pub number: usize,
    pub text: String,
}

impl StateDump {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            metrics: model.cursor.metrics(),
            cursor: model.cursor.position(),
            cursor_visible: model.blink.visible,
            lines: model
                .grid
                .lines()
                .iter()
                .map(|line| LineDump {
                    number: line.number(),
                    text: line.text(),
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}
