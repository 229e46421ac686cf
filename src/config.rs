//! Editor configuration
//!
//! Read from `~/.config/linecursor/config.yaml` (or an explicit path).
//! Missing or unreadable files fall back to defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::metrics::{GlyphMetrics, MetricsError};
use crate::view::geometry::{PixelPoint, Rect};

/// Reference glyph run the glyph metrics are derived from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceGlyph {
    pub text: String,
    pub width: f32,
    pub height: f32,
}

impl Default for ReferenceGlyph {
    fn default() -> Self {
        Self {
            text: "0123456789".to_string(),
            width: 100.0,
            height: 20.0,
        }
    }
}

/// Placement of the code area in the host window (pixels)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub origin_top: f32,
    pub origin_left: f32,
    /// Line-number gutter width, left of the origin
    pub gutter_width: f32,
    pub area_width: f32,
    pub area_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin_top: 0.0,
            origin_left: 50.0,
            gutter_width: 50.0,
            area_width: 800.0,
            area_height: 600.0,
        }
    }
}

impl LayoutConfig {
    pub fn origin(&self) -> PixelPoint {
        PixelPoint::new(self.origin_top, self.origin_left)
    }
}

/// Editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Cursor blink half-period in milliseconds
    #[serde(default = "default_blink_interval_ms")]
    pub blink_interval_ms: u64,
    #[serde(default)]
    pub reference_glyph: ReferenceGlyph,
    #[serde(default)]
    pub layout: LayoutConfig,
}

fn default_blink_interval_ms() -> u64 {
    500
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            blink_interval_ms: default_blink_interval_ms(),
            reference_glyph: ReferenceGlyph::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl EditorConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        Self::load_from(&path)
    }

    /// Load config from an explicit path, falling back to defaults on error
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn blink_interval(&self) -> Duration {
        Duration::from_millis(self.blink_interval_ms)
    }

    /// Derive glyph metrics from the configured reference glyph
    pub fn glyph_metrics(&self) -> Result<GlyphMetrics, MetricsError> {
        let glyph = &self.reference_glyph;
        GlyphMetrics::derive(&glyph.text, Rect::new(0.0, 0.0, glyph.width, glyph.height))
    }
}
