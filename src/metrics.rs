//! Glyph metrics - the uniform pixel step of one grid cell
//!
//! Derived once from a reference glyph's bounding box. The code area is
//! assumed monospace, so the same step applies to every column and line.

use serde::Serialize;

use crate::view::geometry::Rect;

/// Errors that can occur when deriving glyph metrics
#[derive(Debug, Clone, PartialEq)]
pub enum MetricsError {
    /// Reference glyph text has no characters to divide the width by
    EmptyReferenceText,
    /// Reference box width or height is zero, negative or not finite
    NonPositiveExtent { width: f32, height: f32 },
}

impl std::fmt::Display for MetricsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyReferenceText => write!(f, "invalid glyph metrics: empty reference text"),
            Self::NonPositiveExtent { width, height } => write!(
                f,
                "invalid glyph metrics: reference box is {}x{}",
                width, height
            ),
        }
    }
}

impl std::error::Error for MetricsError {}

/// Horizontal and vertical pixel step of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlyphMetrics {
    horizontal_step: f32,
    vertical_step: f32,
}

impl GlyphMetrics {
    /// Derive the steps from a reference glyph run and its bounding box.
    ///
    /// `horizontal_step = width / chars`, `vertical_step = height`.
    pub fn derive(reference_text: &str, reference_box: Rect) -> Result<Self, MetricsError> {
        let chars = reference_text.chars().count();
        if chars == 0 {
            return Err(MetricsError::EmptyReferenceText);
        }
        Self::from_steps(reference_box.width / chars as f32, reference_box.height).map_err(
            |_| MetricsError::NonPositiveExtent {
                width: reference_box.width,
                height: reference_box.height,
            },
        )
    }

    /// Build metrics from steps the host already knows
    pub fn from_steps(horizontal_step: f32, vertical_step: f32) -> Result<Self, MetricsError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(horizontal_step) || !valid(vertical_step) {
            return Err(MetricsError::NonPositiveExtent {
                width: horizontal_step,
                height: vertical_step,
            });
        }
        Ok(Self {
            horizontal_step,
            vertical_step,
        })
    }

    #[inline]
    pub fn horizontal_step(&self) -> f32 {
        self.horizontal_step
    }

    #[inline]
    pub fn vertical_step(&self) -> f32 {
        self.vertical_step
    }

    /// Pixel delta for a unit move of `dy` lines and `dx` columns
    #[inline]
    pub fn pixel_delta(&self, dy: i32, dx: i32) -> (f32, f32) {
        (
            dy as f32 * self.vertical_step,
            dx as f32 * self.horizontal_step,
        )
    }
}
