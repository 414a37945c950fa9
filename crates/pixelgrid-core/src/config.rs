//! Widget configuration.
//!
//! Static per-instance parameters: grid resolution, selection overlay
//! appearance, and the zoom envelope. All fields have the documented
//! defaults; a malformed combination (inverted scale range, zero cell
//! size) is rejected up front by `validate` rather than surfacing as a
//! runtime condition later.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CELL_SIZE, DEFAULT_DIMENSIONS, DEFAULT_LINE_WIDTH, DEFAULT_MASK_LINE_COLOR,
    DEFAULT_MASK_LINE_WIDTH, DEFAULT_MASK_OPACITY, DEFAULT_SCALE_SPEED, DEFAULT_SCALE_START,
    MAX_SCALE, MIN_SCALE,
};
use crate::error::{ConfigError, Result};

/// Grid resolution and line rendering options.
///
/// The logical canvas is a square of `cell_size * dimensions` pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Whether the host should draw grid lines.
    pub enable: bool,
    /// Edge length of one cell, in logical pixels.
    pub cell_size: f64,
    /// Number of cells per canvas side.
    pub dimensions: u32,
    /// Grid line width, in logical pixels.
    pub line_width: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            enable: false,
            cell_size: DEFAULT_CELL_SIZE,
            dimensions: DEFAULT_DIMENSIONS,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl GridConfig {
    /// Logical canvas edge length in pixels.
    pub fn canvas_size(&self) -> f64 {
        self.cell_size * f64::from(self.dimensions)
    }

    /// Validates the grid parameters.
    pub fn validate(&self) -> Result<()> {
        if !(self.cell_size > 0.0) || !self.cell_size.is_finite() {
            return Err(ConfigError::CellSize {
                cell_size: self.cell_size,
            });
        }
        if self.dimensions == 0 {
            return Err(ConfigError::Dimensions {
                dimensions: self.dimensions,
            });
        }
        Ok(())
    }
}

/// Appearance of the mask overlay drawn around the selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskConfig {
    /// Corner radius of the selection border.
    pub radius: f64,
    /// Border stroke width.
    pub line_width: f64,
    /// Border stroke color, passed through to the host renderer.
    pub line_color: String,
    /// Opacity of the dimmed region outside the selection.
    pub opacity: f64,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            radius: 0.0,
            line_width: DEFAULT_MASK_LINE_WIDTH,
            line_color: DEFAULT_MASK_LINE_COLOR.to_string(),
            opacity: DEFAULT_MASK_OPACITY,
        }
    }
}

impl MaskConfig {
    /// Validates the mask parameters.
    pub fn validate(&self) -> Result<()> {
        if !self.opacity.is_finite() {
            return Err(ConfigError::MaskOpacity {
                opacity: self.opacity,
            });
        }
        Ok(())
    }
}

/// Selection overlay options.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectConfig {
    /// Whether the selection overlay is active at all.
    pub enable: bool,
    /// Mask overlay appearance.
    pub mask: MaskConfig,
}

/// Zoom envelope.
///
/// Two modes mirror the two zoom behaviors the widget supports:
///
/// - `Simple`: each wheel tick adds `speed` in the tick direction and the
///   result is clamped to `[min, max]`.
/// - `Eased`: wheel ticks advance an internal accumulator which is pushed
///   through a sinusoidal ease-in-out curve, so the zoom decelerates near
///   both ends of the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScaleConfig {
    /// Linear zoom with hard clamping.
    Simple {
        /// Lowest reachable scale. Must be positive.
        min: f64,
        /// Highest reachable scale.
        max: f64,
        /// Scale change per wheel tick.
        speed: f64,
    },
    /// Eased zoom; scale starts at `start` and never drops below it.
    Eased {
        /// Starting (and minimum) scale.
        start: f64,
        /// Highest reachable scale.
        max: f64,
        /// Accumulator change per wheel tick.
        speed: f64,
    },
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self::Simple {
            min: MIN_SCALE,
            max: MAX_SCALE,
            speed: DEFAULT_SCALE_SPEED,
        }
    }
}

impl ScaleConfig {
    /// Default eased-mode envelope.
    pub fn eased() -> Self {
        Self::Eased {
            start: DEFAULT_SCALE_START,
            max: MAX_SCALE,
            speed: DEFAULT_SCALE_SPEED,
        }
    }

    /// The scale the controller starts at.
    pub fn initial(&self) -> f64 {
        match *self {
            // Simple mode always starts at 1:1, clamped into the envelope.
            Self::Simple { min, max, .. } => DEFAULT_SCALE_START.clamp(min, max),
            Self::Eased { start, .. } => start,
        }
    }

    /// Lower bound of the envelope.
    pub fn floor(&self) -> f64 {
        match *self {
            Self::Simple { min, .. } => min,
            Self::Eased { start, .. } => start,
        }
    }

    /// Upper bound of the envelope.
    pub fn ceiling(&self) -> f64 {
        match *self {
            Self::Simple { max, .. } | Self::Eased { max, .. } => max,
        }
    }

    /// Per-tick speed.
    pub fn speed(&self) -> f64 {
        match *self {
            Self::Simple { speed, .. } | Self::Eased { speed, .. } => speed,
        }
    }

    /// Validates the envelope.
    pub fn validate(&self) -> Result<()> {
        let (min, max) = (self.floor(), self.ceiling());
        if !(min > 0.0) || !(min < max) || !min.is_finite() || !max.is_finite() {
            return Err(ConfigError::ScaleRange { min, max });
        }
        let speed = self.speed();
        if !(speed > 0.0) || !speed.is_finite() {
            return Err(ConfigError::ScaleSpeed { speed });
        }
        Ok(())
    }
}

/// Complete widget configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WidgetConfig {
    pub grid: GridConfig,
    pub select: SelectConfig,
    pub scale: ScaleConfig,
}

impl WidgetConfig {
    /// Validates every section.
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        self.select.mask.validate()?;
        self.scale.validate()?;
        Ok(())
    }
}
