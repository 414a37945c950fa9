//! Error handling for PixelGrid.
//!
//! The interaction core has no recoverable runtime errors: pointer and
//! wheel inputs are always well-formed numbers, and out-of-range geometry
//! is silently clamped. What can go wrong is construction with a malformed
//! configuration, which is a programming error surfaced at initialization.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Configuration error type
///
/// Represents invalid widget configuration detected when a config value
/// is validated. These are construction-time failures, never runtime
/// conditions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Scale envelope is inverted or degenerate
    #[error("Invalid scale range: min {min} must be positive and below max {max}")]
    ScaleRange {
        /// The configured minimum (or start) scale.
        min: f64,
        /// The configured maximum scale.
        max: f64,
    },

    /// Zoom speed must be positive
    #[error("Invalid scale speed: {speed} (must be > 0)")]
    ScaleSpeed {
        /// The configured per-tick speed.
        speed: f64,
    },

    /// Cell size must be positive
    #[error("Invalid cell size: {cell_size} (must be > 0)")]
    CellSize {
        /// The configured cell edge length.
        cell_size: f64,
    },

    /// Grid must have at least one cell per side
    #[error("Invalid grid dimensions: {dimensions} (must be > 0)")]
    Dimensions {
        /// The configured cells-per-side count.
        dimensions: u32,
    },

    /// Mask opacity outside the renderable range
    #[error("Invalid mask opacity: {opacity} (must be finite)")]
    MaskOpacity {
        /// The configured opacity.
        opacity: f64,
    },
}

/// Result alias for configuration validation.
pub type Result<T> = std::result::Result<T, ConfigError>;
