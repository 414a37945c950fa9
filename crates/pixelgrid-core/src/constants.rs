//! Shared constants for grid and zoom defaults.

/// Default edge length of one grid cell, in logical pixels.
pub const DEFAULT_CELL_SIZE: f64 = 5.0;

/// Default number of cells per canvas side.
pub const DEFAULT_DIMENSIONS: u32 = 100;

/// Default grid line width, in logical pixels.
pub const DEFAULT_LINE_WIDTH: f64 = 0.1;

/// Lowest zoom factor reachable in simple mode.
pub const MIN_SCALE: f64 = 0.4;

/// Highest zoom factor reachable in either mode.
pub const MAX_SCALE: f64 = 10.0;

/// Scale change applied per wheel tick.
pub const DEFAULT_SCALE_SPEED: f64 = 0.1;

/// Starting scale for the eased zoom envelope.
pub const DEFAULT_SCALE_START: f64 = 1.0;

/// Default mask border width, in logical pixels.
pub const DEFAULT_MASK_LINE_WIDTH: f64 = 2.0;

/// Default mask border color.
pub const DEFAULT_MASK_LINE_COLOR: &str = "rgb(10 2 255 / 54%)";

/// Default opacity of the dimmed area outside the selection.
pub const DEFAULT_MASK_OPACITY: f64 = 0.7;
