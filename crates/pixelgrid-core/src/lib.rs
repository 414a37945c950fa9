//! # PixelGrid Core
//!
//! Core types and utilities for the PixelGrid canvas widget.
//! Provides the geometry primitives, grid snapping, and configuration
//! model shared by the interaction layer.
//!
//! ## Core Components
//!
//! - **Geometry**: `Point` and `Rect` value types plus the snapping,
//!   clamping, and easing helpers everything above is built on
//! - **Configuration**: grid, selection, and zoom-envelope options with
//!   validated constructors
//! - **Errors**: configuration errors (the geometry itself is total and
//!   never fails at runtime)

pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;

pub use config::{GridConfig, MaskConfig, ScaleConfig, SelectConfig, WidgetConfig};
pub use error::{ConfigError, Result};
pub use geometry::{clamp, ease_in_out_sine, remap, snap_to_cell, Point, Rect};
