//! # PixelGrid
//!
//! An embeddable pannable/zoomable grid canvas with a draggable,
//! resizable, grid-snapped selection rectangle.
//!
//! ## Architecture
//!
//! PixelGrid is organized as a workspace with two crates:
//!
//! 1. **pixelgrid-core** - Geometry primitives, grid snapping, configuration
//! 2. **pixelgrid-widget** - Pan/zoom controllers, anchor compensation,
//!    selection gestures, overlay geometry
//!
//! The root crate re-exports the public surface and ships a small demo
//! binary that drives the widget with a scripted event sequence.

pub use pixelgrid_core::{
    clamp, ease_in_out_sine, remap, snap_to_cell, ConfigError, GridConfig, MaskConfig, Point, Rect,
    ScaleConfig, SelectConfig, WidgetConfig,
};

pub use pixelgrid_widget::{
    Cursor, EventResponse, GridBox, GridPattern, HandleLayout, MaskFrame, PanController,
    SelectionGesture, SelectionMachine, ViewTransform, Viewport, ZoomController,
};

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and `RUST_LOG`
/// environment variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .try_init()?;

    Ok(())
}
