//! # PixelGrid Widget
//!
//! The interaction core of the PixelGrid canvas: a pannable, zoomable
//! grid with a draggable, resizable selection rectangle. This crate owns
//! all of the coordinate-transform and gesture logic; rendering is left
//! to the host, which consumes the widget's outputs (an offset, a scale,
//! a rectangle, and pure-geometry overlay descriptions).
//!
//! ## Core Components
//!
//! - **Zoom controller**: wheel ticks into a bounded, optionally eased
//!   scale value
//! - **Pan controller**: pointer drags into a cumulative screen-space
//!   offset
//! - **Viewport**: maps page coordinates into logical grid space and
//!   keeps the point under the cursor visually fixed across zoom changes
//! - **Selection machine**: click-to-place, click-to-clear, drag, and
//!   stretch of a grid-snapped, bounds-clamped rectangle
//! - **Overlay**: pure functions producing mask, handle, and grid-pattern
//!   geometry for the host renderer
//!
//! ## Architecture
//!
//! ```text
//! GridBox (event facade)
//!   ├── PanController (idle → panning → idle)
//!   ├── ZoomController (scale envelope)
//!   ├── Viewport (coordinate mapping + anchor compensation)
//!   └── SelectionMachine (absent → placed → {idle, dragging, stretching})
//!
//! Overlay (mask frame, handle layout, grid pattern)
//!   └── consumed by the host's renderer, no logic of its own
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use pixelgrid_core::{Point, WidgetConfig};
//! use pixelgrid_widget::GridBox;
//!
//! let mut widget = GridBox::new(WidgetConfig::default()).unwrap();
//!
//! // The host event loop feeds pointer and wheel events in.
//! widget.on_mouse_move(Point::new(120.0, 80.0));
//! let response = widget.on_wheel(-3.0);
//! assert!(response.prevent_default);
//!
//! // ...and renders the resulting transform.
//! let transform = widget.transform();
//! assert!(transform.scale > 1.0);
//! ```

pub mod overlay;
pub mod pan;
pub mod selection;
pub mod viewport;
pub mod widget;
pub mod zoom;

pub use overlay::{grid_pattern, handle_layout, mask_frame, GridPattern, HandleLayout, MaskFrame};
pub use pan::PanController;
pub use selection::{SelectionGesture, SelectionMachine};
pub use viewport::Viewport;
pub use widget::{Cursor, EventResponse, GridBox, ViewTransform};
pub use zoom::ZoomController;
