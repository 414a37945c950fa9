//! The widget facade.
//!
//! `GridBox` wires the pan controller, zoom controller, viewport, and
//! selection machine together behind four event entry points. The host
//! event loop feeds raw pointer/wheel events in and honors the returned
//! propagation flags; the widget never polls and never draws.
//!
//! Ordering inside one event turn is fixed: the pan controller runs
//! first, then the viewport reconciles the raw offset/scale into the
//! adjusted offset, then the fresh logical pointer position is mapped,
//! and only then does the selection machine consume it.

use pixelgrid_core::{Point, Rect, WidgetConfig};
use pixelgrid_core::error::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::overlay::{self, GridPattern, HandleLayout, MaskFrame};
use crate::pan::PanController;
use crate::selection::SelectionMachine;
use crate::viewport::Viewport;
use crate::zoom::ZoomController;

/// What the host event loop must do with the event it just delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// Stop the event from propagating past the widget root, so the same
    /// pointer motion cannot also drive an outer gesture.
    pub stop_propagation: bool,
    /// Suppress the host's native behavior (scrolling, for wheel events).
    pub prevent_default: bool,
}

impl EventResponse {
    fn none() -> Self {
        Self::default()
    }

    fn consumed() -> Self {
        Self {
            stop_propagation: true,
            prevent_default: false,
        }
    }
}

/// Pointer cursor the widget wants shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    /// Shown while dragging the selection.
    Grabbing,
    /// Shown while stretching the selection.
    NwseResize,
}

impl Cursor {
    /// CSS cursor keyword for hosts that speak CSS.
    pub fn as_css(&self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Grabbing => "grabbing",
            Cursor::NwseResize => "nwse-resize",
        }
    }
}

/// The render transform the host applies to the canvas content:
/// `translate(-offset) scale(scale)` with the origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    /// The anchor-compensated offset. This is the only offset that may
    /// ever reach the render transform.
    pub offset: Point,
    /// The current zoom scale.
    pub scale: f64,
}

/// A pannable, zoomable grid canvas with an optional selection overlay.
///
/// All state is instance-local and mutated only through the event entry
/// points; nothing is shared across instances or threads.
#[derive(Debug, Clone)]
pub struct GridBox {
    config: WidgetConfig,
    pan: PanController,
    zoom: ZoomController,
    viewport: Viewport,
    selection: SelectionMachine,
    /// Last mapped logical pointer position; the anchor for zoom
    /// compensation and the input to placement.
    relative_mouse: Point,
    /// Page position of the last pointer-down, for click detection.
    mouse_down_at: Point,
    cursor: Cursor,
}

impl GridBox {
    /// Creates a widget from a validated configuration.
    ///
    /// Malformed configuration (inverted scale range, zero cell size) is
    /// a programming error and is rejected here, before any event flows.
    pub fn new(config: WidgetConfig) -> Result<Self> {
        config.validate()?;
        let zoom = ZoomController::new(config.scale);
        let viewport = Viewport::new(zoom.scale());
        let selection = SelectionMachine::new(config.grid.cell_size, config.grid.canvas_size());
        Ok(Self {
            config,
            pan: PanController::new(),
            zoom,
            viewport,
            selection,
            relative_mouse: Point::ZERO,
            mouse_down_at: Point::ZERO,
            cursor: Cursor::Default,
        })
    }

    /// The widget's configuration.
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// The transform to render the canvas content with.
    pub fn transform(&self) -> ViewTransform {
        ViewTransform {
            offset: self.viewport.adjusted_offset(),
            scale: self.zoom.scale(),
        }
    }

    /// The selection rectangle, if the overlay is enabled and one is
    /// placed.
    pub fn selection(&self) -> Option<Rect> {
        if self.config.select.enable {
            self.selection.rect()
        } else {
            None
        }
    }

    /// The cursor the host should show.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// The last mapped logical pointer position.
    pub fn logical_mouse(&self) -> Point {
        self.relative_mouse
    }

    /// True while a pan gesture is in progress.
    pub fn is_panning(&self) -> bool {
        self.pan.is_panning()
    }

    /// True while the selection is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.selection.is_dragging()
    }

    /// True while the selection is being stretched.
    pub fn is_stretching(&self) -> bool {
        self.selection.is_stretching()
    }

    /// Pointer-down on the widget root: arms a potential pan and records
    /// the position for click detection.
    pub fn on_mouse_down(&mut self, page: Point) -> EventResponse {
        self.pan.start(page);
        self.mouse_down_at = page;
        EventResponse::none()
    }

    /// Pointer-down on the selection's move handle.
    ///
    /// Consumes the event so the root's pointer-down never fires and no
    /// pan gesture is armed underneath the drag.
    pub fn on_move_handle_down(&mut self) -> EventResponse {
        self.selection.begin_drag();
        EventResponse::consumed()
    }

    /// Pointer-down on the selection's resize handle.
    pub fn on_stretch_handle_down(&mut self) -> EventResponse {
        self.selection.begin_stretch();
        EventResponse::consumed()
    }

    /// Pointer-move anywhere over the widget, buttons down or not.
    pub fn on_mouse_move(&mut self, page: Point) -> EventResponse {
        self.pan.update(page);
        self.viewport
            .reconcile(self.pan.offset(), self.zoom.scale(), self.relative_mouse);
        self.relative_mouse = self.viewport.to_logical(page, self.zoom.scale());

        let mut consumed = false;
        if self.config.select.enable {
            consumed = self.selection.on_move(self.relative_mouse);
        }

        if self.selection.is_dragging() {
            self.cursor = Cursor::Grabbing;
        } else if self.selection.is_stretching() {
            self.cursor = Cursor::NwseResize;
        }

        EventResponse {
            stop_propagation: consumed,
            prevent_default: false,
        }
    }

    /// Pointer-up, anywhere. Ends every gesture on every path, so an up
    /// outside the widget root cannot leave a pan or drag stuck on.
    pub fn on_mouse_up(&mut self, page: Point) -> EventResponse {
        let clicked = page == self.mouse_down_at;
        let was_dragging = self.selection.is_dragging();
        let was_stretching = self.selection.is_stretching();
        let was_panning = self.pan.is_panning();

        self.selection.end_gesture();

        if self.config.select.enable {
            if clicked && self.selection.rect().is_none() {
                self.selection.place(self.relative_mouse);
            } else if !was_dragging && !was_stretching && !was_panning {
                self.selection.clear();
            }
        }

        self.pan.end();
        self.cursor = Cursor::Default;
        EventResponse::consumed()
    }

    /// Wheel event. Zoom is independent of any gesture in progress.
    ///
    /// The returned response always asks the host to suppress native
    /// scrolling.
    pub fn on_wheel(&mut self, delta_y: f64) -> EventResponse {
        let scale = self.zoom.on_wheel(delta_y);
        self.viewport
            .reconcile(self.pan.offset(), scale, self.relative_mouse);
        debug!(scale, "zoom applied");

        EventResponse {
            stop_propagation: false,
            prevent_default: true,
        }
    }

    /// Mask overlay geometry for the current selection.
    pub fn mask_frame(&self) -> Option<MaskFrame> {
        self.selection()
            .map(|rect| overlay::mask_frame(rect, &self.config.grid, &self.config.select.mask))
    }

    /// Handle placement for the current selection.
    pub fn handle_layout(&self) -> Option<HandleLayout> {
        self.selection()
            .map(|rect| overlay::handle_layout(rect, self.zoom.scale()))
    }

    /// Grid tiling parameters, if grid rendering is enabled.
    pub fn grid_pattern(&self) -> Option<GridPattern> {
        if self.config.grid.enable {
            Some(overlay::grid_pattern(&self.config.grid))
        } else {
            None
        }
    }
}
