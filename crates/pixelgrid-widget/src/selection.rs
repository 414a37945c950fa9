//! Selection rectangle state machine.
//!
//! Owns the selection rectangle and the gesture that mutates it. The
//! rectangle lives in logical grid coordinates and is always snapped to
//! the cell grid and clamped inside the canvas; out-of-bounds input is
//! silently corrected, never an error.
//!
//! States: absent → placed (click without drag) → {idle, dragging,
//! stretching} → absent (click on the canvas while a rectangle exists and
//! no gesture occurred).

use pixelgrid_core::{clamp, snap_to_cell, Point, Rect};
use tracing::debug;

/// Which selection gesture is currently active.
///
/// At most one of dragging/stretching at a time; both take precedence
/// over panning by consuming the pointer events that would start a pan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionGesture {
    #[default]
    Idle,
    /// The move handle is held; pointer motion repositions the rectangle.
    Dragging,
    /// The resize handle is held; pointer motion grows or shrinks the
    /// rectangle from its bottom-right corner.
    Stretching,
}

/// The single owner of the selection rectangle.
#[derive(Debug, Clone)]
pub struct SelectionMachine {
    cell_size: f64,
    canvas_size: f64,
    rect: Option<Rect>,
    gesture: SelectionGesture,
}

impl SelectionMachine {
    /// Creates a machine with no selection.
    pub fn new(cell_size: f64, canvas_size: f64) -> Self {
        Self {
            cell_size,
            canvas_size,
            rect: None,
            gesture: SelectionGesture::Idle,
        }
    }

    /// The current rectangle, if one is placed.
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// The active gesture.
    pub fn gesture(&self) -> SelectionGesture {
        self.gesture
    }

    /// True while the move handle is held.
    pub fn is_dragging(&self) -> bool {
        self.gesture == SelectionGesture::Dragging
    }

    /// True while the resize handle is held.
    pub fn is_stretching(&self) -> bool {
        self.gesture == SelectionGesture::Stretching
    }

    /// Pointer-down on the move handle.
    pub fn begin_drag(&mut self) {
        if self.rect.is_some() {
            self.gesture = SelectionGesture::Dragging;
            debug!("selection drag started");
        }
    }

    /// Pointer-down on the resize handle.
    pub fn begin_stretch(&mut self) {
        if self.rect.is_some() {
            self.gesture = SelectionGesture::Stretching;
            debug!("selection stretch started");
        }
    }

    /// Ends the active gesture, keeping the rectangle.
    pub fn end_gesture(&mut self) {
        self.gesture = SelectionGesture::Idle;
    }

    /// Places a one-cell rectangle at the snapped pointer position.
    pub fn place(&mut self, logical: Point) {
        let max_corner = self.canvas_size - self.cell_size;
        let left = clamp(0.0, max_corner, snap_to_cell(logical.x, self.cell_size));
        let top = clamp(0.0, max_corner, snap_to_cell(logical.y, self.cell_size));
        let rect = Rect::cell(top, left, self.cell_size);
        debug!(top, left, "selection placed");
        self.rect = Some(rect);
    }

    /// Clears the rectangle.
    pub fn clear(&mut self) {
        if self.rect.take().is_some() {
            debug!("selection cleared");
        }
        self.gesture = SelectionGesture::Idle;
    }

    /// Feeds a pointer-move in logical coordinates.
    ///
    /// Returns `true` when a rectangle exists — the event is consumed so
    /// the same pointer motion cannot simultaneously drive a pan.
    pub fn on_move(&mut self, logical: Point) -> bool {
        let Some(rect) = self.rect else {
            return false;
        };

        match self.gesture {
            SelectionGesture::Dragging => self.rect = Some(self.drag_to(rect, logical)),
            SelectionGesture::Stretching => self.rect = Some(self.stretch_to(rect, logical)),
            SelectionGesture::Idle => {}
        }
        true
    }

    /// Repositions the rectangle so its top-left follows the snapped
    /// pointer, clamped so it never crosses the canvas bounds. Size is
    /// unchanged.
    fn drag_to(&self, rect: Rect, logical: Point) -> Rect {
        let cell_x = snap_to_cell(logical.x, self.cell_size);
        let cell_y = snap_to_cell(logical.y, self.cell_size);

        let left = clamp(0.0, self.canvas_size - rect.width, cell_x);
        let top = clamp(0.0, self.canvas_size - rect.height, cell_y);

        Rect::new(top, left, rect.width, rect.height)
    }

    /// Resizes from the fixed top-left corner toward the pointer. Width
    /// and height are floored at one cell and clamped to the canvas edge.
    fn stretch_to(&self, rect: Rect, logical: Point) -> Rect {
        let cell_x = snap_to_cell(logical.x, self.cell_size);
        let cell_y = snap_to_cell(logical.y, self.cell_size);

        let width_floored = (cell_x - rect.left + self.cell_size).max(self.cell_size);
        let height_floored = (cell_y - rect.top + self.cell_size).max(self.cell_size);

        let width = width_floored.min(self.canvas_size - rect.left);
        let height = height_floored.min(self.canvas_size - rect.top);

        Rect::new(rect.top, rect.left, width, height)
    }
}
