//! Pointer-drag pan controller.
//!
//! State machine idle → panning → idle. A gesture is armed on
//! pointer-down and only counts as a pan once the pointer actually
//! moves; a down/up pair with no motion leaves the pan flag untouched,
//! which is what lets a plain click place or clear the selection.

use pixelgrid_core::Point;
use tracing::{debug, trace};

/// Accumulates pointer motion into a cumulative screen-space offset.
///
/// The delta is inverted (`pan += last - new`): dragging the pointer
/// right moves the content right, because the offset is subtracted when
/// the transform is applied.
#[derive(Debug, Clone, Default)]
pub struct PanController {
    offset: Point,
    last_point: Point,
    armed: bool,
    panning: bool,
}

impl PanController {
    /// Creates a controller with no accumulated offset.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cumulative pan offset, in screen pixels.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// True while a pan gesture is in progress (pointer down and moved).
    pub fn is_panning(&self) -> bool {
        self.panning
    }

    /// Arms the gesture at the pointer-down position.
    pub fn start(&mut self, page: Point) {
        self.last_point = page;
        self.armed = true;
        trace!(x = page.x, y = page.y, "pan armed");
    }

    /// Feeds a pointer-move event. Ignored unless the gesture is armed.
    pub fn update(&mut self, page: Point) {
        if !self.armed {
            return;
        }
        self.panning = true;

        let last = self.last_point;
        self.last_point = page;
        self.offset = self.offset + (last - page);
        trace!(x = self.offset.x, y = self.offset.y, "pan update");
    }

    /// Ends the gesture. Safe to call on every pointer-up path, armed or
    /// not, so an up outside the widget cannot leave the gesture stuck.
    pub fn end(&mut self) {
        if self.panning {
            debug!(x = self.offset.x, y = self.offset.y, "pan ended");
        }
        self.armed = false;
        self.panning = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pan_accumulates_inverted_delta() {
        let mut pan = PanController::new();
        pan.start(Point::new(100.0, 100.0));

        // Dragging right and down by (50, 75) pans by (-50, -75).
        pan.update(Point::new(150.0, 175.0));
        assert_eq!(pan.offset(), Point::new(-50.0, -75.0));

        // Dragging back left by 25 adds +25.
        pan.update(Point::new(125.0, 175.0));
        assert_eq!(pan.offset(), Point::new(-25.0, -75.0));
    }

    #[test]
    fn test_pan_flag_lifecycle() {
        let mut pan = PanController::new();
        assert!(!pan.is_panning());

        pan.start(Point::new(0.0, 0.0));
        // Armed but not yet panning: no motion has happened.
        assert!(!pan.is_panning());

        pan.update(Point::new(1.0, 0.0));
        assert!(pan.is_panning());

        pan.end();
        assert!(!pan.is_panning());
    }

    #[test]
    fn test_moves_without_start_are_ignored() {
        let mut pan = PanController::new();
        pan.update(Point::new(50.0, 50.0));
        assert_eq!(pan.offset(), Point::ZERO);
        assert!(!pan.is_panning());
    }

    #[test]
    fn test_moves_after_end_are_ignored() {
        let mut pan = PanController::new();
        pan.start(Point::new(0.0, 0.0));
        pan.update(Point::new(10.0, 0.0));
        pan.end();

        pan.update(Point::new(30.0, 0.0));
        assert_eq!(pan.offset(), Point::new(-10.0, 0.0));
    }

    #[test]
    fn test_offset_survives_gestures() {
        let mut pan = PanController::new();
        pan.start(Point::new(0.0, 0.0));
        pan.update(Point::new(10.0, 10.0));
        pan.end();

        pan.start(Point::new(200.0, 200.0));
        pan.update(Point::new(190.0, 210.0));
        pan.end();

        assert_eq!(pan.offset(), Point::new(0.0, -20.0));
    }
}
