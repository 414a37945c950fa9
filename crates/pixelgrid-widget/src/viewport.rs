//! Coordinate mapping and anchor compensation.
//!
//! The pan controller produces a raw offset and the zoom controller a raw
//! scale, but applying them directly would make the content jump under
//! the cursor on every zoom change: scaling happens around the transform
//! origin, not around the pointer. The viewport folds both into a single
//! *adjusted* offset, recomputed once per event cycle, so the logical
//! point under the cursor stays visually fixed.

use pixelgrid_core::Point;
use tracing::trace;

/// Owns the adjusted render offset and the previous-cycle snapshot it is
/// reconciled against.
///
/// Invariant: only the adjusted offset ever reaches the render transform.
/// The raw pan offset and raw scale are inputs to `reconcile`, never
/// outputs of this type.
#[derive(Debug, Clone)]
pub struct Viewport {
    adjusted_offset: Point,
    last_offset: Point,
    last_scale: f64,
}

impl Viewport {
    /// Creates a viewport for a widget starting at the given scale.
    pub fn new(initial_scale: f64) -> Self {
        Self {
            adjusted_offset: Point::ZERO,
            last_offset: Point::ZERO,
            last_scale: initial_scale,
        }
    }

    /// The offset to feed into the render transform
    /// (`translate(-offset) scale(scale)` with origin at the top-left).
    pub fn adjusted_offset(&self) -> Point {
        self.adjusted_offset
    }

    /// Reconciles the raw controller outputs for this event cycle.
    ///
    /// When the scale is unchanged, only panning can have happened, and
    /// the raw pan delta is carried over as-is. When the scale changed,
    /// the last known logical pointer position is projected to screen
    /// space under both the old and new scale; the difference is exactly
    /// how far the content slid under the fixed cursor, and is folded
    /// back into the adjusted offset.
    ///
    /// Must be called with the values of the immediately-prior cycle; the
    /// viewport snapshots them itself after every call.
    pub fn reconcile(&mut self, offset: Point, scale: f64, relative_mouse: Point) {
        if scale == self.last_scale {
            let delta = offset - self.last_offset;
            self.adjusted_offset = self.adjusted_offset + delta;
        } else {
            let last_projection = relative_mouse.scaled(self.last_scale);
            let new_projection = relative_mouse.scaled(scale);
            let mouse_shift = last_projection - new_projection;
            self.adjusted_offset = self.adjusted_offset - mouse_shift;
            trace!(
                scale,
                last_scale = self.last_scale,
                dx = -mouse_shift.x,
                dy = -mouse_shift.y,
                "anchor compensation"
            );
        }

        self.last_offset = offset;
        self.last_scale = scale;
    }

    /// Maps a raw pointer page position into logical (unscaled,
    /// unpanned) canvas coordinates: `(page + offset) / scale`.
    ///
    /// Pure function of the adjusted offset and the current scale; the
    /// scale is clamped positive by config validation, so the division is
    /// always defined.
    pub fn to_logical(&self, page: Point, scale: f64) -> Point {
        Point::new(
            (page.x + self.adjusted_offset.x) / scale,
            (page.y + self.adjusted_offset.y) / scale,
        )
    }
}
