//! Geometry primitives and grid math.
//!
//! `Point` and `Rect` are the two value types the whole widget is built
//! on. Points are immutable: every operation produces a new instance.
//! Alongside them live the scalar helpers — grid snapping, clamping, and
//! the easing/remap pair used by the eased zoom envelope.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A 2D coordinate, in either screen space or logical (grid) space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point scaled by a uniform factor.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// The selection rectangle, in logical (grid) coordinates.
///
/// Invariants maintained by the selection state machine:
/// `width > 0`, `height > 0`, `left >= 0`, `top >= 0`,
/// `left + width <= canvas_size`, `top + height <= canvas_size`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Creates a single-cell rectangle at the given top-left corner.
    pub fn cell(top: f64, left: f64, cell_size: f64) -> Self {
        Self::new(top, left, cell_size, cell_size)
    }

    /// The x coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// The y coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Returns true when the rectangle lies entirely inside a square
    /// canvas of the given logical size.
    pub fn within(&self, canvas_size: f64) -> bool {
        self.left >= 0.0
            && self.top >= 0.0
            && self.right() <= canvas_size
            && self.bottom() <= canvas_size
    }
}

/// Snaps a logical coordinate down to the nearest multiple of the cell
/// size.
///
/// Truncates toward zero, matching integer division on the scaled value.
/// Callers clamp coordinates non-negative before snapping, where
/// truncation and floor agree.
pub fn snap_to_cell(v: f64, cell_size: f64) -> f64 {
    (v / cell_size).trunc() * cell_size
}

/// Clamps `val` into `[min, max]`.
pub fn clamp(min: f64, max: f64, val: f64) -> f64 {
    if val >= max {
        return max;
    }
    if val <= min {
        return min;
    }
    val
}

/// Sinusoidal ease-in-out over `[0, 1]`.
pub fn ease_in_out_sine(x: f64) -> f64 {
    -((std::f64::consts::PI * x).cos() - 1.0) / 2.0
}

/// Linearly remaps `value` from `[low1, high1]` onto `[low2, high2]`.
pub fn remap(value: f64, low1: f64, high1: f64, low2: f64, high2: f64) -> f64 {
    low2 + ((high2 - low2) * (value - low1)) / (high1 - low1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(3.0, 4.0);
        let b = Point::new(1.0, -2.0);
        assert_eq!(a + b, Point::new(4.0, 2.0));
        assert_eq!(a - b, Point::new(2.0, 6.0));
        assert_eq!(a.scaled(2.0), Point::new(6.0, 8.0));
        assert_eq!(Point::ZERO + a, a);
    }

    #[test]
    fn test_snap_rounds_down_to_cell() {
        assert_eq!(snap_to_cell(17.0, 5.0), 15.0);
        assert_eq!(snap_to_cell(23.0, 5.0), 20.0);
        assert_eq!(snap_to_cell(20.0, 5.0), 20.0);
        assert_eq!(snap_to_cell(0.0, 5.0), 0.0);
        assert_eq!(snap_to_cell(4.999, 5.0), 0.0);
    }

    #[test]
    fn test_clamp_edges() {
        assert_eq!(clamp(0.0, 10.0, -1.0), 0.0);
        assert_eq!(clamp(0.0, 10.0, 11.0), 10.0);
        assert_eq!(clamp(0.0, 10.0, 5.5), 5.5);
    }

    #[test]
    fn test_ease_endpoints() {
        assert!(ease_in_out_sine(0.0).abs() < 1e-12);
        assert!((ease_in_out_sine(1.0) - 1.0).abs() < 1e-12);
        assert!((ease_in_out_sine(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_remap_linear() {
        assert_eq!(remap(5.0, 0.0, 10.0, 0.0, 1.0), 0.5);
        assert_eq!(remap(0.5, 0.0, 1.0, 1.0, 10.0), 5.5);
    }

    #[test]
    fn test_rect_edges_and_containment() {
        let r = Rect::new(10.0, 15.0, 20.0, 25.0);
        assert_eq!(r.right(), 35.0);
        assert_eq!(r.bottom(), 35.0);
        assert!(r.within(500.0));
        assert!(!r.within(30.0));
    }

    proptest! {
        #[test]
        fn snap_is_idempotent(v in 0.0f64..10_000.0, cell in 1.0f64..64.0) {
            let once = snap_to_cell(v, cell);
            prop_assert_eq!(snap_to_cell(once, cell), once);
        }

        #[test]
        fn snap_never_exceeds_input(v in 0.0f64..10_000.0, cell in 1.0f64..64.0) {
            prop_assert!(snap_to_cell(v, cell) <= v);
        }

        #[test]
        fn clamp_stays_in_range(v in -1e6f64..1e6, lo in -100.0f64..0.0, hi in 1.0f64..100.0) {
            let c = clamp(lo, hi, v);
            prop_assert!(c >= lo && c <= hi);
        }

        #[test]
        fn ease_stays_in_unit_interval(x in 0.0f64..=1.0) {
            let y = ease_in_out_sine(x);
            prop_assert!((-1e-12..=1.0 + 1e-12).contains(&y));
        }
    }
}
