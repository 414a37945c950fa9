//! Pure-geometry presentation adapters.
//!
//! The widget core never draws. Hosts render three things — the mask
//! overlay around the selection, the move/resize handles, and the grid
//! pattern — and these helpers compute the geometry for each as plain
//! data. Every function here is a pure function of the rectangle and the
//! configuration; variation in presentation belongs to the host, not to
//! the interaction core.

use pixelgrid_core::{clamp, GridConfig, MaskConfig, Point, Rect};
use serde::{Deserialize, Serialize};

/// Geometry of the dimming mask drawn around the selection.
///
/// Mirrors a stencil-mask rendering: a dimmed backdrop covering the
/// whole canvas, a punched-out hole over the selection, a clear window
/// showing the selected cells, and a colored border frame inflated by
/// half the stroke width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskFrame {
    /// Logical canvas edge length; the backdrop covers this square.
    pub canvas_size: f64,
    /// The cut-out over the selection, inflated by the grid line width so
    /// the dim layer never bleeds into the selected cells.
    pub hole: Rect,
    /// The clear window over the selected cells.
    pub window: Rect,
    /// The border frame around the selection.
    pub border: Rect,
    /// Corner radius of the border frame.
    pub radius: f64,
    /// Border stroke color.
    pub color: String,
    /// Backdrop opacity, clamped into `[0, 1]`.
    pub opacity: f64,
}

/// Computes the mask overlay geometry for a placed selection.
pub fn mask_frame(rect: Rect, grid: &GridConfig, mask: &MaskConfig) -> MaskFrame {
    let adjust = grid.line_width;
    let stroke = mask.line_width;

    MaskFrame {
        canvas_size: grid.canvas_size(),
        hole: Rect::new(rect.top, rect.left, rect.width + adjust, rect.height + adjust),
        window: rect,
        border: Rect::new(
            rect.top - stroke / 2.0,
            rect.left - stroke / 2.0,
            rect.width + stroke + adjust,
            rect.height + stroke + adjust,
        ),
        radius: mask.radius,
        color: mask.line_color.clone(),
        opacity: clamp(0.0, 1.0, mask.opacity),
    }
}

/// Placement of the selection's drag affordances.
///
/// Handles sit just outside the rectangle's corners and are scaled by
/// the inverse of the view scale so they stay readable when zoomed out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandleLayout {
    /// Top-left corner of the move handle (outside the rect's top-left).
    pub move_anchor: Point,
    /// Bottom-right corner of the resize handle (outside the rect's
    /// bottom-right).
    pub stretch_anchor: Point,
    /// Top-right corner of the attached-component slot, just below the
    /// rectangle.
    pub component_anchor: Point,
    /// Scale factor for handle icons: `max(1, 4 / scale)`.
    pub icon_scale: f64,
}

/// How far the handles stick out past the rectangle corners.
const HANDLE_INSET: f64 = 5.0;

/// Computes handle placement for a placed selection at the given scale.
pub fn handle_layout(rect: Rect, scale: f64) -> HandleLayout {
    HandleLayout {
        move_anchor: Point::new(rect.left - HANDLE_INSET, rect.top - HANDLE_INSET),
        stretch_anchor: Point::new(rect.right() + HANDLE_INSET, rect.bottom() + HANDLE_INSET),
        component_anchor: Point::new(rect.right(), rect.bottom() + 1.0),
        icon_scale: (4.0 / scale).max(1.0),
    }
}

/// Tiling parameters for the host's grid-line renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridPattern {
    /// Tile edge length.
    pub cell_size: f64,
    /// Line stroke width.
    pub line_width: f64,
    /// Logical canvas edge length.
    pub canvas_size: f64,
}

/// Computes the grid pattern for the configured resolution.
pub fn grid_pattern(grid: &GridConfig) -> GridPattern {
    GridPattern {
        cell_size: grid.cell_size,
        line_width: grid.line_width,
        canvas_size: grid.canvas_size(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_frame_geometry() {
        let grid = GridConfig {
            line_width: 0.1,
            ..GridConfig::default()
        };
        let mask = MaskConfig::default();
        let rect = Rect::new(20.0, 15.0, 5.0, 5.0);

        let frame = mask_frame(rect, &grid, &mask);
        assert_eq!(frame.canvas_size, 500.0);
        assert_eq!(frame.window, rect);
        assert_eq!(frame.hole.width, 5.1);
        // Border inflated by half the stroke on each side.
        assert_eq!(frame.border.left, 14.0);
        assert_eq!(frame.border.top, 19.0);
        assert_eq!(frame.border.width, 7.1);
        assert_eq!(frame.opacity, 0.7);
    }

    #[test]
    fn test_mask_opacity_is_clamped() {
        let grid = GridConfig::default();
        let mask = MaskConfig {
            opacity: 3.0,
            ..MaskConfig::default()
        };
        let frame = mask_frame(Rect::cell(0.0, 0.0, 5.0), &grid, &mask);
        assert_eq!(frame.opacity, 1.0);
    }

    #[test]
    fn test_handle_icons_grow_when_zoomed_out() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);

        // Zoomed out: icons scale up by the inverse of the view scale.
        assert_eq!(handle_layout(rect, 0.5).icon_scale, 8.0);
        // Zoomed in: never below natural size.
        assert_eq!(handle_layout(rect, 8.0).icon_scale, 1.0);
    }

    #[test]
    fn test_handles_sit_outside_corners() {
        let rect = Rect::new(10.0, 10.0, 20.0, 30.0);
        let layout = handle_layout(rect, 1.0);
        assert_eq!(layout.move_anchor, Point::new(5.0, 5.0));
        assert_eq!(layout.stretch_anchor, Point::new(35.0, 45.0));
        assert_eq!(layout.component_anchor, Point::new(30.0, 41.0));
    }
}
