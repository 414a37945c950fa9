//! Integration tests for selection gestures on the widget facade:
//! click-to-place, click-to-clear, drag, stretch, and how gestures
//! interact with panning.

use pixelgrid_core::{GridConfig, Point, Rect, SelectConfig, WidgetConfig};
use pixelgrid_widget::GridBox;

fn select_widget() -> GridBox {
    let config = WidgetConfig {
        select: SelectConfig {
            enable: true,
            ..SelectConfig::default()
        },
        ..WidgetConfig::default()
    };
    GridBox::new(config).unwrap()
}

/// Hover to the point, press, release: a click with no net movement.
fn click(widget: &mut GridBox, x: f64, y: f64) {
    let p = Point::new(x, y);
    widget.on_mouse_move(p);
    widget.on_mouse_down(p);
    widget.on_mouse_up(p);
}

#[test]
fn test_click_places_one_cell_selection() {
    let mut widget = select_widget();

    // cell_size 5: logical (17, 23) snaps to (15, 20).
    click(&mut widget, 17.0, 23.0);
    assert_eq!(widget.selection(), Some(Rect::new(20.0, 15.0, 5.0, 5.0)));
}

#[test]
fn test_click_with_existing_selection_clears_it() {
    let mut widget = select_widget();
    click(&mut widget, 17.0, 23.0);
    assert!(widget.selection().is_some());

    click(&mut widget, 100.0, 100.0);
    assert_eq!(widget.selection(), None);
}

#[test]
fn test_selection_disabled_by_default() {
    let mut widget = GridBox::new(WidgetConfig::default()).unwrap();
    click(&mut widget, 17.0, 23.0);
    assert_eq!(widget.selection(), None);
}

#[test]
fn test_drag_changes_position_only() {
    let mut widget = select_widget();
    click(&mut widget, 12.0, 11.0);

    // Grow to 20x15 first so the drag has a non-trivial size to preserve.
    widget.on_stretch_handle_down();
    widget.on_mouse_move(Point::new(27.0, 21.0));
    widget.on_mouse_up(Point::new(27.0, 21.0));
    assert_eq!(widget.selection(), Some(Rect::new(10.0, 10.0, 20.0, 15.0)));

    let response = widget.on_move_handle_down();
    assert!(response.stop_propagation);
    widget.on_mouse_move(Point::new(203.0, 117.0));
    widget.on_mouse_up(Point::new(203.0, 117.0));

    let rect = widget.selection().unwrap();
    assert_eq!(rect.left, 200.0);
    assert_eq!(rect.top, 115.0);
    assert_eq!(rect.width, 20.0);
    assert_eq!(rect.height, 15.0);
}

#[test]
fn test_drag_is_clamped_to_canvas() {
    let mut widget = select_widget();
    click(&mut widget, 12.0, 11.0);

    widget.on_move_handle_down();
    widget.on_mouse_move(Point::new(10_000.0, -300.0));
    widget.on_mouse_up(Point::new(10_000.0, -300.0));

    // Canvas is 500x500, cell 5.
    assert_eq!(widget.selection(), Some(Rect::new(0.0, 495.0, 5.0, 5.0)));
}

#[test]
fn test_stretch_keeps_top_left_anchored() {
    let mut widget = select_widget();
    click(&mut widget, 12.0, 11.0);

    widget.on_stretch_handle_down();
    for p in [
        Point::new(60.0, 90.0),
        Point::new(30.0, 40.0),
        Point::new(2.0, 2.0),
        Point::new(77.0, 53.0),
    ] {
        widget.on_mouse_move(p);
        let rect = widget.selection().unwrap();
        assert_eq!(rect.top, 10.0);
        assert_eq!(rect.left, 10.0);
    }
    widget.on_mouse_up(Point::new(77.0, 53.0));

    let rect = widget.selection().unwrap();
    assert_eq!(rect.width, 70.0);
    assert_eq!(rect.height, 45.0);
}

#[test]
fn test_gesture_end_keeps_selection() {
    let mut widget = select_widget();
    click(&mut widget, 12.0, 11.0);

    // Releasing a drag is not a click-to-clear.
    widget.on_move_handle_down();
    widget.on_mouse_move(Point::new(50.0, 50.0));
    widget.on_mouse_up(Point::new(50.0, 50.0));
    assert!(widget.selection().is_some());
    assert!(!widget.is_dragging());
}

#[test]
fn test_pan_does_not_clear_selection() {
    let mut widget = select_widget();
    click(&mut widget, 12.0, 11.0);
    let rect = widget.selection();

    // Press on empty canvas and drag: a pan, not a click.
    widget.on_mouse_down(Point::new(300.0, 300.0));
    widget.on_mouse_move(Point::new(350.0, 340.0));
    assert!(widget.is_panning());
    widget.on_mouse_up(Point::new(350.0, 340.0));

    assert_eq!(widget.selection(), rect);
    assert!(!widget.is_panning());
}

#[test]
fn test_moves_are_consumed_while_selection_exists() {
    let mut widget = select_widget();

    // No selection: the move may propagate (and drive an outer pan).
    let response = widget.on_mouse_move(Point::new(10.0, 10.0));
    assert!(!response.stop_propagation);

    click(&mut widget, 12.0, 11.0);
    let response = widget.on_mouse_move(Point::new(20.0, 20.0));
    assert!(response.stop_propagation);
}

#[test]
fn test_cursor_follows_gesture() {
    use pixelgrid_widget::Cursor;

    let mut widget = select_widget();
    click(&mut widget, 12.0, 11.0);
    assert_eq!(widget.cursor(), Cursor::Default);

    widget.on_move_handle_down();
    widget.on_mouse_move(Point::new(30.0, 30.0));
    assert_eq!(widget.cursor(), Cursor::Grabbing);
    widget.on_mouse_up(Point::new(30.0, 30.0));
    assert_eq!(widget.cursor(), Cursor::Default);

    widget.on_stretch_handle_down();
    widget.on_mouse_move(Point::new(60.0, 60.0));
    assert_eq!(widget.cursor(), Cursor::NwseResize);
    widget.on_mouse_up(Point::new(60.0, 60.0));
    assert_eq!(widget.cursor(), Cursor::Default);
}

#[test]
fn test_handle_down_does_not_arm_pan() {
    let mut widget = select_widget();
    click(&mut widget, 12.0, 11.0);

    // The handle consumes the pointer-down, so the root never arms a
    // pan; subsequent moves drag the selection without panning.
    widget.on_move_handle_down();
    widget.on_mouse_move(Point::new(100.0, 100.0));
    assert!(widget.is_dragging());
    assert!(!widget.is_panning());
    assert_eq!(widget.transform().offset, Point::ZERO);
}

#[test]
fn test_overlay_geometry_follows_selection() {
    let mut widget = select_widget();
    assert!(widget.mask_frame().is_none());
    assert!(widget.handle_layout().is_none());

    click(&mut widget, 17.0, 23.0);
    let frame = widget.mask_frame().unwrap();
    assert_eq!(frame.window, Rect::new(20.0, 15.0, 5.0, 5.0));

    let handles = widget.handle_layout().unwrap();
    assert_eq!(handles.move_anchor, Point::new(10.0, 15.0));
}

#[test]
fn test_grid_pattern_only_when_enabled() {
    let widget = select_widget();
    assert!(widget.grid_pattern().is_none());

    let config = WidgetConfig {
        grid: GridConfig {
            enable: true,
            ..GridConfig::default()
        },
        ..WidgetConfig::default()
    };
    let widget = GridBox::new(config).unwrap();
    let pattern = widget.grid_pattern().unwrap();
    assert_eq!(pattern.cell_size, 5.0);
    assert_eq!(pattern.canvas_size, 500.0);
}
