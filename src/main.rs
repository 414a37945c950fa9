use pixelgrid::{init_logging, GridBox, GridConfig, Point, SelectConfig, WidgetConfig};
use tracing::info;

/// Drives the widget with a scripted pointer/wheel sequence and prints
/// the resulting transform and selection after each phase. Stands in for
/// a host renderer; run with `RUST_LOG=debug` to watch the gesture state
/// machine.
fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = WidgetConfig {
        grid: GridConfig {
            enable: true,
            ..GridConfig::default()
        },
        select: SelectConfig {
            enable: true,
            ..SelectConfig::default()
        },
        ..WidgetConfig::default()
    };
    let mut widget = GridBox::new(config)?;

    // Click-to-place a one-cell selection at logical (17, 23).
    widget.on_mouse_move(Point::new(17.0, 23.0));
    widget.on_mouse_down(Point::new(17.0, 23.0));
    widget.on_mouse_up(Point::new(17.0, 23.0));
    info!(selection = ?widget.selection(), "after click");

    // Stretch it out from the resize handle.
    widget.on_stretch_handle_down();
    widget.on_mouse_move(Point::new(62.0, 48.0));
    widget.on_mouse_up(Point::new(62.0, 48.0));
    info!(selection = ?widget.selection(), "after stretch");

    // Pan the canvas.
    widget.on_mouse_down(Point::new(200.0, 200.0));
    widget.on_mouse_move(Point::new(150.0, 180.0));
    widget.on_mouse_up(Point::new(150.0, 180.0));
    info!(transform = ?widget.transform(), "after pan");

    // Zoom in three ticks; the point under the cursor stays anchored.
    for _ in 0..3 {
        widget.on_wheel(-1.0);
    }
    info!(transform = ?widget.transform(), "after zoom");

    if let Some(frame) = widget.mask_frame() {
        info!(hole = ?frame.hole, border = ?frame.border, "mask overlay");
    }

    Ok(())
}
