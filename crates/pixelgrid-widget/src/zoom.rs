//! Wheel-driven zoom controller.
//!
//! Converts discrete wheel ticks into a bounded scale value. Only the
//! sign of the wheel delta matters; magnitude is ignored so trackpads and
//! wheel mice zoom at the same rate.

use pixelgrid_core::{clamp, ease_in_out_sine, remap, ScaleConfig};
use tracing::trace;

/// Maintains the current scale and advances it on wheel events.
///
/// In `Simple` mode each tick adds `speed` in the tick direction and
/// clamps to the envelope. In `Eased` mode ticks advance an internal
/// accumulator which is remapped through a sinusoidal ease-in-out curve,
/// so the scale decelerates as it approaches either end of the envelope.
#[derive(Debug, Clone)]
pub struct ZoomController {
    config: ScaleConfig,
    scale: f64,
    accumulator: f64,
}

impl ZoomController {
    /// Creates a controller at the envelope's initial scale.
    pub fn new(config: ScaleConfig) -> Self {
        let initial = config.initial();
        Self {
            config,
            scale: initial,
            accumulator: initial,
        }
    }

    /// The current scale factor.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The envelope this controller runs in.
    pub fn config(&self) -> &ScaleConfig {
        &self.config
    }

    /// Advances the scale by one wheel event.
    ///
    /// A positive `delta_y` (wheel down) zooms out, anything else zooms
    /// in. Returns the new scale. The caller is responsible for
    /// suppressing the host's native scroll for the event.
    pub fn on_wheel(&mut self, delta_y: f64) -> f64 {
        let direction = if delta_y > 0.0 { -1.0 } else { 1.0 };

        match self.config {
            ScaleConfig::Simple { min, max, speed } => {
                self.scale = clamp(min, max, self.scale + speed * direction);
            }
            ScaleConfig::Eased { start, max, speed } => {
                self.accumulator = clamp(start, max, self.accumulator + speed * direction);
                let t = remap(self.accumulator, start, max, 0.0, 1.0);
                self.scale = remap(ease_in_out_sine(t), 0.0, 1.0, start, max);
            }
        }

        trace!(scale = self.scale, direction, "wheel zoom");
        self.scale
    }
}
