//! Immediate-mode drawing of a [`ShowState`]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{FADE_CLEAR_ALPHA, TRAIL_STROKE_WIDTH};
use crate::sim::{Firework, ShowState};

/// Renders a [`ShowState`] into a canvas 2D context.
///
/// Rendering is a pure read of the state; the driver draws before it ticks,
/// so every frame shows pre-update positions.
pub struct CanvasRenderer {
    context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self { context })
    }

    /// Draw one frame: fade the previous frame, then stroke every rocket
    /// trail and, once burst, every live spark.
    pub fn render(&self, state: &ShowState) -> Result<(), JsValue> {
        // destination-out clears at partial opacity rather than wiping,
        // which is what leaves the fading streaks
        self.context
            .set_global_composite_operation("destination-out")?;
        self.context
            .set_fill_style_str(&format!("rgba(0, 0, 0, {FADE_CLEAR_ALPHA})"));
        self.context.fill_rect(0.0, 0.0, state.width, state.height);

        // additive blend so overlapping sparks brighten
        self.context.set_global_composite_operation("lighter")?;

        for firework in state.fireworks.iter().rev() {
            self.draw_firework(firework, state.hue)?;
        }

        Ok(())
    }

    fn draw_firework(&self, firework: &Firework, hue: f64) -> Result<(), JsValue> {
        let tail = firework.trail_tail();
        let head = firework.current_point;

        self.context.begin_path();
        self.context.move_to(tail.x, tail.y);
        self.context.line_to(head.x, head.y);
        self.context.set_line_width(TRAIL_STROKE_WIDTH);
        self.context
            .set_stroke_style_str(&format!("hsl({hue}, 100%, {}%)", firework.brightness));
        self.context.stroke();

        if firework.has_burst() {
            for particle in &firework.particles {
                let tail = particle.trail_tail();
                let head = particle.current_point;

                self.context.begin_path();
                self.context.move_to(tail.x, tail.y);
                self.context.line_to(head.x, head.y);
                self.context.set_stroke_style_str(&format!(
                    "hsla({hue}, 100%, {}%, {})",
                    particle.brightness, particle.alpha
                ));
                self.context.stroke();
            }
        }

        Ok(())
    }
}
