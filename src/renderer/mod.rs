//! Canvas-2D rendering module
//!
//! Strokes trail segments into an HTML canvas, fading the previous frame
//! instead of wiping it so motion leaves streaks.

mod canvas;

pub use canvas::CanvasRenderer;
