// src/render/mod.rs
// The walk rendering module

pub mod canvas;
pub mod palette;
pub mod walk_renderer;

pub use canvas::NannouCanvas;
pub use palette::Rgb8;
pub use walk_renderer::WalkRenderer;

use crate::models::Point;

/// Anything that can draw a colored line between two screen pixels
/// (top-left origin, y down).
pub trait LineSink {
    fn draw_line(&mut self, start: Point<i32>, end: Point<i32>, color: Rgb8);
}
