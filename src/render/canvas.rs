// src/render/canvas.rs
//
// LineSink backed by a nannou Draw. Nannou puts the origin at the window
// center with y pointing up, so pixel points are flipped on the way in.

use nannou::prelude::{pt2, rgb8, Draw, Point2};

use crate::models::Point;
use crate::render::palette::Rgb8;
use crate::render::LineSink;
use crate::views::Viewport;

pub struct NannouCanvas<'a> {
    draw: &'a Draw,
    viewport: Viewport,
    stroke_weight: f32,
}

impl<'a> NannouCanvas<'a> {
    pub fn new(draw: &'a Draw, viewport: Viewport, stroke_weight: f32) -> Self {
        Self {
            draw,
            viewport,
            stroke_weight,
        }
    }

    pub fn clear(&self, color: Rgb8) {
        let [r, g, b] = color;
        self.draw.background().color(rgb8(r, g, b));
    }
}

/// Top-left, y-down pixel coordinates to nannou's centered, y-up space.
pub fn pixel_to_nannou(pixel: Point<f32>, viewport: Viewport) -> Point2 {
    pt2(
        pixel.x - viewport.width / 2.0,
        viewport.height / 2.0 - pixel.y,
    )
}

/// Inverse of [`pixel_to_nannou`], used for the mouse position.
pub fn nannou_to_pixel(position: Point2, viewport: Viewport) -> Point<f32> {
    Point {
        x: position.x + viewport.width / 2.0,
        y: viewport.height / 2.0 - position.y,
    }
}

impl LineSink for NannouCanvas<'_> {
    fn draw_line(&mut self, start: Point<i32>, end: Point<i32>, color: Rgb8) {
        let [r, g, b] = color;
        self.draw
            .line()
            .points(
                pixel_to_nannou(start.into(), self.viewport),
                pixel_to_nannou(end.into(), self.viewport),
            )
            .color(rgb8(r, g, b))
            .stroke_weight(self.stroke_weight);
    }
}
