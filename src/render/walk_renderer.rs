// src/render/walk_renderer.rs
// the renderer maps every walk through the camera and emits one line per
// consecutive pair of points

use crate::models::{pt, Point, Walk};
use crate::render::palette::{color_for, Rgb8};
use crate::render::LineSink;
use crate::views::{Camera, Viewport};

pub struct WalkRenderer {
    palette: Vec<Rgb8>,
}

impl WalkRenderer {
    pub fn new(palette: Vec<Rgb8>) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &[Rgb8] {
        &self.palette
    }

    /// Draws all walks. Returns the number of line segments emitted.
    pub fn draw<S: LineSink + ?Sized>(
        &self,
        sink: &mut S,
        walks: &[Walk],
        camera: &Camera,
        viewport: Viewport,
    ) -> usize {
        let mut segments = 0;
        for (index, walk) in walks.iter().enumerate() {
            let Some(color) = color_for(&self.palette, index) else {
                return segments;
            };
            segments += draw_walk(sink, walk, color, camera, viewport);
        }
        segments
    }
}

fn draw_walk<S: LineSink + ?Sized>(
    sink: &mut S,
    walk: &Walk,
    color: Rgb8,
    camera: &Camera,
    viewport: Viewport,
) -> usize {
    if walk.len() < 2 {
        return 0;
    }

    let mut points = walk
        .world_points()
        .map(|p| to_pixel(camera.world_to_screen(p, viewport)));

    let Some(mut start) = points.next() else {
        return 0;
    };

    let mut segments = 0;
    for end in points {
        sink.draw_line(start, end, color);
        start = end;
        segments += 1;
    }
    segments
}

// truncates toward zero, like a plain float -> int cast
fn to_pixel(screen: Point<f32>) -> Point<i32> {
    pt(screen.x as i32, screen.y as i32)
}
