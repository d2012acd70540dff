// src/views/camera.rs
//
// Pan/zoom camera mapping world coordinates to top-left, y-down screen
// pixels, and the per-frame input that drives it

use crate::config::CameraConfig;
use crate::models::{pt, Point};

/// Size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point<f32> {
        pt(self.width / 2.0, self.height / 2.0)
    }
}

/// Input polled for a single frame. Cursor is in screen pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub pan_up: bool,
    pub pan_down: bool,
    pub pan_left: bool,
    pub pan_right: bool,
    pub scroll: f32,
    pub fine_zoom: bool,
    pub cursor: Point<f32>,
    pub dt: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub offset: Point<f32>,
    pub zoom: f32,
    settings: CameraConfig,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

impl Camera {
    pub fn new(settings: CameraConfig) -> Self {
        Self {
            offset: pt(0.0, 0.0),
            zoom: 1.0_f32.max(settings.min_zoom),
            settings,
        }
    }

    pub fn settings(&self) -> &CameraConfig {
        &self.settings
    }

    /// Back to the origin at unit zoom.
    pub fn reset(&mut self) {
        self.offset = pt(0.0, 0.0);
        self.zoom = 1.0_f32.max(self.settings.min_zoom);
    }

    pub fn world_to_screen(&self, world: Point<f32>, viewport: Viewport) -> Point<f32> {
        (world + self.offset) * self.zoom + viewport.center()
    }

    pub fn screen_to_world(&self, screen: Point<f32>, viewport: Viewport) -> Point<f32> {
        let centered = screen - viewport.center();
        pt(centered.x / self.zoom, centered.y / self.zoom) - self.offset
    }

    /// Applies one frame of input: pan first, then zoom about the cursor.
    pub fn apply_input(&mut self, input: &FrameInput, viewport: Viewport) {
        self.pan(input);

        let mut scroll = input.scroll;
        if input.fine_zoom {
            scroll *= self.settings.fine_zoom_factor;
        }
        if scroll != 0.0 {
            self.zoom_at(input.cursor, scroll, viewport);
        }
    }

    fn pan(&mut self, input: &FrameInput) {
        // constant on-screen speed regardless of zoom
        let step = self.settings.pan_speed / self.zoom * input.dt;

        if input.pan_up {
            self.offset.y += step;
        }
        if input.pan_down {
            self.offset.y -= step;
        }
        if input.pan_left {
            self.offset.x += step;
        }
        if input.pan_right {
            self.offset.x -= step;
        }
    }

    /// Changes zoom by `scroll` notches while keeping the world point under
    /// `cursor` fixed on screen.
    pub fn zoom_at(&mut self, cursor: Point<f32>, scroll: f32, viewport: Viewport) {
        let before = self.screen_to_world(cursor, viewport);

        let zoomed = self.zoom + self.settings.zoom_speed * scroll * (self.zoom / 2.0).sqrt();
        self.zoom = zoomed.max(self.settings.min_zoom);

        let after = self.screen_to_world(cursor, viewport);
        self.offset += after - before;
    }
}
