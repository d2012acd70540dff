// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

use crate::models::WalkKind;
use crate::render::palette::{Rgb8, BACKGROUND, DEFAULT_PALETTE};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 800,
            title: "Random walk".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    pub kind: WalkKind,
    pub count: usize,      // Walks per generation
    pub iterations: usize, // Points requested per walk
    pub spawn_radius: f32, // Start points at launch fall in [-r, r]
    pub reset_radius: f32, // Start points after a reset fall in [-r, r]
    pub seed: Option<u64>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            kind: WalkKind::Smooth,
            count: 7,
            iterations: 25_000,
            spawn_radius: 100.0,
            reset_radius: 500.0,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub pan_speed: f32,        // Screen pixels per second
    pub zoom_speed: f32,
    pub min_zoom: f32,
    pub fine_zoom_factor: f32, // Scroll multiplier while the modifier is held
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            pan_speed: 240.0,
            zoom_speed: 1.0,
            min_zoom: 0.1,
            fine_zoom_factor: 0.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub stroke_weight: f32,
    pub background: Rgb8,
    pub palette: Vec<Rgb8>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stroke_weight: 1.0,
            background: BACKGROUND,
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}
