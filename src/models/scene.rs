// src/models/scene.rs
//
// The set of generated walks shown on screen

use rand::Rng;

use crate::config::WalkConfig;
use crate::models::{pt, Point, Walk, WalkKind};
use crate::services::walk_service;

pub struct Scene {
    walks: Vec<Walk>,
    kind: WalkKind,
    count: usize,
    iterations: usize,
    spawn_radius: f32,
    reset_radius: f32,
}

impl Scene {
    pub fn new(config: &WalkConfig) -> Self {
        Self {
            walks: Vec::with_capacity(config.count),
            kind: config.kind,
            count: config.count,
            iterations: config.iterations,
            spawn_radius: config.spawn_radius,
            reset_radius: config.reset_radius,
        }
    }

    pub fn walks(&self) -> &[Walk] {
        &self.walks
    }

    pub fn kind(&self) -> WalkKind {
        self.kind
    }

    pub fn total_points(&self) -> usize {
        self.walks.iter().map(Walk::len).sum()
    }

    /// First population, starting points close to the origin.
    pub fn populate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.generate(rng, self.spawn_radius);
    }

    /// Throws away every walk and generates a fresh set over a wider area.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.generate(rng, self.reset_radius);
    }

    /// Switches generator and regenerates. Returns false if `kind` was
    /// already active.
    pub fn set_kind<R: Rng + ?Sized>(&mut self, kind: WalkKind, rng: &mut R) -> bool {
        if kind == self.kind {
            return false;
        }
        self.kind = kind;
        self.reset(rng);
        true
    }

    fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R, radius: f32) {
        self.walks.clear();
        for _ in 0..self.count {
            let start = random_start(rng, radius);
            self.walks
                .push(walk_service::generate(self.kind, self.iterations, start, rng));
        }

        tracing::info!(
            kind = %self.kind,
            walks = self.walks.len(),
            points = self.total_points(),
            "generated walks"
        );
    }
}

fn random_start<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Point<f32> {
    if radius <= 0.0 {
        return pt(0.0, 0.0);
    }
    pt(
        rng.gen_range(-radius..=radius),
        rng.gen_range(-radius..=radius),
    )
}
