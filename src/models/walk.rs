// src/models/walk.rs
//
// A generated path and the kinds of generator that can produce one

use serde::Deserialize;
use std::fmt;

use crate::models::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkKind {
    Grid,
    SelfAvoiding,
    #[default]
    Smooth,
}

impl fmt::Display for WalkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WalkKind::Grid => "grid",
            WalkKind::SelfAvoiding => "self_avoiding",
            WalkKind::Smooth => "smooth",
        };
        f.write_str(name)
    }
}

/// One generated path. Lattice walks keep integer points, the smoothed walk
/// keeps floats.
#[derive(Debug, Clone, PartialEq)]
pub enum Walk {
    Lattice(Vec<Point<i32>>),
    Continuous(Vec<Point<f32>>),
}

impl Walk {
    pub fn len(&self) -> usize {
        match self {
            Walk::Lattice(points) => points.len(),
            Walk::Continuous(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every point widened to world-space floats, in walk order.
    pub fn world_points(&self) -> Box<dyn Iterator<Item = Point<f32>> + '_> {
        match self {
            Walk::Lattice(points) => Box::new(points.iter().map(|&p| Point::from(p))),
            Walk::Continuous(points) => Box::new(points.iter().copied()),
        }
    }
}
