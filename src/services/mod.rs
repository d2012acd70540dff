pub mod walk_service;

pub use walk_service::{grid_walk, self_avoiding_grid_walk, smoothed_walk, VisitedSet};
