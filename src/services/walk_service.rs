// src/services/walk_service.rs
//
// Random-walk generators: lattice walk, self-avoiding lattice walk and the
// smoothed continuous walk

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::f32::consts::TAU;

use crate::models::point::BuildCombineHasher;
use crate::models::{pt, Point, Walk, WalkKind};

/// Unit steps along each axis, in both directions.
pub const AXIS_DIRECTIONS: [Point<i32>; 4] = [pt(1, 0), pt(-1, 0), pt(0, 1), pt(0, -1)];

/// Lattice steps are one or two cells long.
pub const MIN_RADIUS: i32 = 1;
pub const MAX_RADIUS: i32 = 2;

/// Step length range of the smoothed walk.
pub const MIN_STEP: f32 = 2.5;
pub const MAX_STEP: f32 = 7.5;

/// Minimum |cos| between consecutive smoothed-walk segments.
pub const ALIGNMENT_THRESHOLD: f32 = 0.98;

/// Rejection attempts per smoothed step before falling back to going straight.
pub const MAX_ALIGNMENT_ATTEMPTS: usize = 4096;

pub type VisitedSet = HashSet<Point<i32>, BuildCombineHasher>;

/// Dispatches to the generator for `kind`. Lattice kinds round `start` to
/// the nearest cell.
pub fn generate<R: Rng + ?Sized>(
    kind: WalkKind,
    iterations: usize,
    start: Point<f32>,
    rng: &mut R,
) -> Walk {
    let cell = pt(start.x.round() as i32, start.y.round() as i32);
    match kind {
        WalkKind::Grid => Walk::Lattice(grid_walk(iterations, cell, rng)),
        WalkKind::SelfAvoiding => Walk::Lattice(self_avoiding_grid_walk(iterations, cell, rng)),
        WalkKind::Smooth => Walk::Continuous(smoothed_walk(iterations, start, rng)),
    }
}

/// Unconstrained lattice walk of exactly `iterations` points.
pub fn grid_walk<R: Rng + ?Sized>(
    iterations: usize,
    start: Point<i32>,
    rng: &mut R,
) -> Vec<Point<i32>> {
    let mut points = Vec::with_capacity(iterations);
    if iterations == 0 {
        return points;
    }

    let mut current = start;
    points.push(current);
    for _ in 1..iterations {
        let dir = AXIS_DIRECTIONS[rng.gen_range(0..AXIS_DIRECTIONS.len())];
        let radius = rng.gen_range(MIN_RADIUS..=MAX_RADIUS);
        current += dir * radius;
        points.push(current);
    }

    points
}

/// Lattice walk that never revisits a cell. Stops early, without
/// backtracking, as soon as every candidate at the drawn radius is taken.
pub fn self_avoiding_grid_walk<R: Rng + ?Sized>(
    iterations: usize,
    start: Point<i32>,
    rng: &mut R,
) -> Vec<Point<i32>> {
    let mut visited = VisitedSet::default();
    self_avoiding_grid_walk_in(iterations, start, &mut visited, rng)
}

/// Same as [`self_avoiding_grid_walk`] but treats every cell already in
/// `visited` as occupied. Cells the walk enters are added to `visited`.
pub fn self_avoiding_grid_walk_in<R: Rng + ?Sized>(
    iterations: usize,
    start: Point<i32>,
    visited: &mut VisitedSet,
    rng: &mut R,
) -> Vec<Point<i32>> {
    let mut points = Vec::with_capacity(iterations);
    if iterations == 0 {
        return points;
    }

    let mut current = start;
    visited.insert(current);
    points.push(current);

    let mut available = Vec::with_capacity(AXIS_DIRECTIONS.len());
    for step in 1..iterations {
        let radius = rng.gen_range(MIN_RADIUS..=MAX_RADIUS);

        available.clear();
        available.extend(
            AXIS_DIRECTIONS
                .iter()
                .map(|&dir| current + dir * radius)
                .filter(|candidate| !visited.contains(candidate)),
        );

        let Some(&next) = available.choose(rng) else {
            tracing::debug!(step, radius, x = current.x, y = current.y, "self-avoiding walk hit a dead end");
            break;
        };

        current = next;
        visited.insert(current);
        points.push(current);
    }

    points
}

/// Continuous walk whose segments only continue straight or double back.
///
/// Each new direction is rejection-sampled until it lies within the
/// [`ALIGNMENT_THRESHOLD`] band around the previous segment's direction or
/// its opposite.
pub fn smoothed_walk<R: Rng + ?Sized>(
    iterations: usize,
    start: Point<f32>,
    rng: &mut R,
) -> Vec<Point<f32>> {
    let mut points: Vec<Point<f32>> = Vec::with_capacity(iterations);
    if iterations == 0 {
        return points;
    }

    points.push(start);
    for i in 1..iterations {
        let previous = points[i - 1];

        let offset = if i >= 2 {
            let heading = (previous - points[i - 2]).normalized();
            aligned_offset(heading, rng)
        } else {
            random_unit(rng)
        };

        let magnitude = rng.gen_range(MIN_STEP..=MAX_STEP);
        points.push(previous + offset * magnitude);
    }

    points
}

fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Point<f32> {
    let angle = rng.gen_range(0.0..TAU);
    pt(angle.cos(), angle.sin())
}

/// Rejection-samples a unit vector nearly parallel or anti-parallel to
/// `heading`.
fn aligned_offset<R: Rng + ?Sized>(heading: Point<f32>, rng: &mut R) -> Point<f32> {
    if !heading.is_finite() {
        return random_unit(rng);
    }

    for _ in 0..MAX_ALIGNMENT_ATTEMPTS {
        let offset = random_unit(rng);
        if heading.dot(offset).abs() >= ALIGNMENT_THRESHOLD {
            return offset;
        }
    }

    tracing::trace!("alignment sampling exhausted, continuing straight");
    heading
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_lattice_step(from: Point<i32>, to: Point<i32>) -> bool {
        let d = to - from;
        let along_x = d.y == 0 && (1..=2).contains(&d.x.abs());
        let along_y = d.x == 0 && (1..=2).contains(&d.y.abs());
        along_x || along_y
    }

    #[test]
    fn test_grid_walk_length_and_steps() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in [1, 2, 5, 100, 2500] {
            let start = pt(-3, 11);
            let points = grid_walk(n, start, &mut rng);
            assert_eq!(points.len(), n);
            assert_eq!(points[0], start);
            for pair in points.windows(2) {
                assert!(is_lattice_step(pair[0], pair[1]), "bad step {:?}", pair);
            }
        }
    }

    #[test]
    fn test_grid_walk_five_from_origin() {
        let mut rng = StdRng::seed_from_u64(42);
        let points = grid_walk(5, pt(0, 0), &mut rng);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], pt(0, 0));
        for pair in points.windows(2) {
            let d = pair[1] - pair[0];
            // exactly one axis moves, by 1 or 2
            assert!((d.x == 0) != (d.y == 0));
            let magnitude = d.x.abs() + d.y.abs();
            assert!(magnitude == 1 || magnitude == 2);
        }
    }

    #[test]
    fn test_zero_iterations_is_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(grid_walk(0, pt(0, 0), &mut rng).is_empty());
        assert!(self_avoiding_grid_walk(0, pt(0, 0), &mut rng).is_empty());
        assert!(smoothed_walk(0, pt(0.0, 0.0), &mut rng).is_empty());
    }

    #[test]
    fn test_self_avoiding_walk_properties() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let n = 3000;
            let points = self_avoiding_grid_walk(n, pt(0, 0), &mut rng);

            assert!(!points.is_empty());
            assert!(points.len() <= n);

            let unique: VisitedSet = points.iter().copied().collect();
            assert_eq!(unique.len(), points.len(), "walk revisited a cell");

            for pair in points.windows(2) {
                assert!(is_lattice_step(pair[0], pair[1]));
            }

            if points.len() < n {
                // the drawn radius had no free candidate left
                let last = *points.last().unwrap();
                let boxed_in = (MIN_RADIUS..=MAX_RADIUS).any(|r| {
                    AXIS_DIRECTIONS
                        .iter()
                        .all(|&dir| unique.contains(&(last + dir * r)))
                });
                assert!(boxed_in, "stopped early with free neighbors at both radii");
            }
        }
    }

    #[test]
    fn test_self_avoiding_walk_surrounded_start() {
        let start = pt(4, -2);
        let mut visited = VisitedSet::default();
        for r in MIN_RADIUS..=MAX_RADIUS {
            for &dir in &AXIS_DIRECTIONS {
                visited.insert(start + dir * r);
            }
        }

        let mut rng = StdRng::seed_from_u64(3);
        let points = self_avoiding_grid_walk_in(50, start, &mut visited, &mut rng);
        assert_eq!(points, vec![start]);
        assert!(visited.contains(&start));
    }

    #[test]
    fn test_self_avoiding_walk_marks_visited() {
        let mut visited = VisitedSet::default();
        let mut rng = StdRng::seed_from_u64(11);
        let points = self_avoiding_grid_walk_in(200, pt(0, 0), &mut visited, &mut rng);
        assert_eq!(visited.len(), points.len());
        assert!(points.iter().all(|p| visited.contains(p)));
    }

    #[test]
    fn test_smoothed_walk_alignment() {
        let mut rng = StdRng::seed_from_u64(99);
        let n = 2000;
        let points = smoothed_walk(n, pt(12.5, -40.0), &mut rng);
        assert_eq!(points.len(), n);
        assert_eq!(points[0], pt(12.5, -40.0));

        for i in 2..n {
            let heading = (points[i - 1] - points[i - 2]).normalized();
            let step = (points[i] - points[i - 1]).normalized();
            let alignment = heading.dot(step).abs();
            assert!(
                alignment >= ALIGNMENT_THRESHOLD - 1e-3,
                "step {} turned too far: {}",
                i,
                alignment
            );
        }
    }

    #[test]
    fn test_smoothed_walk_step_lengths() {
        let mut rng = StdRng::seed_from_u64(5);
        let points = smoothed_walk(500, pt(0.0, 0.0), &mut rng);
        for pair in points.windows(2) {
            let length = (pair[1] - pair[0]).length();
            assert!(length >= MIN_STEP - 1e-3 && length <= MAX_STEP + 1e-3);
        }
    }

    #[test]
    fn test_aligned_offset_predicate() {
        let mut rng = StdRng::seed_from_u64(1);
        let heading = pt(0.6, 0.8);
        for _ in 0..200 {
            let offset = aligned_offset(heading, &mut rng);
            assert!(heading.dot(offset).abs() >= ALIGNMENT_THRESHOLD);
            assert!((offset.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_generate_dispatch() {
        let mut rng = StdRng::seed_from_u64(8);
        let start = pt(2.4, -1.6);

        match generate(WalkKind::Grid, 10, start, &mut rng) {
            Walk::Lattice(points) => {
                assert_eq!(points.len(), 10);
                assert_eq!(points[0], pt(2, -2));
            }
            other => panic!("expected lattice walk, got {:?}", other),
        }

        match generate(WalkKind::SelfAvoiding, 10, start, &mut rng) {
            Walk::Lattice(points) => assert_eq!(points[0], pt(2, -2)),
            other => panic!("expected lattice walk, got {:?}", other),
        }

        match generate(WalkKind::Smooth, 10, start, &mut rng) {
            Walk::Continuous(points) => {
                assert_eq!(points.len(), 10);
                assert_eq!(points[0], start);
            }
            other => panic!("expected continuous walk, got {:?}", other),
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = grid_walk(300, pt(0, 0), &mut StdRng::seed_from_u64(123));
        let b = grid_walk(300, pt(0, 0), &mut StdRng::seed_from_u64(123));
        assert_eq!(a, b);
    }

    #[test]
    fn test_grid_walk_uses_every_step() {
        let mut rng = StdRng::seed_from_u64(21);
        let points = grid_walk(2000, pt(0, 0), &mut rng);

        let steps: HashSet<Point<i32>> = points.windows(2).map(|w| w[1] - w[0]).collect();
        let expected: HashSet<Point<i32>> = (MIN_RADIUS..=MAX_RADIUS)
            .flat_map(|r| AXIS_DIRECTIONS.iter().map(move |&dir| dir * r))
            .collect();
        assert_eq!(steps.len(), 8);
        assert_eq!(steps, expected);
    }

    #[test]
    fn test_smoothed_walk_doubles_back() {
        let mut rng = StdRng::seed_from_u64(99);
        let points = smoothed_walk(2000, pt(0.0, 0.0), &mut rng);

        let mut reversals = 0;
        let mut straights = 0;
        for i in 2..points.len() {
            let heading = points[i - 1] - points[i - 2];
            let step = points[i] - points[i - 1];
            if heading.dot(step) < 0.0 {
                reversals += 1;
            } else {
                straights += 1;
            }
        }
        // both bands around 0 and 180 degrees are reachable
        assert!(reversals > 0, "walk never reversed");
        assert!(straights > 0, "walk never continued straight");
    }

    #[test]
    fn test_aligned_offset_samples_both_bands() {
        let mut rng = StdRng::seed_from_u64(2);
        let heading = pt(1.0, 0.0);
        let offsets: Vec<_> = (0..200).map(|_| aligned_offset(heading, &mut rng)).collect();
        assert!(offsets.iter().any(|o| o.x < 0.0));
        assert!(offsets.iter().any(|o| o.x > 0.0));
    }

    #[test]
    fn test_self_avoiding_walk_stops_on_blocked_radius() {
        let start = pt(0, 0);
        let mut stopped = 0;
        let mut continued = 0;

        for seed in 0..64 {
            // only the radius-1 ring is occupied; radius 2 stays free
            let mut visited: VisitedSet = AXIS_DIRECTIONS.iter().map(|&dir| start + dir).collect();
            let mut rng = StdRng::seed_from_u64(seed);
            let points = self_avoiding_grid_walk_in(50, start, &mut visited, &mut rng);

            if points.len() == 1 {
                stopped += 1;
            } else {
                continued += 1;
                let first = points[1] - start;
                assert_eq!(first.x.abs() + first.y.abs(), 2, "first step must use radius 2");
            }
        }

        // drawing radius 1 ends the walk instead of retrying with radius 2
        assert!(stopped > 0, "no walk stopped at the blocked radius");
        assert!(continued > 0, "no walk drew the free radius");
    }
}
