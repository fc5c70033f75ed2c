//! Overlap resolution for newly placed points.
//!
//! One sweep over the existing points in the order given. Every neighbor
//! closer than `min_distance` pushes the candidate straight away from it by
//! the missing distance; displacements accumulate, earlier neighbors are not
//! revisited, and the result is clamped into the cube at the end. The
//! outcome depends on neighbor order and may still leave the candidate
//! closer than `min_distance` to some neighbor.

use super::point::Point;

/// Nudge `candidate` away from near neighbors, then clamp into `[-bound, bound]`
pub fn resolve_collisions<'a, I>(candidate: Point, existing: I, min_distance: f64, bound: f64) -> Point
where
    I: IntoIterator<Item = &'a Point>,
{
    let mut adjusted = candidate;

    for neighbor in existing {
        let dist = adjusted.distance(neighbor);
        if dist >= min_distance {
            continue;
        }

        let dx = adjusted.x - neighbor.x;
        let dy = adjusted.y - neighbor.y;
        let dz = adjusted.z - neighbor.z;

        // Coincident points have no direction to move in
        let length = (dx * dx + dy * dy + dz * dz).sqrt();
        if length > 0.0 {
            let scale = (min_distance - dist) / length;
            adjusted.x += dx * scale;
            adjusted.y += dy * scale;
            adjusted.z += dz * scale;
        }
    }

    adjusted.clamped(bound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const MIN_DISTANCE: f64 = 1.0;
    const BOUND: f64 = 5.0;

    fn resolve(candidate: Point, existing: &[Point]) -> Point {
        resolve_collisions(candidate, existing, MIN_DISTANCE, BOUND)
    }

    fn assert_close(actual: Point, expected: Point) {
        assert!(
            actual.distance(&expected) < 1e-9,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_empty_set_is_noop() {
        let p = Point::new(1.5, -2.25, 4.0);
        assert_eq!(resolve(p, &[]), p);
    }

    #[test]
    fn test_far_neighbors_are_noop() {
        let p = Point::new(0.0, 0.0, 0.0);
        let existing = [
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, -3.0, 0.0),
            Point::new(2.0, 2.0, 2.0),
        ];
        assert_eq!(resolve(p, &existing), p);
    }

    #[test]
    fn test_pushes_to_min_distance() {
        let neighbor = Point::new(0.5, 0.0, 0.0);
        let result = resolve(Point::origin(), &[neighbor]);
        assert_close(result, Point::new(-0.5, 0.0, 0.0));
        assert!((result.distance(&neighbor) - MIN_DISTANCE).abs() < 1e-9);
    }

    #[test]
    fn test_push_direction_in_three_dimensions() {
        let neighbor = Point::new(1.0, 1.0, 1.0);
        let candidate = Point::new(1.2, 1.2, 1.1);
        let before = candidate.distance(&neighbor);
        let result = resolve(candidate, &[neighbor]);
        assert!((result.distance(&neighbor) - MIN_DISTANCE).abs() < 1e-9);
        // Moved along the original direction, away from the neighbor
        let factor = MIN_DISTANCE / before;
        assert_close(
            result,
            Point::new(1.0 + 0.2 * factor, 1.0 + 0.2 * factor, 1.0 + 0.1 * factor),
        );
    }

    #[test]
    fn test_coincident_is_noop_but_still_clamped() {
        let p = Point::new(2.0, 2.0, 2.0);
        assert_eq!(resolve(p, &[p]), p);

        let outside = Point::new(5.5, 0.0, -6.0);
        assert_eq!(resolve(outside, &[outside]), Point::new(5.0, 0.0, -5.0));
    }

    #[test]
    fn test_order_dependent_single_pass() {
        let a = Point::new(0.5, 0.0, 0.0);
        let b = Point::new(-0.6, 0.0, 0.0);

        let ab = resolve(Point::origin(), &[a, b]);
        let ba = resolve(Point::origin(), &[b, a]);

        assert_close(ab, Point::new(0.4, 0.0, 0.0));
        assert_close(ba, Point::new(-0.5, 0.0, 0.0));
        // Pushing away from b moved the candidate back near a, and a is not revisited
        assert!(ab.distance(&a) < MIN_DISTANCE);
    }

    #[test]
    fn test_clamps_after_push_past_boundary() {
        let neighbor = Point::new(4.5, 0.0, 0.0);
        let result = resolve(Point::new(4.9, 0.0, 0.0), &[neighbor]);
        assert_eq!(result, Point::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_bounds_invariant_randomized() {
        let mut rng = StdRng::seed_from_u64(0x1f2e3d4c);
        for _ in 0..200 {
            let count = rng.gen_range(0..40);
            let existing: Vec<Point> = (0..count)
                .map(|_| {
                    Point::new(
                        rng.gen_range(-5.0..=5.0),
                        rng.gen_range(-5.0..=5.0),
                        rng.gen_range(-5.0..=5.0),
                    )
                })
                .collect();
            let candidate = Point::new(
                rng.gen_range(-8.0..=8.0),
                rng.gen_range(-8.0..=8.0),
                rng.gen_range(-8.0..=8.0),
            );

            let result = resolve(candidate, &existing);
            assert!(result.within(BOUND), "{:?} escaped the cube", result);
        }
    }
}
