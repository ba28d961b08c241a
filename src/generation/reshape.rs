//! Boundary Reshaping
//!
//! Nudges every boundary point toward a target circle around the
//! lattice's geometric center. Each call corrects 10% of the signed
//! radius error, so the boundary converges onto the circle over many
//! ticks instead of snapping there.

use glam::Vec2;

use crate::point::Point;

/// Fraction of the radius error corrected per call
const DAMPING: f32 = 0.1;

/// Pull boundary points toward the target circular radius
///
/// The target radius is `side_size - 1` and the circle's center is the
/// lattice center `(0, (side_size * 2 - 1) / 2)`. For each boundary
/// point with offset `D` from the center, the position moves by
/// `D * (radius - |D|) * 0.1`. Interior points are untouched.
///
/// Designed to be called once per external tick, like relaxation.
///
/// # Arguments
///
/// * `points` - Point collection, boundary positions mutated in place
/// * `side_size` - The hexagon side length the lattice was built with
pub fn reshape_once(points: &mut [Point], side_size: usize) {
    let radius = side_size as f32 - 1.0;
    let center = Vec2::new(0.0, (side_size * 2 - 1) as f32 * 0.5);

    for point in points.iter_mut() {
        if !point.boundary {
            continue;
        }
        let d = point.position - center;
        let distance = radius - d.length();
        point.position += d * distance * DAMPING;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_points_untouched() {
        let mut points = vec![
            Point::new(0.3, 1.2, false),
            Point::new(0.0, 0.0, true),
        ];
        let interior_before = points[0].position;

        reshape_once(&mut points, 2);

        assert_eq!(points[0].position, interior_before);
        assert_ne!(points[1].position, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_correction_is_ten_percent_of_radius_error() {
        // side_size 3: radius 2, center (0, 2.5)
        let mut points = vec![Point::new(4.0, 2.5, true)];

        reshape_once(&mut points, 3);

        // D = (4, 0), |D| = 4, error = 2 - 4 = -2, step = D * -0.2
        let expected = Vec2::new(4.0 - 0.8, 2.5);
        assert!((points[0].position - expected).length() < 1e-6);
    }

    #[test]
    fn test_point_on_circle_stays() {
        let mut points = vec![Point::new(2.0, 2.5, true)];
        reshape_once(&mut points, 3);
        assert!((points[0].position - Vec2::new(2.0, 2.5)).length() < 1e-6);
    }

    #[test]
    fn test_repeated_calls_converge_to_circle() {
        let center = Vec2::new(0.0, 2.5);
        let radius = 2.0;
        let mut points = vec![
            Point::new(0.5, 2.5, true),
            Point::new(-3.0, 4.0, true),
        ];

        let initial: Vec<f32> = points
            .iter()
            .map(|p| ((p.position - center).length() - radius).abs())
            .collect();

        for _ in 0..50 {
            reshape_once(&mut points, 3);
        }

        for (point, initial_error) in points.iter().zip(&initial) {
            let error = ((point.position - center).length() - radius).abs();
            assert!(error < *initial_error);
            assert!(error < 0.05, "radius error {} did not converge", error);
        }
    }
}
