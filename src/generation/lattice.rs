//! Hexagonal Lattice Builder
//!
//! Generates the hexagonal point set and its initial all-triangle mesh.
//!
//! # Algorithm
//!
//! Points are placed column by column on a triangular lattice: column `x`
//! holds `side_size + x` points while `x < side_size` and
//! `side_size * 3 - 2 - x` afterwards, so the rows grow and then shrink
//! into the characteristic hexagon silhouette. Columns are spaced
//! `0.5 * tan(60°)` apart horizontally and each column is vertically
//! centered. Triangles connect each column to the next with alternating
//! orientation in the standard strip pattern; the loop bounds differ by
//! one between the growing and shrinking halves so no degenerate triangle
//! is emitted at the widest row.

use crate::face::Triangle;
use crate::point::Point;

/// Generate the hexagonal lattice points and the all-triangle mesh
///
/// A point is flagged boundary if it lies on the first or last column, or
/// on the first or last row of its column (the hexagon's outer ring).
/// Every generated triangle starts valid.
///
/// A `side_size` below 2 yields empty collections.
///
/// # Arguments
///
/// * `side_size` - Hexagon side length in lattice steps
///
/// # Returns
///
/// The point collection and the triangle list, both indexed from 0
///
/// # Example
///
/// ```rust
/// use rust_hexagrid::generation::build_lattice;
///
/// let (points, triangles) = build_lattice(2);
/// assert_eq!(points.len(), 7);
/// assert_eq!(triangles.len(), 6);
/// ```
pub fn build_lattice(side_size: usize) -> (Vec<Point>, Vec<Triangle>) {
    let mut points = Vec::new();
    let mut triangles = Vec::new();

    if side_size < 2 {
        return (points, triangles);
    }

    let side_length = 0.5 * 60.0_f32.to_radians().tan();
    let last_column = side_size * 2 - 2;

    for x in 0..side_size * 2 - 1 {
        let height = column_height(side_size, x);
        let delta_height = side_size as f32 - height as f32 * 0.5;
        for y in 0..height {
            let boundary = x == 0 || x == last_column || y == 0 || y == height - 1;
            points.push(Point::new(
                (x as i32 - side_size as i32 + 1) as f32 * side_length,
                y as f32 + delta_height,
                boundary,
            ));
        }
    }

    let mut offset = 0;
    for x in 0..side_size * 2 - 2 {
        let height = column_height(side_size, x);
        if x < side_size - 1 {
            // growing half: next column is one taller
            for y in 0..height {
                triangles.push(Triangle::new(
                    offset + y,
                    offset + y + height,
                    offset + y + height + 1,
                ));
                if y >= height - 1 {
                    break;
                }
                triangles.push(Triangle::new(
                    offset + y + height + 1,
                    offset + y + 1,
                    offset + y,
                ));
            }
        } else {
            // shrinking half: next column is one shorter
            for y in 0..height - 1 {
                triangles.push(Triangle::new(offset + y, offset + y + height, offset + y + 1));
                if y >= height - 2 {
                    break;
                }
                triangles.push(Triangle::new(
                    offset + y + 1,
                    offset + y + height,
                    offset + y + height + 1,
                ));
            }
        }
        offset += height;
    }

    (points, triangles)
}

/// Number of lattice points in column `x`
#[inline]
fn column_height(side_size: usize, x: usize) -> usize {
    if x < side_size {
        side_size + x
    } else {
        side_size * 3 - 2 - x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sum of column heights, the expected total point count
    fn expected_point_count(side_size: usize) -> usize {
        (0..side_size * 2 - 1)
            .map(|x| column_height(side_size, x))
            .sum()
    }

    #[test]
    fn test_degenerate_side_size() {
        for side_size in [0, 1] {
            let (points, triangles) = build_lattice(side_size);
            assert!(points.is_empty());
            assert!(triangles.is_empty());
        }
    }

    #[test]
    fn test_point_counts() {
        for side_size in 2..=8 {
            let (points, _) = build_lattice(side_size);
            assert_eq!(
                points.len(),
                expected_point_count(side_size),
                "point count mismatch for side size {}",
                side_size
            );
        }
    }

    #[test]
    fn test_triangle_counts() {
        // A hexagon of side s tiles into 6 * (s - 1)^2 unit triangles
        for side_size in 2..=8 {
            let (_, triangles) = build_lattice(side_size);
            let expected = 6 * (side_size - 1) * (side_size - 1);
            assert_eq!(
                triangles.len(),
                expected,
                "triangle count mismatch for side size {}",
                side_size
            );
        }
    }

    #[test]
    fn test_triangle_indices_in_range() {
        for side_size in 2..=8 {
            let (points, triangles) = build_lattice(side_size);
            for tri in &triangles {
                for index in tri.vertices() {
                    assert!(index < points.len());
                }
            }
        }
    }

    #[test]
    fn test_triangles_start_valid_with_distinct_vertices() {
        let (_, triangles) = build_lattice(5);
        for tri in &triangles {
            assert!(tri.valid);
            let [a, b, c] = tri.vertices();
            assert!(a != b && b != c && a != c);
        }
    }

    #[test]
    fn test_side_size_two_boundary_flags() {
        // Columns have heights [2, 3, 2]; only the middle point of the
        // middle column is interior.
        let (points, _) = build_lattice(2);
        assert_eq!(points.len(), 7);
        for (i, point) in points.iter().enumerate() {
            if i == 3 {
                assert!(point.is_interior(), "center point must be interior");
            } else {
                assert!(point.boundary, "point {} must be boundary", i);
            }
        }
        // The interior point sits at the lattice's geometric center
        assert_eq!(points[3].position.x, 0.0);
        assert_eq!(points[3].position.y, 1.5);
    }

    #[test]
    fn test_columns_vertically_centered() {
        let (points, _) = build_lattice(3);
        // First column: height 3, offset 3 - 1.5 = 1.5, rows at y = 1.5..3.5
        assert_eq!(points[0].position.y, 1.5);
        assert_eq!(points[2].position.y, 3.5);
        // Middle column (x = 2): height 5, offset 0.5, rows at y = 0.5..4.5
        let mid_start = 3 + 4;
        assert_eq!(points[mid_start].position.y, 0.5);
        assert_eq!(points[mid_start + 4].position.y, 4.5);
    }

    #[test]
    fn test_determinism() {
        let (points1, triangles1) = build_lattice(6);
        let (points2, triangles2) = build_lattice(6);
        assert_eq!(points1, points2);
        assert_eq!(triangles1, triangles2);
    }
}
