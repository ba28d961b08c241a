//! Face Subdivision
//!
//! Splits every base quad into 4 sub-quads and every remaining valid
//! triangle into 3, using a face-centroid + edge-midpoint construction.
//! After this stage the mesh is quad-only at one extra refinement level.
//!
//! Midpoints are deduplicated across faces through a cache keyed by the
//! canonical undirected edge key `(min << 16) | max`, so two faces
//! sharing an edge reference the same midpoint index. Packing two
//! indices into one u32 bounds the vertex count at 65536.

use std::collections::HashMap;

use crate::face::{Quad, Triangle};
use crate::point::Point;

/// Cache from canonical edge key to midpoint index
type MidpointCache = HashMap<u32, usize>;

/// Subdivide all base quads and remaining valid triangles
///
/// Base quads are processed first, then valid triangles, sharing one
/// midpoint cache across both passes. New quads are appended behind the
/// base quads; new points are appended behind the lattice points.
///
/// # Arguments
///
/// * `points` - Point collection, extended in place with centroids and
///   midpoints
/// * `triangles` - Triangle list from merging; valid entries are
///   subdivided (their validity is untouched)
/// * `quads` - Quad collection; entries `[0, base_quad_count)` are
///   subdivided and the results appended
/// * `base_quad_count` - Number of quads produced by merging
pub fn subdivide_faces(
    points: &mut Vec<Point>,
    triangles: &[Triangle],
    quads: &mut Vec<Quad>,
    base_quad_count: usize,
) {
    let mut middles = MidpointCache::new();

    // quads to 4 quads
    for i in 0..base_quad_count {
        let indices = quads[i].vertices();
        subdivide(&indices, points, quads, &mut middles);
    }

    // triangles to 3 quads
    for triangle in triangles {
        if triangle.valid {
            subdivide(&triangle.vertices(), points, quads, &mut middles);
        }
    }
}

/// Subdivide a single N-sided face into N quads
///
/// Adds one centroid point (never boundary), one midpoint per edge
/// (boundary only if both endpoints are boundary, reused across faces via
/// the cache), and emits for each edge `x` the quad
/// `(centroid, midpoint[x], vertex[x+1], midpoint[x+1])`.
fn subdivide(indices: &[usize], points: &mut Vec<Point>, quads: &mut Vec<Quad>, middles: &mut MidpointCache) {
    let count = indices.len();
    let mut half_segment_index = vec![0; count];

    let index_center = points.len();
    {
        let mut center = glam::Vec2::ZERO;
        for &i in indices {
            center += points[i].position;
        }
        center /= count as f32;
        points.push(Point::from_position(center, false));
    }

    for x in 0..count {
        let index_a = indices[x];
        let index_b = indices[(x + 1) % count];

        let key = edge_key(index_a, index_b);
        let midpoint = *middles.entry(key).or_insert_with(|| {
            let boundary = points[index_a].boundary && points[index_b].boundary;
            let position = (points[index_a].position + points[index_b].position) * 0.5;
            points.push(Point::from_position(position, boundary));
            points.len() - 1
        });
        half_segment_index[x] = midpoint;
    }

    debug_assert!(points.len() < 1 << 16, "vertex count exceeds key packing");

    for x in 0..count {
        quads.push(Quad::new(
            index_center,
            half_segment_index[x],
            indices[(x + 1) % count],
            half_segment_index[(x + 1) % count],
        ));
    }
}

/// Canonical key for an undirected edge: low index in the high half-word
#[inline]
fn edge_key(a: usize, b: usize) -> u32 {
    debug_assert!(a < 1 << 16 && b < 1 << 16, "vertex index exceeds key packing");
    ((a.min(b) as u32) << 16) | a.max(b) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_points(coords: &[(f32, f32, bool)]) -> Vec<Point> {
        coords
            .iter()
            .map(|&(x, y, boundary)| Point::new(x, y, boundary))
            .collect()
    }

    #[test]
    fn test_edge_key_is_order_independent() {
        assert_eq!(edge_key(3, 11), edge_key(11, 3));
        assert_eq!(edge_key(0, 1), 1);
        assert_eq!(edge_key(2, 1), (1 << 16) | 2);
    }

    #[test]
    fn test_subdivide_single_quad() {
        let mut points = unit_points(&[
            (0.0, 0.0, true),
            (1.0, 0.0, true),
            (1.0, 1.0, true),
            (0.0, 1.0, true),
        ]);
        let mut quads = vec![Quad::new(0, 1, 2, 3)];

        subdivide_faces(&mut points, &[], &mut quads, 1);

        // 1 centroid + 4 midpoints, 4 sub-quads behind the base quad
        assert_eq!(points.len(), 9);
        assert_eq!(quads.len(), 5);

        // Centroid is interior and centered
        assert_eq!(points[4].position, glam::Vec2::new(0.5, 0.5));
        assert!(points[4].is_interior());

        // Every sub-quad fans out from the centroid
        for quad in &quads[1..] {
            assert_eq!(quad.a, 4);
        }
    }

    #[test]
    fn test_subdivide_single_triangle() {
        let mut points = unit_points(&[(0.0, 0.0, true), (1.0, 0.0, true), (0.0, 1.0, true)]);
        let triangles = vec![Triangle::new(0, 1, 2)];
        let mut quads = Vec::new();

        subdivide_faces(&mut points, &triangles, &mut quads, 0);

        // 1 centroid + 3 midpoints, 3 sub-quads
        assert_eq!(points.len(), 7);
        assert_eq!(quads.len(), 3);
    }

    #[test]
    fn test_invalid_triangles_skipped() {
        let mut points = unit_points(&[(0.0, 0.0, true), (1.0, 0.0, true), (0.0, 1.0, true)]);
        let mut triangles = vec![Triangle::new(0, 1, 2)];
        triangles[0].invalidate();
        let mut quads = Vec::new();

        subdivide_faces(&mut points, &triangles, &mut quads, 0);

        assert_eq!(points.len(), 3);
        assert!(quads.is_empty());
    }

    #[test]
    fn test_shared_edge_reuses_midpoint() {
        // Two quads sharing edge 1-2
        let mut points = unit_points(&[
            (0.0, 0.0, true),
            (1.0, 0.0, true),
            (1.0, 1.0, true),
            (0.0, 1.0, true),
            (2.0, 0.0, true),
            (2.0, 1.0, true),
        ]);
        let mut quads = vec![Quad::new(0, 1, 2, 3), Quad::new(1, 4, 5, 2)];

        subdivide_faces(&mut points, &[], &mut quads, 2);

        // Two centroids plus 7 distinct edge midpoints (the shared edge
        // counted once), and 4 sub-quads per base quad
        assert_eq!(points.len(), 6 + 2 + 7);
        assert_eq!(quads.len(), 2 + 8);

        // The shared midpoint appears in sub-quads of both base quads
        let shared = points
            .iter()
            .position(|p| p.position == glam::Vec2::new(1.0, 0.5))
            .unwrap();
        let first_half = quads[2..6]
            .iter()
            .any(|q| q.vertices().contains(&shared));
        let second_half = quads[6..10]
            .iter()
            .any(|q| q.vertices().contains(&shared));
        assert!(first_half && second_half);

        // No other point occupies the shared position
        let occurrences = points
            .iter()
            .filter(|p| p.position == glam::Vec2::new(1.0, 0.5))
            .count();
        assert_eq!(occurrences, 1);
    }

    #[test]
    fn test_midpoint_boundary_classification() {
        // Edge 0-1 has two boundary endpoints, edges touching 2 do not
        let mut points = unit_points(&[(0.0, 0.0, true), (1.0, 0.0, true), (0.0, 1.0, false)]);
        let triangles = vec![Triangle::new(0, 1, 2)];
        let mut quads = Vec::new();

        subdivide_faces(&mut points, &triangles, &mut quads, 0);

        // Centroid first, then midpoints in edge order 0-1, 1-2, 2-0
        assert!(points[3].is_interior());
        assert!(points[4].boundary);
        assert!(points[5].is_interior());
        assert!(points[6].is_interior());
    }

    #[test]
    fn test_quad_emission_order() {
        let mut points = unit_points(&[
            (0.0, 0.0, true),
            (2.0, 0.0, true),
            (2.0, 2.0, true),
            (0.0, 2.0, true),
        ]);
        let mut quads = vec![Quad::new(0, 1, 2, 3)];

        subdivide_faces(&mut points, &[], &mut quads, 1);

        // Sub-quad x is (centroid, mid[x], vertex[x+1], mid[x+1])
        assert_eq!(quads[1], Quad::new(4, 5, 1, 6));
        assert_eq!(quads[2], Quad::new(4, 6, 2, 7));
        assert_eq!(quads[3], Quad::new(4, 7, 3, 8));
        assert_eq!(quads[4], Quad::new(4, 8, 0, 5));
    }
}
