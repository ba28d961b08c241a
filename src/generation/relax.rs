//! Neighbor-Based Relaxation
//!
//! One iteration of Laplacian smoothing over the subdivided quad mesh:
//! every interior point moves to the unweighted mean of its graph
//! neighbors. The neighbor graph is rebuilt from scratch on every call
//! from the post-subdivision quads only; pre-subdivision quads and
//! triangles would reintroduce coarse-lattice artifacts.
//!
//! All moved points read neighbor positions from a snapshot captured
//! before the sweep, so the result does not depend on iteration order.

use glam::Vec2;

use crate::face::Quad;
use crate::point::Point;

/// Per-point neighbor index lists
///
/// Each list holds at most 6 distinct entries (the interior vertex degree
/// of a regular hex lattice); insertion order is irrelevant.
pub type NeighborLists = Vec<Vec<usize>>;

/// Build the vertex adjacency graph implied by a quad set
///
/// Every quad edge registers a neighbor relation on both of its
/// endpoints. Duplicate relations are dropped; a point accumulating more
/// than 6 distinct neighbors is an invariant violation.
///
/// # Arguments
///
/// * `point_count` - Size of the point collection (graph node count)
/// * `quads` - Quad slice to read edges from (post-subdivision quads)
pub fn build_neighbor_lists(point_count: usize, quads: &[Quad]) -> NeighborLists {
    let mut neighbors: NeighborLists = vec![Vec::new(); point_count];

    for quad in quads {
        let indices = quad.vertices();
        for j in 0..4 {
            let index1 = indices[j];
            let index2 = indices[(j + 1) & 3];
            add_neighbor(&mut neighbors[index1], index2);
            add_neighbor(&mut neighbors[index2], index1);
        }
    }

    neighbors
}

/// Register a neighbor relation, ignoring duplicates
#[inline]
fn add_neighbor(list: &mut Vec<usize>, index: usize) {
    if !list.contains(&index) {
        debug_assert!(list.len() < 6, "point exceeds hex-lattice vertex degree");
        list.push(index);
    }
}

/// Apply one Laplacian smoothing iteration to the interior points
///
/// Boundary points are never moved. Each interior point's position
/// becomes the arithmetic mean of its neighbors' pre-sweep positions;
/// points without neighbors (only reachable when the stage is driven
/// outside the normal pipeline order) are left in place.
///
/// Designed to be called once per external tick: each call reads the
/// current positions and produces the next.
///
/// # Arguments
///
/// * `points` - Point collection, positions mutated in place
/// * `quads` - Post-subdivision quad slice to relax against
///
/// # Returns
///
/// The neighbor lists built for this iteration, for callers that want to
/// inspect or draw the relaxation graph
pub fn relax_once(points: &mut [Point], quads: &[Quad]) -> NeighborLists {
    let neighbors = build_neighbor_lists(points.len(), quads);

    let snapshot: Vec<Vec2> = points.iter().map(|p| p.position).collect();
    for (i, point) in points.iter_mut().enumerate() {
        if point.boundary || neighbors[i].is_empty() {
            continue;
        }
        let mut sum = Vec2::ZERO;
        for &neighbor in &neighbors[i] {
            sum += snapshot[neighbor];
        }
        point.position = sum / neighbors[i].len() as f32;
    }

    neighbors
}
