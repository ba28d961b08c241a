//! Core hexagrid generation pipeline
//!
//! Runs the one-shot stages in order: lattice triangulation, triangle-pair
//! merging, and face subdivision. The per-tick stages (relaxation and
//! reshaping) live here too but are invoked by the grid on its own cadence.

pub mod lattice;
pub mod merge;
pub mod relax;
pub mod reshape;
pub mod subdivide;

pub use lattice::build_lattice;
pub use merge::{adjacent_triangles, merge_triangle_pairs};
pub use relax::{build_neighbor_lists, relax_once, NeighborLists};
pub use reshape::reshape_once;
pub use subdivide::subdivide_faces;

use std::time::Instant;

use crate::config::GridConfig;
use crate::face::{Quad, Triangle};
use crate::point::Point;

/// A generated mesh without the surrounding grid context
///
/// This is an intermediate representation produced by the one-shot
/// pipeline; the grid wraps it and drives the per-tick stages afterwards.
#[derive(Debug, Clone)]
pub struct RawMesh {
    /// All mesh points, lattice points first, subdivision points behind
    pub points: Vec<Point>,
    /// Lattice triangles; entries consumed by merging are tombstoned
    pub triangles: Vec<Triangle>,
    /// Base quads `[0, base_quad_count)` followed by subdivision quads
    pub quads: Vec<Quad>,
    /// Number of quads produced by triangle-pair merging
    pub base_quad_count: usize,
}

/// Run the one-shot generation stages for a configuration
///
/// Stage order is fixed: lattice, merge, subdivide. Each stage fully
/// completes before the next begins; the subdivision's midpoint cache is
/// shared between its quad and triangle passes.
pub fn generate_raw_mesh(config: &GridConfig) -> RawMesh {
    let total_start = Instant::now();

    let lattice_start = Instant::now();
    let (mut points, mut triangles) = lattice::build_lattice(config.side_size);
    let lattice_points = points.len();
    let lattice_time = lattice_start.elapsed();

    let merge_start = Instant::now();
    let mut quads = merge::merge_triangle_pairs(&mut triangles, config.seed, config.search_iterations);
    let base_quad_count = quads.len();
    let merge_time = merge_start.elapsed();

    let subdivide_start = Instant::now();
    subdivide::subdivide_faces(&mut points, &triangles, &mut quads, base_quad_count);
    let subdivide_time = subdivide_start.elapsed();

    eprintln!(
        "[Hexagrid] side {}: lattice={:?} ({} pts, {} tris), merge={:?} ({} quads), subdivide={:?} ({} pts, {} quads), total={:?}",
        config.side_size,
        lattice_time,
        lattice_points,
        triangles.len(),
        merge_time,
        base_quad_count,
        subdivide_time,
        points.len(),
        quads.len(),
        total_start.elapsed()
    );

    RawMesh {
        points,
        triangles,
        quads,
        base_quad_count,
    }
}
