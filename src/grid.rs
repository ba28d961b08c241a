//! HexGrid main structure

use crate::config::GridConfig;
use crate::error::Result;
use crate::face::{Quad, Triangle};
use crate::generation::{generate_raw_mesh, relax_once, reshape_once, NeighborLists};
use crate::point::Point;

#[cfg(feature = "spatial-index")]
use crate::spatial::SpatialIndex;
#[cfg(feature = "spatial-index")]
use glam::Vec2;

/// A complete generated hexagrid mesh
///
/// The grid is the mutable pipeline context: created by [`generate`],
/// mutated in place by the per-tick [`relax`] and [`reshape`] stages, and
/// discarded when the host regenerates with new parameters. Faces
/// reference points purely by index into the grid's point collection.
///
/// [`generate`]: HexGrid::generate
/// [`relax`]: HexGrid::relax
/// [`reshape`]: HexGrid::reshape
///
/// # Examples
///
/// ```
/// use rust_hexagrid::*;
///
/// let config = GridConfigBuilder::new()
///     .seed(42)
///     .side_size(4)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let mut grid = HexGrid::generate(config).unwrap();
/// println!("Generated {} points", grid.point_count());
///
/// // Drive the damped iteration stages once per tick
/// grid.relax();
/// grid.reshape();
/// ```
#[derive(Clone)]
pub struct HexGrid {
    /// Configuration used to generate this grid
    config: GridConfig,

    /// All mesh points (lattice points first, subdivision points behind)
    points: Vec<Point>,

    /// Lattice triangles, consumed entries tombstoned
    triangles: Vec<Triangle>,

    /// Base quads followed by subdivision quads
    quads: Vec<Quad>,

    /// Boundary between merged and subdivided quads
    base_quad_count: usize,

    /// Adjacency lists from the most recent relax call (empty before the
    /// first tick)
    neighbors: NeighborLists,
}

impl HexGrid {
    /// Generate a grid by running the one-shot pipeline stages
    ///
    /// Triangulates the hexagonal lattice, merges triangle pairs into
    /// quads with the configured seed, and subdivides all faces. The
    /// per-tick stages are not run; call [`relax`](Self::relax) and
    /// [`reshape`](Self::reshape) on the host's cadence afterwards.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_hexagrid::*;
    ///
    /// let config = GridConfigBuilder::new().seed(7).build().unwrap();
    /// let grid = HexGrid::generate(config).unwrap();
    /// assert!(grid.quads().len() > grid.base_quad_count());
    /// ```
    pub fn generate(config: GridConfig) -> Result<Self> {
        let raw = generate_raw_mesh(&config);

        Ok(Self {
            config,
            points: raw.points,
            triangles: raw.triangles,
            quads: raw.quads,
            base_quad_count: raw.base_quad_count,
            neighbors: Vec::new(),
        })
    }

    /// Apply one relaxation iteration
    ///
    /// Rebuilds the vertex adjacency graph from the post-subdivision
    /// quads and moves every interior point to the mean of its neighbors'
    /// pre-sweep positions. The rebuilt adjacency is kept for
    /// [`neighbor_lists`](Self::neighbor_lists) until the next call.
    pub fn relax(&mut self) {
        self.neighbors = relax_once(&mut self.points, &self.quads[self.base_quad_count..]);
    }

    /// Apply one reshaping iteration
    ///
    /// Nudges every boundary point 10% of the way toward the target
    /// circle of radius `side_size - 1` around the lattice center.
    pub fn reshape(&mut self) {
        reshape_once(&mut self.points, self.config.side_size);
    }

    /// Get the configuration used to generate this grid
    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Get the number of points in the grid
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Get all points as a slice
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Get a point by index
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    pub fn get_point(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Get all lattice triangles, including tombstoned entries
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Count the triangles that survived pair merging
    pub fn valid_triangle_count(&self) -> usize {
        self.triangles.iter().filter(|t| t.valid).count()
    }

    /// Get all quads, base quads first
    #[inline]
    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    /// Get the number of quads produced by merging
    ///
    /// Quads at indices below this came from triangle-pair merging; the
    /// rest came from subdivision. Relaxation only reads the latter.
    #[inline]
    pub fn base_quad_count(&self) -> usize {
        self.base_quad_count
    }

    /// Get the adjacency lists built by the most recent relax call
    ///
    /// Empty until [`relax`](Self::relax) has run at least once.
    #[inline]
    pub fn neighbor_lists(&self) -> &NeighborLists {
        &self.neighbors
    }

    /// Build a spatial index over the current point positions
    ///
    /// The index snapshots positions at build time; relax and reshape
    /// move points, so rebuild after ticking if queries must stay exact.
    #[cfg(feature = "spatial-index")]
    pub fn build_spatial_index(&self) -> SpatialIndex {
        let positions: Vec<Vec2> = self.points.iter().map(|p| p.position).collect();
        SpatialIndex::new(&positions)
    }
}
