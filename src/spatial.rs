//! Spatial indexing for fast position-to-point lookups
//!
//! This module is only available with the `spatial-index` feature.

#[cfg(feature = "spatial-index")]
use glam::Vec2;
#[cfg(feature = "spatial-index")]
use kiddo::immutable::float::kdtree::ImmutableKdTree;
#[cfg(feature = "spatial-index")]
use kiddo::SquaredEuclidean;

/// Wrapper around a KD-tree for spatial queries
///
/// Provides O(log n) nearest-neighbor lookups to convert 2D positions
/// into point indices, for host-side picking and position queries.
///
/// The tree snapshots the positions given at build time. Relaxation and
/// reshaping move points, so rebuild the index after ticking when
/// queries must stay exact.
#[cfg(feature = "spatial-index")]
#[derive(Clone)]
pub struct SpatialIndex {
    tree: ImmutableKdTree<f32, usize, 2, 32>,
}

#[cfg(feature = "spatial-index")]
impl SpatialIndex {
    /// Build a spatial index from point positions
    ///
    /// # Arguments
    ///
    /// * `positions` - Slice of Vec2 positions, typically the grid's
    ///   current point positions
    ///
    /// # Example
    ///
    /// ```
    /// use rust_hexagrid::*;
    /// use glam::Vec2;
    ///
    /// # #[cfg(feature = "spatial-index")]
    /// # {
    /// let positions = vec![
    ///     Vec2::new(0.0, 0.0),
    ///     Vec2::new(1.0, 0.0),
    ///     Vec2::new(0.0, 1.0),
    /// ];
    ///
    /// let index = SpatialIndex::new(&positions);
    /// let point = index.find_nearest(Vec2::new(0.9, 0.1));
    /// assert_eq!(point, 1);
    /// # }
    /// ```
    pub fn new(positions: &[Vec2]) -> Self {
        // Convert Vec2 to [f32; 2] array format for kiddo
        let entries: Vec<[f32; 2]> = positions.iter().map(|p| [p.x, p.y]).collect();

        Self {
            tree: ImmutableKdTree::new_from_slice(&entries),
        }
    }

    /// Find the point nearest to a position
    ///
    /// # Arguments
    ///
    /// * `position` - 2D position to query
    ///
    /// # Returns
    ///
    /// Index of the nearest point
    pub fn find_nearest(&self, position: Vec2) -> usize {
        let query = [position.x, position.y];
        let result = self.tree.nearest_one::<SquaredEuclidean>(&query);
        result.item as usize
    }
}

#[cfg(test)]
#[cfg(feature = "spatial-index")]
mod tests {
    use super::*;

    #[test]
    fn test_spatial_index_basic() {
        let positions = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(0.0, 2.0),
            Vec2::new(-2.0, 0.0),
        ];

        let index = SpatialIndex::new(&positions);

        assert_eq!(index.find_nearest(Vec2::new(0.1, 0.1)), 0);
        assert_eq!(index.find_nearest(Vec2::new(1.9, -0.1)), 1);
        assert_eq!(index.find_nearest(Vec2::new(0.2, 1.8)), 2);
        assert_eq!(index.find_nearest(Vec2::new(-1.5, 0.0)), 3);
    }

    #[test]
    fn test_spatial_index_exact_match() {
        let positions = vec![Vec2::new(5.0, -1.0), Vec2::new(-3.0, 4.0)];

        let index = SpatialIndex::new(&positions);

        assert_eq!(index.find_nearest(positions[0]), 0);
        assert_eq!(index.find_nearest(positions[1]), 1);
    }
}
