//! Lattice Point Structure
//!
//! Represents a single mesh vertex with its position and boundary classification.

use glam::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single vertex of the hexagrid mesh
///
/// Points live in one ordered, index-addressed collection owned by the grid.
/// Triangles and quads reference points purely by index into that collection;
/// indices are stable for the lifetime of a generation run and never reused.
///
/// # Design Notes
///
/// The `boundary` flag is fixed at creation and never changes. Relaxation
/// moves only interior points; reshaping moves only boundary points. The
/// position itself is mutated in place by those two stages.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Current 2D position
    pub position: Vec2,

    /// Whether this point lies on the hexagon's outer ring
    ///
    /// Set for points on the first/last lattice column or the first/last
    /// row of their column, and for subdivision midpoints whose edge had
    /// two boundary endpoints. Centroid points are never boundary.
    pub boundary: bool,
}

impl Point {
    /// Create a new point from coordinates
    #[inline]
    pub fn new(x: f32, y: f32, boundary: bool) -> Self {
        Self {
            position: Vec2::new(x, y),
            boundary,
        }
    }

    /// Create a new point from an existing position vector
    #[inline]
    pub fn from_position(position: Vec2, boundary: bool) -> Self {
        Self { position, boundary }
    }

    /// Check whether this point may be moved by relaxation
    #[inline]
    pub fn is_interior(&self) -> bool {
        !self.boundary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_creation() {
        let p = Point::new(1.5, -2.0, true);
        assert_eq!(p.position, Vec2::new(1.5, -2.0));
        assert!(p.boundary);
        assert!(!p.is_interior());
    }

    #[test]
    fn test_point_from_position() {
        let p = Point::from_position(Vec2::new(0.25, 0.75), false);
        assert_eq!(p.position.x, 0.25);
        assert_eq!(p.position.y, 0.75);
        assert!(p.is_interior());
    }
}
