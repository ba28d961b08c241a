//! Hexagonal quad-mesh generation
//!
//! A standalone library for procedurally generating hexagon-shaped planar
//! quad meshes, suitable for use with any game engine (Bevy, Godot, etc.)
//!
//! Generation is a staged pipeline: triangulate a hexagonal point
//! lattice, merge random adjacent triangle pairs into quads, subdivide
//! every face into quads, then repeatedly smooth interior points and
//! pull boundary points toward a circle on the host's tick cadence.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rust_hexagrid::*;
//!
//! // Generate a grid
//! let config = GridConfigBuilder::new()
//!     .seed(42)
//!     .side_size(8).unwrap()
//!     .build().unwrap();
//!
//! let mut grid = HexGrid::generate(config).unwrap();
//! println!("Generated {} quads", grid.quads().len());
//!
//! // Tick the damped iteration stages
//! for _ in 0..60 {
//!     grid.relax();
//!     grid.reshape();
//! }
//!
//! // Snapshot for drawing
//! let wireframe = generate_wireframe(&grid);
//! println!("{} line segments", wireframe.line_count());
//! ```
//!
//! # Features
//!
//! - `spatial-index` (default): Enables O(log n) position-to-point lookups using KD-tree
//! - `serde`: Enables serialization support for configuration

// Modules
pub mod config;
pub mod error;
pub mod face;
pub mod generation;
pub mod grid;
pub mod mesh;
pub mod point;

#[cfg(feature = "spatial-index")]
pub mod spatial;

// Re-export core types for convenience
pub use config::{GridConfig, GridConfigBuilder};
pub use error::{HexgridError, Result};
pub use face::{Quad, Triangle};
pub use generation::{
    build_lattice, merge_triangle_pairs, relax_once, reshape_once, subdivide_faces, NeighborLists,
    RawMesh,
};
pub use grid::HexGrid;
pub use mesh::{generate_neighbor_wireframe, generate_wireframe, WireframeData};
pub use point::Point;

#[cfg(feature = "spatial-index")]
pub use spatial::SpatialIndex;

// Re-export glam::Vec2 for convenience
pub use glam::Vec2;
