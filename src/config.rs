//! Hexagrid Configuration and Builder
//!
//! This module provides configuration types for deterministic hexagrid mesh generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{HexgridError, Result};

/// Configuration for deterministic hexagrid mesh generation
///
/// The same configuration will always produce the identical mesh: the
/// lattice is fully determined by `side_size`, and the triangle-pair
/// merge stage draws from a seeded generator.
///
/// # Serialization
///
/// Only the configuration is serialized (a few bytes), not the generated
/// mesh. The mesh is regenerated from the configuration when needed.
///
/// # Example
///
/// ```rust
/// use rust_hexagrid::*;
///
/// let config = GridConfigBuilder::new()
///     .seed(42)
///     .side_size(6)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// // Config is serializable (with "serde" feature)
/// # #[cfg(feature = "serde")]
/// # {
/// let json = serde_json::to_string(&config).unwrap();
/// let restored: GridConfig = serde_json::from_str(&json).unwrap();
/// assert_eq!(config.seed, restored.seed);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Hexagon side length in lattice steps
    ///
    /// The lattice spans `2 * side_size - 1` columns whose heights grow
    /// from `side_size` to `2 * side_size - 1` and shrink back again.
    /// Bounded at 12: subdivision packs two point indices into one u32
    /// key, so the vertex count must stay below 65536.
    pub side_size: usize,

    /// Random seed for the triangle-pair merge stage
    ///
    /// The same seed (with the same side_size and search_iterations)
    /// always produces the exact same quad list and triangle validity.
    pub seed: u32,

    /// Retry budget for the merge stage's random triangle search
    ///
    /// The merge loop draws random triangle indices until it hits a valid
    /// one; after this many consecutive draws without success the stage
    /// terminates. Higher values merge more pairs before giving up.
    pub search_iterations: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfigBuilder::new().build().unwrap()
    }
}

/// Builder for creating GridConfig with validation
///
/// Uses the builder pattern to create configurations with sensible
/// defaults, validating each parameter at the boundary so the pipeline
/// itself never has to.
///
/// # Example
///
/// ```rust
/// use rust_hexagrid::*;
///
/// // Use defaults
/// let config = GridConfigBuilder::new().build().unwrap();
///
/// // Customize
/// let config = GridConfigBuilder::new()
///     .seed(12345)
///     .side_size(4)
///     .unwrap()
///     .search_iterations(16)
///     .unwrap()
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct GridConfigBuilder {
    side_size: usize,
    seed: Option<u32>,
    search_iterations: usize,
}

impl GridConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - side_size: 8
    /// - seed: Random (generated from thread_rng)
    /// - search_iterations: 12
    pub fn new() -> Self {
        Self {
            side_size: 8,
            seed: None,
            search_iterations: 12,
        }
    }

    /// Set the hexagon side length in lattice steps
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the side size is below 2 (the smallest
    /// lattice with an interior point) or above 12 (vertex counts beyond
    /// that approach the subdivision key-packing limit).
    pub fn side_size(mut self, side_size: usize) -> Result<Self> {
        if !(2..=12).contains(&side_size) {
            return Err(HexgridError::InvalidConfig(format!(
                "side size must be in 2..=12 (got {})",
                side_size
            )));
        }
        self.side_size = side_size;
        Ok(self)
    }

    /// Set the random seed for the merge stage
    ///
    /// Using the same seed with the same other parameters will produce
    /// an identical mesh every time.
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the merge stage's random search retry budget
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the budget is 0 (the stage could never
    /// examine a triangle) or above 20 (excessive and impractical)
    pub fn search_iterations(mut self, iterations: usize) -> Result<Self> {
        if !(1..=20).contains(&iterations) {
            return Err(HexgridError::InvalidConfig(format!(
                "search iterations must be in 1..=20 (got {})",
                iterations
            )));
        }
        self.search_iterations = iterations;
        Ok(self)
    }

    /// Build the configuration
    ///
    /// If no seed was provided, generates a random seed using thread_rng.
    pub fn build(self) -> Result<GridConfig> {
        let seed = self.seed.unwrap_or_else(rand::random);

        Ok(GridConfig {
            side_size: self.side_size,
            seed,
            search_iterations: self.search_iterations,
        })
    }
}

impl Default for GridConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
