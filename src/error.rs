//! Error types for hexagrid mesh generation

use std::fmt;

/// Errors that can occur during grid configuration or generation
#[derive(Debug, Clone)]
pub enum HexgridError {
    /// Configuration validation failed
    InvalidConfig(String),
}

impl fmt::Display for HexgridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexgridError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for HexgridError {}

/// Result type alias for hexagrid operations
pub type Result<T> = std::result::Result<T, HexgridError>;
