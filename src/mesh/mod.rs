//! Wireframe snapshots for HexGrid
//!
//! Generates engine-agnostic line and marker data from a grid, for hosts
//! that draw points as markers and edges as line segments. Snapshots are
//! read-only views: they never mutate the grid.

use std::collections::HashSet;

use crate::grid::HexGrid;

/// Engine-agnostic wireframe data
///
/// Contains raw 2D vertex data suitable for any rendering layer:
/// - positions as a flat vertex buffer
/// - lines as index pairs into it
/// - markers as the indices of points to draw as dots
#[derive(Debug, Clone, Default)]
pub struct WireframeData {
    /// Vertex positions (2D coordinates)
    pub positions: Vec<[f32; 2]>,
    /// Line segments as index pairs
    pub lines: Vec<[u32; 2]>,
    /// Indices of points to draw as markers
    pub markers: Vec<u32>,
}

impl WireframeData {
    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of line segments
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the wireframe is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Generate a wireframe of the grid's faces
///
/// Emits one marker per point and one line segment per distinct
/// undirected edge of every valid triangle and every quad. Edges shared
/// between faces are emitted once.
pub fn generate_wireframe(grid: &HexGrid) -> WireframeData {
    let mut wireframe = positions_and_markers(grid);
    let mut seen = HashSet::new();

    for tri in grid.triangles() {
        if tri.valid {
            let [a, b, c] = tri.vertices();
            push_line(&mut wireframe, &mut seen, a, b);
            push_line(&mut wireframe, &mut seen, b, c);
            push_line(&mut wireframe, &mut seen, c, a);
        }
    }

    for quad in grid.quads() {
        let [a, b, c, d] = quad.vertices();
        push_line(&mut wireframe, &mut seen, a, b);
        push_line(&mut wireframe, &mut seen, b, c);
        push_line(&mut wireframe, &mut seen, c, d);
        push_line(&mut wireframe, &mut seen, d, a);
    }

    wireframe
}

/// Generate a wireframe of the relaxation neighbor graph
///
/// Draws one line per neighbor relation recorded by the grid's most
/// recent relax call. Empty (markers only) if the grid has not been
/// relaxed yet.
pub fn generate_neighbor_wireframe(grid: &HexGrid) -> WireframeData {
    let mut wireframe = positions_and_markers(grid);
    let mut seen = HashSet::new();

    for (index, neighbors) in grid.neighbor_lists().iter().enumerate() {
        for &neighbor in neighbors {
            push_line(&mut wireframe, &mut seen, index, neighbor);
        }
    }

    wireframe
}

fn positions_and_markers(grid: &HexGrid) -> WireframeData {
    let mut wireframe = WireframeData::default();
    for (index, point) in grid.points().iter().enumerate() {
        wireframe.positions.push([point.position.x, point.position.y]);
        wireframe.markers.push(index as u32);
    }
    wireframe
}

/// Append a line unless its undirected edge was already emitted
fn push_line(wireframe: &mut WireframeData, seen: &mut HashSet<(usize, usize)>, a: usize, b: usize) {
    let key = (a.min(b), a.max(b));
    if seen.insert(key) {
        wireframe.lines.push([a as u32, b as u32]);
    }
}
