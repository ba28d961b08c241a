//! Demonstration of wireframe snapshot generation

use rust_hexagrid::*;

fn main() -> Result<()> {
    let config = GridConfigBuilder::new()
        .seed(42)
        .side_size(6)?
        .build()?;

    let mut grid = HexGrid::generate(config)?;

    let faces = generate_wireframe(&grid);
    println!("Face wireframe:");
    println!("  Vertices: {}", faces.vertex_count());
    println!("  Lines: {}", faces.line_count());
    println!("  Markers: {}", faces.markers.len());

    // Memory estimate
    let mem = faces.positions.len() * 8 + faces.lines.len() * 8 + faces.markers.len() * 4;
    println!("  Total: {} bytes ({:.2} KB)", mem, mem as f32 / 1024.0);

    // The neighbor graph only exists after a relax tick
    grid.relax();
    let neighbors = generate_neighbor_wireframe(&grid);
    println!("\nNeighbor wireframe:");
    println!("  Vertices: {}", neighbors.vertex_count());
    println!("  Lines: {}", neighbors.line_count());

    Ok(())
}
