//! Demonstration of the full generation pipeline

use rust_hexagrid::*;

fn main() -> Result<()> {
    println!("Generating hexagrid...");

    let config = GridConfigBuilder::new()
        .seed(15911)
        .side_size(8)?
        .search_iterations(12)?
        .build()?;

    let mut grid = HexGrid::generate(config)?;
    println!("Generated {} points", grid.point_count());

    println!("\nMesh statistics:");
    println!("  Points: {}", grid.point_count());
    println!("  Triangles (valid): {}", grid.valid_triangle_count());
    println!("  Triangles (total): {}", grid.triangles().len());
    println!("  Base quads: {}", grid.base_quad_count());
    println!("  Quads (total): {}", grid.quads().len());

    // Tick the damped iteration stages the way a host loop would
    for tick in 0..120 {
        grid.relax();
        grid.reshape();
        if tick % 30 == 0 {
            let interior = grid.points().iter().filter(|p| p.is_interior()).count();
            println!("tick {}: {} interior points relaxed", tick, interior);
        }
    }

    // Test all supported side sizes
    println!("\n=== Testing all side sizes ===");
    for side_size in 2..=12 {
        let config = GridConfigBuilder::new()
            .seed(42)
            .side_size(side_size)?
            .build()?;

        let grid = HexGrid::generate(config)?;
        println!(
            "side {}: {} points, {} base quads, {} quads total",
            side_size,
            grid.point_count(),
            grid.base_quad_count(),
            grid.quads().len()
        );
    }

    Ok(())
}
