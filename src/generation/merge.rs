//! Triangle-Pair Merging
//!
//! Opportunistically merges adjacent triangle pairs into quads by removing
//! their shared edge. Candidate triangles are drawn from a seeded ChaCha8
//! generator, so the same seed always produces the identical quad list.
//!
//! Consumed triangles are tombstoned, not removed: later stages skip them
//! but every stored triangle index stays valid.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::face::{Quad, Triangle};

/// Merge adjacent triangle pairs into quads
///
/// Repeatedly draws a random triangle index; after `search_iterations`
/// consecutive draws without hitting a valid triangle the stage
/// terminates. A drawn valid triangle is merged with the first valid
/// triangle sharing an edge with it, if any: the two triangles'
/// six vertex indices reduce to four unique indices `[i0,i1,i2,i3]`
/// (sorted ascending), which form the quad `(i0, i2, i3, i1)`, the
/// permutation that rebuilds a properly wound quadrilateral from the two
/// sorted half-edges. Both source triangles are then tombstoned.
///
/// # Arguments
///
/// * `triangles` - Triangle list from lattice building; validity flags
///   are mutated in place
/// * `seed` - Seed for the random triangle search
/// * `search_iterations` - Consecutive-failure budget for the search
///
/// # Returns
///
/// The quad list produced by merging. Its length is the grid's base quad
/// count: subdivision appends behind it.
pub fn merge_triangle_pairs(
    triangles: &mut [Triangle],
    seed: u32,
    search_iterations: usize,
) -> Vec<Quad> {
    let mut quads = Vec::new();
    if triangles.is_empty() {
        return quads;
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
    loop {
        let mut tri_index;
        let mut search_count = 0;
        loop {
            tri_index = rng.gen_range(0..triangles.len());
            search_count += 1;
            if search_count >= search_iterations || triangles[tri_index].valid {
                break;
            }
        }

        if search_count == search_iterations {
            break;
        }

        let adjacents = adjacent_triangles(triangles, tri_index);
        if let Some(&other_index) = adjacents.first() {
            let [a1, b1, c1] = triangles[tri_index].vertices();
            let [a2, b2, c2] = triangles[other_index].vertices();
            let mut indices = [a1, b1, c1, a2, b2, c2];
            indices.sort_unstable();

            let mut unique = indices.to_vec();
            unique.dedup();
            debug_assert_eq!(unique.len(), 4, "merged pair must share exactly one edge");

            quads.push(Quad::new(unique[0], unique[2], unique[3], unique[1]));
            triangles[tri_index].invalidate();
            triangles[other_index].invalidate();
        }
    }

    quads
}

/// Find all valid triangles sharing exactly one edge with the given one
///
/// Two triangles are adjacent when they share exactly two vertices. A
/// share count of three would mean a duplicate triangle, and more than
/// three adjacent triangles would mean a broken mesh; both are invariant
/// violations.
///
/// # Arguments
///
/// * `triangles` - The full triangle list
/// * `tri_index` - Index of the triangle to scan around
///
/// # Returns
///
/// Indices of adjacent valid triangles, in scan order
pub fn adjacent_triangles(triangles: &[Triangle], tri_index: usize) -> Vec<usize> {
    let mut adjacents = Vec::new();
    let lhs = triangles[tri_index].vertices();

    for (other_index, other) in triangles.iter().enumerate() {
        if other_index == tri_index || !other.valid {
            continue;
        }
        let rhs = other.vertices();

        let mut share_count = 0;
        for &l in &lhs {
            if rhs.contains(&l) {
                share_count += 1;
            }
        }
        debug_assert!(share_count < 3, "duplicate triangle in mesh");
        if share_count == 2 {
            debug_assert!(adjacents.len() < 3, "triangle has more than 3 neighbors");
            adjacents.push(other_index);
        }
    }

    adjacents
}
