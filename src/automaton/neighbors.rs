//! Live-neighbor counting over the 3D Moore neighborhood.

use super::grid::Grid;

/// Count alive neighbors using Moore neighborhood (26 neighbors).
///
/// Neighbors outside the grid contribute nothing; edges do not wrap.
pub fn count_neighbors(grid: &Grid, x: i32, y: i32, z: i32) -> u8 {
    let mut count = 0;

    for dy in -1..=1 {
        for dz in -1..=1 {
            for dx in -1..=1 {
                // Skip the center cell
                if dx == 0 && dy == 0 && dz == 0 {
                    continue;
                }

                // Offsets past the i32 range are outside every grid
                let (Some(nx), Some(ny), Some(nz)) =
                    (x.checked_add(dx), y.checked_add(dy), z.checked_add(dz))
                else {
                    continue;
                };

                if let Some(cell) = grid.get(nx, ny, nz) {
                    count += cell as u8;
                }
            }
        }
    }

    count
}
