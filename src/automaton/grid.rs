//! Layered voxel grid and cell access helpers.

use glam::IVec3;

use crate::error::{GridError, Result};

/// State of a single voxel.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl CellState {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

impl From<bool> for CellState {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

/// A voxel grid stored as a stack of horizontal layers.
///
/// Each layer is a flat `size_x * size_z` array in z,x order (z changes slowest).
/// The horizontal size is fixed at construction; the vertical size grows one
/// layer at a time through [`Grid::add_layer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size_x: i32,
    size_z: i32,
    layers: Vec<Vec<CellState>>,
}

impl Grid {
    /// Create a grid with a single dead layer.
    pub fn new(size_x: i32, size_z: i32) -> Result<Self> {
        if size_x <= 0 || size_z <= 0 {
            return Err(GridError::InvalidDimension { size_x, size_z });
        }

        let mut grid = Grid {
            size_x,
            size_z,
            layers: Vec::new(),
        };
        grid.add_layer();
        Ok(grid)
    }

    #[inline]
    pub fn size_x(&self) -> i32 {
        self.size_x
    }

    /// Number of layers currently allocated.
    #[inline]
    pub fn size_y(&self) -> i32 {
        self.layers.len() as i32
    }

    #[inline]
    pub fn size_z(&self) -> i32 {
        self.size_z
    }

    /// All three dimensions as a vector.
    pub fn size(&self) -> IVec3 {
        IVec3::new(self.size_x, self.size_y(), self.size_z)
    }

    /// Index of the topmost layer.
    #[inline]
    pub fn top_layer(&self) -> i32 {
        self.size_y() - 1
    }

    /// Check if coordinates are within grid bounds.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0 && x < self.size_x && y >= 0 && y < self.size_y() && z >= 0 && z < self.size_z
    }

    /// Linear index of `(x, z)` inside a layer. Caller checks bounds.
    #[inline]
    fn index_of(&self, x: i32, z: i32) -> usize {
        z as usize * self.size_x as usize + x as usize
    }

    /// Read a cell. Returns `None` for coordinates outside the grid.
    #[inline]
    pub fn get(&self, x: i32, y: i32, z: i32) -> Option<CellState> {
        if !self.in_bounds(x, y, z) {
            return None;
        }
        Some(self.layers[y as usize][self.index_of(x, z)])
    }

    /// Overwrite a cell.
    pub fn set(&mut self, x: i32, y: i32, z: i32, alive: bool) -> Result<()> {
        if !self.in_bounds(x, y, z) {
            return Err(GridError::OutOfBounds { x, y, z });
        }
        let idx = self.index_of(x, z);
        self.layers[y as usize][idx] = CellState::from(alive);
        Ok(())
    }

    /// Overwrite a cell known to be inside the grid.
    ///
    /// Panics on out-of-bounds coordinates.
    #[inline]
    pub(crate) fn write(&mut self, coord: IVec3, state: CellState) {
        let idx = self.index_of(coord.x, coord.z);
        self.layers[coord.y as usize][idx] = state;
    }

    /// Append one dead layer on top of the grid.
    ///
    /// Any cached "top layer" index held by a caller is stale afterwards.
    #[cfg_attr(feature = "trace", tracing::instrument(skip(self), fields(size_y = self.size_y())))]
    pub fn add_layer(&mut self) {
        let area = self.size_x as usize * self.size_z as usize;
        self.layers.push(vec![CellState::Dead; area]);
    }

    /// Number of alive cells in the whole grid.
    pub fn alive_count(&self) -> usize {
        self.layers
            .iter()
            .flatten()
            .filter(|cell| cell.is_alive())
            .count()
    }

    /// Iterate the coordinates of every alive cell, bottom layer first.
    pub fn alive_cells(&self) -> impl Iterator<Item = IVec3> + '_ {
        let size_x = self.size_x;
        self.layers.iter().enumerate().flat_map(move |(y, layer)| {
            layer
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_alive())
                .map(move |(idx, _)| {
                    let idx = idx as i32;
                    IVec3::new(idx % size_x, y as i32, idx / size_x)
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_grid() {
        let grid = Grid::new(8, 6).unwrap();
        assert_eq!(grid.size_x(), 8);
        assert_eq!(grid.size_y(), 1);
        assert_eq!(grid.size_z(), 6);
        assert_eq!(grid.size(), IVec3::new(8, 1, 6));
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn test_create_grid_invalid_dimension() {
        assert_eq!(
            Grid::new(0, 4),
            Err(GridError::InvalidDimension {
                size_x: 0,
                size_z: 4
            })
        );
        assert_eq!(
            Grid::new(4, -2),
            Err(GridError::InvalidDimension {
                size_x: 4,
                size_z: -2
            })
        );
    }

    #[test]
    fn test_in_bounds() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.add_layer();
        grid.add_layer();
        grid.add_layer();

        // Valid bounds
        assert!(grid.in_bounds(0, 0, 0));
        assert!(grid.in_bounds(3, 3, 3));
        assert!(grid.in_bounds(2, 2, 2));

        // Out of bounds
        assert!(!grid.in_bounds(-1, 0, 0));
        assert!(!grid.in_bounds(4, 0, 0));
        assert!(!grid.in_bounds(0, -1, 0));
        assert!(!grid.in_bounds(0, 4, 0));
        assert!(!grid.in_bounds(0, 0, -1));
        assert!(!grid.in_bounds(0, 0, 4));
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(4, 4).unwrap();

        grid.set(1, 0, 2, true).unwrap();
        assert_eq!(grid.get(1, 0, 2), Some(CellState::Alive));
        assert_eq!(grid.get(2, 0, 1), Some(CellState::Dead));

        grid.set(1, 0, 2, false).unwrap();
        assert_eq!(grid.get(1, 0, 2), Some(CellState::Dead));
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = Grid::new(3, 5).unwrap();

        let outside = [
            (-1, 0, 0),
            (3, 0, 0),
            (0, -1, 0),
            (0, 1, 0),
            (0, 0, -1),
            (0, 0, 5),
        ];
        for (x, y, z) in outside {
            assert_eq!(grid.get(x, y, z), None, "({x}, {y}, {z}) should be absent");
            assert_eq!(
                grid.set(x, y, z, true),
                Err(GridError::OutOfBounds { x, y, z })
            );
        }

        // Failed writes leave the grid untouched
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn test_add_layer_appends_dead_cells() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(2, 0, 2, true).unwrap();

        for expected in 2..=4 {
            grid.add_layer();
            assert_eq!(grid.size_y(), expected);
            assert_eq!(grid.top_layer(), expected - 1);

            let y = grid.top_layer();
            for z in 0..4 {
                for x in 0..4 {
                    assert_eq!(grid.get(x, y, z), Some(CellState::Dead));
                }
            }
        }

        // Existing layers are preserved
        assert_eq!(grid.get(2, 0, 2), Some(CellState::Alive));
        assert_eq!(grid.alive_count(), 1);
    }

    #[test]
    fn test_write() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.add_layer();

        grid.write(IVec3::new(2, 1, 0), CellState::Alive);
        assert_eq!(grid.get(2, 1, 0), Some(CellState::Alive));
        grid.write(IVec3::new(2, 1, 0), CellState::Dead);
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn test_alive_cells() {
        let mut grid = Grid::new(5, 3).unwrap();
        grid.add_layer();
        grid.set(4, 0, 0, true).unwrap();
        grid.set(1, 1, 2, true).unwrap();
        grid.set(0, 0, 2, true).unwrap();

        let cells: Vec<IVec3> = grid.alive_cells().collect();
        assert_eq!(
            cells,
            vec![
                IVec3::new(4, 0, 0),
                IVec3::new(0, 0, 2),
                IVec3::new(1, 1, 2)
            ]
        );
    }
}
