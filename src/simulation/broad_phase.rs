//! # Uniform grid broad phase
//!
//! Optional narrowing of the pairwise collision scan. Bodies are bucketed by
//! the planar cell their centre falls in; a body only needs to be tested
//! against bodies in its own cell and the eight around it.
//!
//! The grid is a snapshot of positions at build time. It finds every contact
//! the full scan finds as long as `cell_size` is at least the largest body
//! diameter plus the largest distance a body moves in one tick. Nothing in
//! the core depends on it.

use std::collections::HashMap;

use crate::simulation::states::Body;
use crate::simulation::vector::Position;

pub type Cell = (i64, i64);

#[derive(Debug, Clone)]
pub struct SpatialGrid {
    cell_size: f64,
    cells: HashMap<Cell, Vec<usize>>,
}

impl SpatialGrid {
    /// `cell_size` must be > 0
    pub fn new(cell_size: f64) -> Self {
        Self {
            cell_size,
            cells: HashMap::new(),
        }
    }

    /// Grid over the current positions of `bodies`, keyed by list index
    pub fn build(bodies: &[Body], cell_size: f64) -> Self {
        let mut grid = Self::new(cell_size);
        for (i, body) in bodies.iter().enumerate() {
            grid.insert(i, &body.position);
        }
        grid
    }

    pub fn insert(&mut self, index: usize, position: &Position) {
        let cell = self.cell_of(position);
        self.cells.entry(cell).or_default().push(index);
    }

    /// Indices in the 3x3 block of cells around `position`, sorted, no repeats
    pub fn nearby(&self, position: &Position) -> Vec<usize> {
        let (cx, cy) = self.cell_of(position);
        let mut out = Vec::new();
        for dx in -1..=1 {
            for dy in -1..=1 {
                if let Some(indices) = self.cells.get(&(cx + dx, cy + dy)) {
                    out.extend_from_slice(indices);
                }
            }
        }
        out.sort_unstable();
        out.dedup();
        out
    }

    fn cell_of(&self, position: &Position) -> Cell {
        (
            (position.x() / self.cell_size).floor() as i64,
            (position.y() / self.cell_size).floor() as i64,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_coordinates_get_their_own_cells() {
        let grid = SpatialGrid::new(10.0);
        assert_eq!(grid.cell_of(&Position::new(-0.5, 0.5, 0.0)), (-1, 0));
        assert_eq!(grid.cell_of(&Position::new(9.99, 10.0, 0.0)), (0, 1));
    }

    #[test]
    fn nearby_is_sorted_and_deduplicated() {
        let mut grid = SpatialGrid::new(10.0);
        grid.insert(3, &Position::new(1.0, 1.0, 0.0));
        grid.insert(1, &Position::new(12.0, 1.0, 0.0));
        grid.insert(3, &Position::new(-5.0, 1.0, 0.0));
        grid.insert(7, &Position::new(45.0, 1.0, 0.0));

        assert_eq!(grid.nearby(&Position::new(2.0, 2.0, 0.0)), vec![1, 3]);
    }
}
