use rand::Rng;

use crate::error::MazeError;
use crate::grids::block_grid::BlockGrid;
use crate::grids::{CellKind, Coord};

/// Wall-state neighbors of `coords` that are inside the grid, in [`Direction::ALL`] order.
///
/// [`Direction::ALL`]: crate::grids::Direction::ALL
pub fn walls_adjacent_to(grid: &BlockGrid, coords: Coord) -> Result<Vec<Coord>, MazeError> {
    Ok(grid
        .get_neighborhood_of(coords)?
        .filter(|((kind, _), _)| *kind == CellKind::Wall)
        .map(|((_, neighbor), _)| neighbor)
        .collect())
}

/// Walls waiting to be considered for carving.
///
/// The same wall may sit here several times, once for every carve next to it.
/// That multiplicity is kept on purpose since it weights the random pick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontier {
    walls: Vec<Coord>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn with_walls(walls: Vec<Coord>) -> Self {
        Self { walls }
    }

    /// Seeds the frontier with the walls around `coords`.
    pub fn around(grid: &BlockGrid, coords: Coord) -> Result<Self, MazeError> {
        let mut frontier = Self::new();
        frontier.push_walls_of(grid, coords)?;

        Ok(frontier)
    }

    pub fn push_walls_of(&mut self, grid: &BlockGrid, coords: Coord) -> Result<(), MazeError> {
        let mut walls_to_add = walls_adjacent_to(grid, coords)?;
        self.walls.append(&mut walls_to_add);

        Ok(())
    }

    /// Uniform choice over entries, duplicates included.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(usize, Coord)> {
        if self.walls.is_empty() {
            return None;
        }

        let index = rng.gen_range(0..self.walls.len());
        Some((index, self.walls[index]))
    }

    /// Removes the single entry at `index`, keeping the order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<Coord> {
        if index < self.walls.len() {
            Some(self.walls.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coord> {
        self.walls.iter()
    }
}
