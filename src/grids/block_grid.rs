use crate::error::MazeError;
use crate::grids::{CellKind, Coord, Direction, Neighborhood};

/// Square grid where every cell is a whole block, either wall or passage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockGrid {
    size: usize,

    /// Row-major, `y * size + x`.
    pub(crate) cells: Vec<CellKind>,
}

impl BlockGrid {
    /// A fully walled `size` x `size` grid.
    pub fn with_size(size: usize) -> Result<Self, MazeError> {
        if size == 0 {
            return Err(MazeError::InvalidSize { size });
        }

        Ok(Self {
            size,
            cells: vec![CellKind::Wall; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, MazeError> {
        if self.is_in_bounds(x, y) {
            Ok(y * self.size + x)
        } else {
            Err(MazeError::OutOfBounds {
                x,
                y,
                size: self.size,
            })
        }
    }

    pub fn get_cell(&self, x: usize, y: usize) -> Result<CellKind, MazeError> {
        let index = self.index_of(x, y)?;

        Ok(self.cells[index])
    }

    pub fn is_wall(&self, x: usize, y: usize) -> Result<bool, MazeError> {
        Ok(self.get_cell(x, y)? == CellKind::Wall)
    }

    /// Returns the previous kind of the cell.
    pub fn set_cell(&mut self, x: usize, y: usize, kind: CellKind) -> Result<CellKind, MazeError> {
        let index = self.index_of(x, y)?;
        let prev_kind = self.cells[index];
        self.cells[index] = kind;

        Ok(prev_kind)
    }

    pub fn set_passage(&mut self, x: usize, y: usize) -> Result<CellKind, MazeError> {
        self.set_cell(x, y, CellKind::Passage)
    }

    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&kind| kind == CellKind::Passage)
            .count()
    }

    /// Coordinates of every passage cell, row by row.
    pub fn passages(&self) -> impl Iterator<Item = Coord> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, kind)| **kind == CellKind::Passage)
            .map(move |(index, _)| Coord::new(index % size, index / size))
    }

    /// The in-bounds coordinate one step from `coords`, if any.
    pub fn neighbor_of(&self, coords: Coord, direction: Direction) -> Option<Coord> {
        coords
            .step(direction)
            .filter(|next| self.is_in_bounds(next.x, next.y))
    }

    pub fn get_neighborhood_of(&self, coords: Coord) -> Result<Neighborhood, MazeError> {
        // the cell itself has to exist before its neighbors mean anything
        self.index_of(coords.x, coords.y)?;

        let mut neighbors = Neighborhood::new();
        for direction in Direction::ALL {
            if let Some(next) = self.neighbor_of(coords, direction) {
                let kind = self.get_cell(next.x, next.y)?;
                *neighbors.slot(direction) = Some((kind, next));
            }
        }

        Ok(neighbors)
    }
}

#[cfg(test)]
mod test_block_grid {
    use super::*;

    #[test]
    fn it_works() {
        let mut grid = BlockGrid::with_size(5).unwrap();
        assert_eq!(grid.passage_count(), 0);

        assert_eq!(grid.set_passage(1, 2).unwrap(), CellKind::Wall);
        assert_eq!(grid.set_passage(1, 2).unwrap(), CellKind::Passage);
        grid.set_passage(4, 4).unwrap();

        assert!(!grid.is_wall(1, 2).unwrap());
        assert!(grid.is_wall(2, 1).unwrap());
        assert_eq!(grid.passage_count(), 2);
        assert_eq!(
            grid.passages().collect::<Vec<_>>(),
            vec![Coord::new(1, 2), Coord::new(4, 4)]
        );
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(
            BlockGrid::with_size(0),
            Err(MazeError::InvalidSize { size: 0 })
        );
    }

    #[test]
    fn out_of_bounds_access_fails() {
        let mut grid = BlockGrid::with_size(3).unwrap();
        assert!(grid.is_in_bounds(2, 2));
        assert!(!grid.is_in_bounds(3, 0));

        let err = MazeError::OutOfBounds { x: 3, y: 0, size: 3 };
        assert_eq!(grid.is_wall(3, 0), Err(err));
        assert_eq!(grid.set_passage(3, 0), Err(err));
        assert_eq!(
            grid.is_wall(0, 7),
            Err(MazeError::OutOfBounds { x: 0, y: 7, size: 3 })
        );
    }

    #[test]
    fn corner_has_two_neighbors() {
        let mut grid = BlockGrid::with_size(3).unwrap();
        grid.set_passage(0, 1).unwrap();

        let neighbors: Vec<_> = grid.get_neighborhood_of(Coord::new(0, 0)).unwrap().collect();
        assert_eq!(
            neighbors,
            vec![
                ((CellKind::Wall, Coord::new(1, 0)), Direction::East),
                ((CellKind::Passage, Coord::new(0, 1)), Direction::North),
            ]
        );

        let center = grid.get_neighborhood_of(Coord::new(1, 1)).unwrap();
        assert_eq!(center.count(), 4);

        assert!(grid.get_neighborhood_of(Coord::new(3, 3)).is_err());
    }
}
