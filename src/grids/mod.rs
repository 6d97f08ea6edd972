pub mod block_grid;
pub mod frontier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Coordinate one step in `direction`, or `None` if it would go below zero.
    /// Upper bounds are the grid's business.
    pub fn step(self, direction: Direction) -> Option<Coord> {
        let (dx, dy) = direction.offset();
        Some(Coord {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    East,
    North,
    West,
    South,
}

impl Direction {
    /// Neighbor order used everywhere a cell's neighborhood is walked.
    /// Only matters for reproducing a seeded run.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::East => (1, 0),
            Direction::North => (0, 1),
            Direction::West => (-1, 0),
            Direction::South => (0, -1),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CellKind {
    Passage = 0,
    Wall = 1,
}

pub type Neighbor = (CellKind, Coord);

/// The in-bounds axis neighbors of one cell, yielded in [`Direction::ALL`] order.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood {
    pub east: Option<Neighbor>,
    pub north: Option<Neighbor>,
    pub west: Option<Neighbor>,
    pub south: Option<Neighbor>,

    counter: usize,
}

impl Neighborhood {
    pub fn new() -> Self {
        Self {
            east: None,
            north: None,
            west: None,
            south: None,
            counter: 0,
        }
    }

    pub fn get(&self, direction: Direction) -> Option<Neighbor> {
        match direction {
            Direction::East => self.east,
            Direction::North => self.north,
            Direction::West => self.west,
            Direction::South => self.south,
        }
    }

    fn slot(&mut self, direction: Direction) -> &mut Option<Neighbor> {
        match direction {
            Direction::East => &mut self.east,
            Direction::North => &mut self.north,
            Direction::West => &mut self.west,
            Direction::South => &mut self.south,
        }
    }
}

impl Default for Neighborhood {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Neighborhood {
    type Item = (Neighbor, Direction);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&direction) = Direction::ALL.get(self.counter) {
            self.counter += 1;
            if let Some(neighbor) = self.get(direction) {
                return Some((neighbor, direction));
            }
        }

        None
    }
}

#[cfg(test)]
mod test_grids {
    use super::*;

    #[test]
    fn step_stops_at_zero() {
        let origin = Coord::new(0, 0);
        assert_eq!(origin.step(Direction::East), Some(Coord::new(1, 0)));
        assert_eq!(origin.step(Direction::North), Some(Coord::new(0, 1)));
        assert_eq!(origin.step(Direction::West), None);
        assert_eq!(origin.step(Direction::South), None);
    }

    #[test]
    fn directions_walk_in_fixed_order() {
        let offsets: Vec<_> = Direction::ALL.iter().map(|dir| dir.offset()).collect();
        assert_eq!(offsets, vec![(1, 0), (0, 1), (-1, 0), (0, -1)]);
    }

    #[test]
    fn neighborhood_yields_in_fixed_order() {
        let mut neighborhood = Neighborhood::new();
        *neighborhood.slot(Direction::South) = Some((CellKind::Wall, Coord::new(1, 0)));
        *neighborhood.slot(Direction::East) = Some((CellKind::Passage, Coord::new(2, 1)));

        let order: Vec<Direction> = neighborhood.map(|(_, dir)| dir).collect();
        assert_eq!(order, vec![Direction::East, Direction::South]);
    }
}
