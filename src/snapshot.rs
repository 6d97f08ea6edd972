use std::fmt;
use std::iter::FusedIterator;

use crate::error::MazeError;
use crate::generators::{GeneratorKind, MazeGenerator};
use crate::grids::block_grid::BlockGrid;
use crate::grids::{CellKind, Coord};

/// Read-only copy of the grid at one point of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    grid: BlockGrid,
}

impl Snapshot {
    fn of(grid: &BlockGrid) -> Self {
        Self { grid: grid.clone() }
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn is_wall(&self, x: usize, y: usize) -> Result<bool, MazeError> {
        self.grid.is_wall(x, y)
    }

    pub fn passage_count(&self) -> usize {
        self.grid.passage_count()
    }

    pub fn passages(&self) -> impl Iterator<Item = Coord> + '_ {
        self.grid.passages()
    }
}

impl fmt::Display for Snapshot {
    /// `#` for walls, `.` for passages, with `y = 0` on the bottom row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.grid.size();
        for row in self.grid.cells.chunks(size).rev() {
            for kind in row {
                let c = match kind {
                    CellKind::Wall => '#',
                    CellKind::Passage => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Lazy, single-pass sequence of snapshots for one run.
///
/// The first element is the seeded grid, every later element is one carving
/// step, whether or not that step opened anything. Nothing is computed until
/// the next element is requested. A new run needs a new call to [`crate::generate`].
pub struct Snapshots {
    generator: MazeGenerator,
    started: bool,
    finished: bool,
}

impl Snapshots {
    pub fn new(generator: MazeGenerator) -> Self {
        Self {
            generator,
            started: false,
            finished: false,
        }
    }

    pub fn kind(&self) -> GeneratorKind {
        self.generator.kind()
    }

    pub fn steps_taken(&self) -> usize {
        self.generator.steps_taken()
    }

    pub fn carved_steps(&self) -> usize {
        self.generator.carved_steps()
    }

    /// The grid as of the last element handed out.
    pub fn grid(&self) -> &BlockGrid {
        self.generator.grid()
    }
}

impl Iterator for Snapshots {
    type Item = Result<Snapshot, MazeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if !self.started {
            self.started = true;
            return Some(Ok(Snapshot::of(self.generator.grid())));
        }

        match self.generator.next_step() {
            Ok(Some(grid)) => Some(Ok(Snapshot::of(grid))),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Snapshots {}
