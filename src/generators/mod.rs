pub mod modified;
pub mod prim;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use log::{info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::MazeError;
use crate::grids::block_grid::BlockGrid;
use crate::grids::frontier::Frontier;
use crate::grids::Coord;
use modified::ModifiedPrims;
use prim::ClassicPrims;

/// Every run grows from the same corner.
pub const START: Coord = Coord::new(0, 0);

/// State shared by every carving rule: the grid, the frontier walls, the carved region and the rng.
#[derive(Debug)]
pub struct Carving {
    pub grid: BlockGrid,
    pub walls: Frontier,
    pub maze: HashSet<Coord>,
    pub rng: StdRng,
}

impl Carving {
    pub fn new(size: usize, rng: StdRng) -> Result<Self, MazeError> {
        let mut grid = BlockGrid::with_size(size)?;
        grid.set_passage(START.x, START.y)?;
        let walls = Frontier::around(&grid, START)?;
        let mut maze = HashSet::new();
        maze.insert(START);

        Ok(Self {
            grid,
            walls,
            maze,
            rng,
        })
    }

    /// Adds `coords` to the region and opens its cell. Returns false if it was already carved.
    pub fn claim(&mut self, coords: Coord) -> Result<bool, MazeError> {
        if self.maze.contains(&coords) {
            return Ok(false);
        }
        self.grid.set_passage(coords.x, coords.y)?;
        self.maze.insert(coords);

        Ok(true)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Number of cells newly added to the region.
    Carved(usize),
    Rejected,
}

/// One carving rule. The driver picks `wall` off the frontier and removes it afterwards.
pub trait Generator {
    fn carve(&self, wall: Coord, carving: &mut Carving) -> Result<StepOutcome, MazeError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    Classic,
    Modified,
}

impl GeneratorKind {
    pub fn generator(self) -> Box<dyn Generator> {
        match self {
            GeneratorKind::Classic => Box::new(ClassicPrims),
            GeneratorKind::Modified => Box::new(ModifiedPrims),
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorKind::Classic => write!(f, "classic"),
            GeneratorKind::Modified => write!(f, "modified"),
        }
    }
}

impl FromStr for GeneratorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(GeneratorKind::Classic),
            "modified" => Ok(GeneratorKind::Modified),
            other => Err(format!("unknown generator `{}`", other)),
        }
    }
}

/// Drives one generation run, a step at a time.
pub struct MazeGenerator {
    carving: Carving,
    generator: Box<dyn Generator>,
    kind: GeneratorKind,
    steps: usize,
    carved_steps: usize,
    done: bool,
}

impl MazeGenerator {
    pub fn new(size: usize, seed: Option<u64>, kind: GeneratorKind) -> Result<Self, MazeError> {
        let rng = match seed {
            Some(state) => StdRng::seed_from_u64(state),
            None => StdRng::from_entropy(),
        };
        let carving = Carving::new(size, rng)?;
        info!(
            "generating {}x{} {} maze (seed {:?})",
            size, size, kind, seed
        );

        Ok(Self {
            done: carving.walls.is_empty(),
            carving,
            generator: kind.generator(),
            kind,
            steps: 0,
            carved_steps: 0,
        })
    }

    /// Runs a single step. Returns `None` once the frontier is exhausted.
    pub fn step_generation(&mut self) -> Result<Option<StepOutcome>, MazeError> {
        let (index, wall) = match self.carving.walls.pick(&mut self.carving.rng) {
            Some(picked) => picked,
            None => {
                self.finish();
                return Ok(None);
            }
        };

        let outcome = match self.generator.carve(wall, &mut self.carving) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.done = true;
                return Err(err);
            }
        };
        self.carving.walls.remove(index);

        self.steps += 1;
        if let StepOutcome::Carved(_) = outcome {
            self.carved_steps += 1;
        }
        trace!(
            "step {}: wall ({}, {}) {:?}, {} walls left",
            self.steps,
            wall.x,
            wall.y,
            outcome,
            self.carving.walls.len()
        );

        if self.carving.walls.is_empty() {
            self.finish();
        }

        Ok(Some(outcome))
    }

    fn finish(&mut self) {
        if !self.done {
            info!(
                "{} generation finished after {} steps, {} carves, {} passages",
                self.kind,
                self.steps,
                self.carved_steps,
                self.carving.grid.passage_count()
            );
        }
        self.done = true;
    }

    /// Advances one step and lends the grid as it stands afterwards.
    pub fn next_step(&mut self) -> Result<Option<&BlockGrid>, MazeError> {
        if self.done {
            return Ok(None);
        }

        match self.step_generation()? {
            Some(_) => Ok(Some(&self.carving.grid)),
            None => Ok(None),
        }
    }

    /// Carves until the frontier is exhausted and returns the finished grid.
    pub fn generate_maze(&mut self) -> Result<&BlockGrid, MazeError> {
        while !self.done {
            self.step_generation()?;
        }

        Ok(&self.carving.grid)
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn grid(&self) -> &BlockGrid {
        &self.carving.grid
    }

    #[cfg(test)]
    pub(crate) fn carving_mut(&mut self) -> &mut Carving {
        &mut self.carving
    }

    pub fn kind(&self) -> GeneratorKind {
        self.kind
    }

    pub fn steps_taken(&self) -> usize {
        self.steps
    }

    pub fn carved_steps(&self) -> usize {
        self.carved_steps
    }
}
