use rand::Rng;

use crate::error::MazeError;
use crate::generators::{Carving, Generator, StepOutcome};
use crate::grids::{Coord, Direction};

/// Relaxed two-step growth. The picked wall is opened together with one random
/// neighbor whenever that neighbor is not carved yet, with no check on how many
/// carved cells already touch the wall. Separate branches can meet, so loops form.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifiedPrims;

impl Generator for ModifiedPrims {
    fn carve(&self, wall: Coord, carving: &mut Carving) -> Result<StepOutcome, MazeError> {
        if !carving.grid.is_in_bounds(wall.x, wall.y) {
            return Err(MazeError::OutOfBounds {
                x: wall.x,
                y: wall.y,
                size: carving.grid.size(),
            });
        }

        let direction = Direction::ALL[carving.rng.gen_range(0..Direction::ALL.len())];
        let neighbor = match carving.grid.neighbor_of(wall, direction) {
            Some(neighbor) if !carving.maze.contains(&neighbor) => neighbor,
            _ => return Ok(StepOutcome::Rejected),
        };

        // queued before anything opens, so a freshly claimed `wall` goes back on the frontier
        carving.walls.push_walls_of(&carving.grid, neighbor)?;

        let mut carved = 0;
        for coords in [wall, neighbor] {
            if carving.claim(coords)? {
                carved += 1;
            }
        }

        Ok(StepOutcome::Carved(carved))
    }
}
