use crate::error::MazeError;
use crate::generators::{Carving, Generator, StepOutcome};
use crate::grids::Coord;

/// Randomized Prim's growth. A wall is only opened when exactly one of its
/// neighbors is already carved, so the passages always form a tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicPrims;

impl Generator for ClassicPrims {
    fn carve(&self, wall: Coord, carving: &mut Carving) -> Result<StepOutcome, MazeError> {
        let neighbors = carving.grid.get_neighborhood_of(wall)?;

        let mut count = 0;
        for ((_, coords), _) in neighbors {
            if carving.maze.contains(&coords) {
                count += 1;
            }
        }

        // 0 would carve an island, 2 or more would close a loop
        if count != 1 || !carving.claim(wall)? {
            return Ok(StepOutcome::Rejected);
        }
        carving.walls.push_walls_of(&carving.grid, wall)?;

        Ok(StepOutcome::Carved(1))
    }
}

#[cfg(test)]
mod test_prim {
    use super::*;
    use crate::grids::CellKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn carving(size: usize) -> Carving {
        Carving::new(size, StdRng::seed_from_u64(0)).unwrap()
    }

    #[test]
    fn opens_wall_with_one_carved_neighbor() {
        let mut carving = carving(3);

        let outcome = ClassicPrims.carve(Coord::new(1, 0), &mut carving).unwrap();
        assert_eq!(outcome, StepOutcome::Carved(1));
        assert_eq!(carving.grid.get_cell(1, 0).unwrap(), CellKind::Passage);
        assert!(carving.maze.contains(&Coord::new(1, 0)));

        // seeded (1, 0), (0, 1) plus the walls around (1, 0)
        let walls: Vec<Coord> = carving.walls.iter().copied().collect();
        assert_eq!(
            walls,
            vec![
                Coord::new(1, 0),
                Coord::new(0, 1),
                Coord::new(2, 0),
                Coord::new(1, 1)
            ]
        );
    }

    #[test]
    fn refuses_to_close_a_loop() {
        let mut carving = carving(3);
        ClassicPrims.carve(Coord::new(1, 0), &mut carving).unwrap();
        ClassicPrims.carve(Coord::new(0, 1), &mut carving).unwrap();
        let walls_before = carving.walls.len();

        // (1, 1) now touches both (1, 0) and (0, 1)
        let outcome = ClassicPrims.carve(Coord::new(1, 1), &mut carving).unwrap();
        assert_eq!(outcome, StepOutcome::Rejected);
        assert!(carving.grid.is_wall(1, 1).unwrap());
        assert_eq!(carving.walls.len(), walls_before);
    }

    #[test]
    fn refuses_isolated_wall() {
        let mut carving = carving(4);
        let outcome = ClassicPrims.carve(Coord::new(3, 3), &mut carving).unwrap();
        assert_eq!(outcome, StepOutcome::Rejected);
        assert_eq!(carving.grid.passage_count(), 1);
    }

    #[test]
    fn already_carved_wall_is_not_carved_twice() {
        let mut carving = carving(3);
        ClassicPrims.carve(Coord::new(1, 0), &mut carving).unwrap();
        let walls_before = carving.walls.len();

        let outcome = ClassicPrims.carve(Coord::new(1, 0), &mut carving).unwrap();
        assert_eq!(outcome, StepOutcome::Rejected);
        assert_eq!(carving.walls.len(), walls_before);
        assert_eq!(carving.grid.passage_count(), 2);
    }

    #[test]
    fn out_of_bounds_wall_is_an_error() {
        let mut carving = carving(3);
        assert_eq!(
            ClassicPrims.carve(Coord::new(3, 1), &mut carving),
            Err(MazeError::OutOfBounds { x: 3, y: 1, size: 3 })
        );
    }
}
