//! Carves maze/dungeon layouts on a square grid, one step at a time.
//!
//! A run starts from a fully walled grid with the corner `(0, 0)` open and
//! grows passages outward from a frontier of walls. Two carving rules are
//! available through [`GeneratorKind`]:
//!
//! - [`GeneratorKind::Classic`], randomized Prim's growth, always yields a tree;
//! - [`GeneratorKind::Modified`], relaxed two-cell growth that may form loops.
//!
//! [`generate`] hands the run out as a lazy sequence of [`Snapshot`]s so a
//! renderer can draw every intermediate state.
//!
//! ```
//! use dungen::{generate, GeneratorKind};
//!
//! let snapshots = generate(8, Some(3), GeneratorKind::Classic).unwrap();
//! let last = snapshots.last().unwrap().unwrap();
//! assert!(!last.is_wall(0, 0).unwrap());
//! ```

use log::warn;

mod error;
pub mod generators;
pub mod grids;
pub mod snapshot;

pub use error::MazeError;
pub use generators::{GeneratorKind, MazeGenerator, StepOutcome};
pub use grids::block_grid::BlockGrid;
pub use grids::{CellKind, Coord};
pub use snapshot::{Snapshot, Snapshots};

/// Starts a new run on a `size` x `size` grid.
///
/// The same `seed` and `kind` always produce the same sequence. Without a seed
/// the rng is seeded from entropy.
///
/// # Errors
///
/// A zero `size` returns [`MazeError::InvalidSize`] before anything is carved.
/// No [`Snapshots`] exist in that case, so the run is an empty sequence: there
/// is nothing to iterate and no snapshot is ever produced.
///
/// ```
/// use dungen::{generate, GeneratorKind, MazeError};
///
/// let rejected = generate(0, None, GeneratorKind::Modified);
/// assert_eq!(rejected.err(), Some(MazeError::InvalidSize { size: 0 }));
/// ```
pub fn generate(
    size: usize,
    seed: Option<u64>,
    kind: GeneratorKind,
) -> Result<Snapshots, MazeError> {
    match MazeGenerator::new(size, seed, kind) {
        Ok(generator) => Ok(Snapshots::new(generator)),
        Err(err) => {
            warn!("not generating {} maze: {}", kind, err);
            Err(err)
        }
    }
}
