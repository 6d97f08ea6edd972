use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MazeError {
    /// Grid side length must be at least one.
    #[error("invalid grid size {size}, side length must be greater than zero")]
    InvalidSize { size: usize },

    /// A coordinate outside `[0, size)` was accessed. This is a frontier bookkeeping bug.
    #[error("cell ({x}, {y}) is out of bounds for a {size}x{size} grid")]
    OutOfBounds { x: usize, y: usize, size: usize },
}
