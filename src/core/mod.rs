pub mod dims;

pub use dims::Dims;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    #[error("Invalid maze dimensions; {0}x{1}")]
    InvalidDimensions(i32, i32),
    #[error("Coordinate outside of the grid; {0:?}")]
    InvalidCoordinate(Dims),
    #[error("Cells are not adjacent; {0:?} and {1:?}")]
    NotAdjacent(Dims, Dims),
    #[error("No path exists; from {0:?} to {1:?}")]
    NoPathExists(Dims, Dims),
    #[error("Maze already has passages")]
    AlreadyCarved,
}
