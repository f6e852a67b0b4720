//! Perfect maze generation by randomized depth first backtracking and shortest path solving by
//! breadth first search, over a rectangular grid of walled cells.

pub mod array;
pub mod core;
pub mod gameboard;
pub mod logging;
pub mod session;
pub mod settings;
pub mod solver;

pub use crate::core::{Dims, MazeError};
pub use gameboard::{
    algorithms::{DepthFirstSearch, MazeAlgorithm, Random},
    Cell, CellWall, Maze,
};
pub use session::MazeSession;
pub use settings::MazeSettings;
pub use solver::{solve, solve_between, Path};
