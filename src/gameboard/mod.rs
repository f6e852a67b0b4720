pub mod maze;
pub use maze::{neighbor_pos, Maze};
pub mod cell;
pub use cell::{Cell, CellWall};

pub mod algorithms;
