mod depth_first_search;

use rand::{thread_rng, Rng};

use super::Maze;
use crate::core::MazeError;
pub use depth_first_search::DepthFirstSearch;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Draws a seed for a maze when the caller did not ask for one.
pub fn random_seed() -> u64 {
    thread_rng().gen()
}

pub trait MazeAlgorithm {
    /// Carves passages into a freshly created maze, so that every cell is reachable from every
    /// other one through exactly one path.
    ///
    /// The maze must not have any internal passages yet, otherwise [`MazeError::AlreadyCarved`]
    /// is returned and the maze is left untouched.
    fn generate<R: Rng + ?Sized>(&self, maze: &mut Maze, rng: &mut R) -> Result<(), MazeError>;
}
