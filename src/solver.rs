use std::{collections::VecDeque, ops};

use hashbrown::{HashMap, HashSet};

use crate::{
    core::*,
    gameboard::{neighbor_pos, CellWall, Maze},
};

/// Ordered cells from the first to the last position, neighbors joined by open passages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(Vec<Dims>);

impl Path {
    pub fn cells(&self) -> &[Dims] {
        &self.0
    }

    pub fn start(&self) -> Dims {
        self.0[0]
    }

    pub fn end(&self) -> Dims {
        self.0[self.0.len() - 1]
    }

    /// Number of steps between cells, one less than the number of cells.
    pub fn moves(&self) -> usize {
        self.0.len() - 1
    }

    pub fn contains(&self, pos: Dims) -> bool {
        self.0.contains(&pos)
    }

    pub fn into_vec(self) -> Vec<Dims> {
        self.0
    }
}

impl ops::Deref for Path {
    type Target = [Dims];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Shortest path from the maze's start to its end.
pub fn solve(maze: &Maze) -> Result<Path, MazeError> {
    solve_between(maze, maze.start(), maze.end())
}

/// Breadth first search over open passages. Never touches the maze.
pub fn solve_between(maze: &Maze, from: Dims, to: Dims) -> Result<Path, MazeError> {
    if let Some(pos) = [from, to].into_iter().find(|pos| !maze.is_in_bounds(*pos)) {
        return Err(MazeError::InvalidCoordinate(pos));
    }

    let mut queue = VecDeque::from([from]);
    let mut discovered = HashSet::with_capacity(maze.cell_count());
    let mut came_from = HashMap::with_capacity(maze.cell_count());
    discovered.insert(from);

    use CellWall::*;
    while let Some(current) = queue.pop_front() {
        if current == to {
            return Ok(reconstruct(&came_from, from, to));
        }

        for wall in [Left, Right, Top, Bottom] {
            let Some(next) = neighbor_pos(maze.size(), current, wall) else {
                continue;
            };

            if maze.is_open(current, next) && discovered.insert(next) {
                came_from.insert(next, current);
                queue.push_back(next);
            }
        }
    }

    Err(MazeError::NoPathExists(from, to))
}

fn reconstruct(came_from: &HashMap<Dims, Dims>, from: Dims, to: Dims) -> Path {
    let mut path = vec![to];
    let mut current = to;
    while current != from {
        current = came_from[&current];
        path.push(current);
    }
    path.reverse();

    Path(path)
}
