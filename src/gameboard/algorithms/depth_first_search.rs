use rand::{seq::SliceRandom, Rng};
use smallvec::SmallVec;

use super::{Maze, MazeAlgorithm};
use crate::core::*;

/// Randomized iterative backtracker, always starting at the top-left cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSearch;

impl MazeAlgorithm for DepthFirstSearch {
    fn generate<R: Rng + ?Sized>(&self, maze: &mut Maze, rng: &mut R) -> Result<(), MazeError> {
        if maze.passage_count() > 0 {
            log::warn!("Refusing to carve into a maze which already has passages");
            return Err(MazeError::AlreadyCarved);
        }

        let cell_count = maze.cell_count();
        log::debug!("Carving {:?} maze by depth first search", maze.size());

        maze.reset_visited();
        let mut stack = Vec::with_capacity(cell_count);

        let mut current = Dims::ZERO;
        maze.set_visited(current);
        let mut visited = 1;

        while visited < cell_count {
            let unvisited_neighbors = maze
                .get_neighbors_pos(current)
                .into_iter()
                .filter(|cell| !maze.is_visited(*cell))
                .collect::<SmallVec<[_; 4]>>();

            if let Some(&next) = unvisited_neighbors.choose(rng) {
                maze.set_visited(next);
                visited += 1;
                stack.push(current);
                maze.open_passage(current, next)?;
                current = next;
            } else if let Some(prev) = stack.pop() {
                log::trace!("Backtracking from {:?} to {:?}", current, prev);
                current = prev;
            } else {
                break;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use hashbrown::HashSet;
    use rand::{rngs::mock::StepRng, SeedableRng as _};

    use super::*;
    use crate::gameboard::{algorithms::Random, CellWall};

    fn carve(cols: i32, rows: i32, seed: u64) -> Maze {
        let mut maze = Maze::new(cols, rows, Dims::ZERO, Dims(cols - 1, rows - 1)).unwrap();
        let mut rng = Random::seed_from_u64(seed);
        DepthFirstSearch.generate(&mut maze, &mut rng).unwrap();
        maze
    }

    fn reachable_from_origin(maze: &Maze) -> usize {
        let mut seen = HashSet::new();
        let mut queue = VecDeque::from([Dims::ZERO]);
        seen.insert(Dims::ZERO);
        while let Some(pos) = queue.pop_front() {
            for next in maze.open_neighbors(pos) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen.len()
    }

    #[test]
    fn generates_spanning_tree() {
        for (seed, (cols, rows)) in [(1, 1), (1, 7), (7, 1), (2, 2), (5, 5), (13, 4), (30, 20)]
            .into_iter()
            .enumerate()
        {
            let maze = carve(cols, rows, seed as u64);
            let cells = (cols * rows) as usize;
            assert_eq!(maze.passage_count(), cells - 1, "{}x{}", cols, rows);
            assert_eq!(reachable_from_origin(&maze), cells, "{}x{}", cols, rows);
        }
    }

    #[test]
    fn perfect_over_many_seeds() {
        for seed in 0..64 {
            let maze = carve(9, 6, seed);
            assert_eq!(maze.passage_count(), 53);
            assert_eq!(reachable_from_origin(&maze), 54);
        }
    }

    #[test]
    fn walls_stay_symmetric() {
        let maze = carve(12, 9, 7);
        for pos in Dims::iter_fill(Dims::ZERO, maze.size()) {
            for wall in CellWall::get_in_order() {
                let Some(next) = maze.neighbor(pos, wall).map(|c| c.get_coord()) else {
                    continue;
                };
                let here = maze.cell(pos).unwrap().is_open(wall);
                let there = maze.cell(next).unwrap().is_open(wall.reverse_wall());
                assert_eq!(here, there, "{:?} -> {:?}", pos, next);
                assert_eq!(maze.is_open(pos, next), maze.is_open(next, pos));
            }
        }
    }

    #[test]
    fn every_cell_visited() {
        let maze = carve(6, 6, 3);
        assert!(maze.cells().all(|cell| cell.is_visited()));
    }

    #[test]
    fn boundary_openings_survive() {
        let maze = carve(6, 4, 11);
        assert!(maze.cell(Dims(0, 0)).unwrap().is_open(CellWall::Left));
        assert!(maze.cell(Dims(5, 3)).unwrap().is_open(CellWall::Right));
    }

    #[test]
    fn same_seed_same_maze() {
        let walls = |maze: &Maze| maze.cells().map(|c| c.walls()).collect::<Vec<_>>();
        assert_eq!(walls(&carve(20, 20, 1234)), walls(&carve(20, 20, 1234)));
        assert_ne!(walls(&carve(20, 20, 1234)), walls(&carve(20, 20, 4321)));
    }

    #[test]
    fn rejects_carved_maze() {
        let walls = |maze: &Maze| maze.cells().map(|c| c.walls()).collect::<Vec<_>>();
        let mut maze = carve(8, 5, 21);
        let before = walls(&maze);

        let mut rng = Random::seed_from_u64(22);
        assert_eq!(
            DepthFirstSearch.generate(&mut maze, &mut rng),
            Err(MazeError::AlreadyCarved)
        );
        assert_eq!(walls(&maze), before);
        assert_eq!(maze.passage_count(), 39);

        let mut maze = Maze::new(4, 4, Dims::ZERO, Dims(3, 3)).unwrap();
        maze.open_passage(Dims(2, 2), Dims(2, 3)).unwrap();
        assert_eq!(
            DepthFirstSearch.generate(&mut maze, &mut rng),
            Err(MazeError::AlreadyCarved)
        );
        assert_eq!(maze.passage_count(), 1);
    }

    #[test]
    fn first_choice_carve_order() {
        // always picks the first candidate, so the carve snakes right, down, left, ...
        let mut rng = StepRng::new(0, 0);
        let mut maze = Maze::new(3, 3, Dims(0, 0), Dims(2, 2)).unwrap();
        DepthFirstSearch.generate(&mut maze, &mut rng).unwrap();

        let walls = |x, y| maze.cell(Dims(x, y)).unwrap().walls();
        const T: bool = true;
        const F: bool = false;
        assert_eq!(walls(0, 0), [T, F, T, F]);
        assert_eq!(walls(1, 0), [T, F, T, F]);
        assert_eq!(walls(2, 0), [T, T, F, F]);
        assert_eq!(walls(0, 1), [T, F, F, T]);
        assert_eq!(walls(1, 1), [T, T, F, F]);
        assert_eq!(walls(2, 1), [F, T, F, T]);
        assert_eq!(walls(0, 2), [F, T, T, T]);
        assert_eq!(walls(1, 2), [F, F, T, T]);
        assert_eq!(walls(2, 2), [F, F, T, F]);
        assert_eq!(maze.passage_count(), 8);
    }
}
