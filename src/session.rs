use rand::{Rng as _, SeedableRng as _};

use crate::{
    core::*,
    gameboard::{
        algorithms::{random_seed, DepthFirstSearch, MazeAlgorithm, Random},
        Maze,
    },
    settings::MazeSettings,
    solver::{self, Path},
};

/// One maze instance with the two actions a front end offers: regenerate and solve.
///
/// Regenerating never touches the old grid, it is dropped and a new one is carved. The seed of
/// every maze is drawn from a stream seeded by the settings, so a seeded session replays the
/// same sequence of mazes.
#[derive(Debug)]
pub struct MazeSession<A: MazeAlgorithm = DepthFirstSearch> {
    settings: MazeSettings,
    algorithm: A,
    seeds: Random,
    seed: u64,
    maze: Maze,
    solution: Option<Path>,
}

impl MazeSession {
    pub fn new(settings: MazeSettings) -> Result<Self, MazeError> {
        Self::with_algorithm(settings, DepthFirstSearch)
    }
}

impl<A: MazeAlgorithm> MazeSession<A> {
    pub fn with_algorithm(settings: MazeSettings, algorithm: A) -> Result<Self, MazeError> {
        let mut seeds = Random::seed_from_u64(settings.get_seed().unwrap_or_else(random_seed));
        let seed = seeds.gen();
        let maze = Self::build(&settings, &algorithm, seed)?;

        Ok(Self {
            settings,
            algorithm,
            seeds,
            seed,
            maze,
            solution: None,
        })
    }

    fn build(settings: &MazeSettings, algorithm: &A, seed: u64) -> Result<Maze, MazeError> {
        let mut maze = Maze::new(
            settings.get_cols(),
            settings.get_rows(),
            settings.get_start(),
            settings.get_end(),
        )?;

        log::info!("Generating {:?} maze with seed {}", maze.size(), seed);
        algorithm.generate(&mut maze, &mut Random::seed_from_u64(seed))?;

        Ok(maze)
    }

    /// Throws away the current maze and carves a new one of the same shape.
    pub fn regenerate(&mut self) -> Result<(), MazeError> {
        let seed = self.seeds.gen();
        self.maze = Self::build(&self.settings, &self.algorithm, seed)?;
        self.seed = seed;
        self.solution = None;

        Ok(())
    }

    /// Path from start to end, computed on first call and kept until the next regenerate.
    pub fn solve(&mut self) -> Result<&Path, MazeError> {
        let path = match self.solution.take() {
            Some(path) => path,
            None => solver::solve(&self.maze).inspect_err(|err| {
                log::error!("Generated maze (seed {}) is broken; {}", self.seed, err);
            })?,
        };

        Ok(self.solution.insert(path))
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn solution(&self) -> Option<&Path> {
        self.solution.as_ref()
    }

    /// Seed the current maze was carved with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn settings(&self) -> &MazeSettings {
        &self.settings
    }
}
