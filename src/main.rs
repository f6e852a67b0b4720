use std::{error::Error, path::PathBuf};

use clap::Parser;
use gridmaze::{logging, CellWall, Dims, Maze, MazeSession, MazeSettings, Path};

#[derive(Parser, Debug)]
#[clap(version, about, name = "gridmaze")]
struct Args {
    #[clap(short, long, help = "Number of columns")]
    cols: Option<i32>,
    #[clap(short, long, help = "Number of rows")]
    rows: Option<i32>,
    #[clap(short, long, help = "Seed for deterministic generation")]
    seed: Option<u64>,
    #[clap(long, help = "Settings file to use instead of the default one")]
    config: Option<PathBuf>,
    #[clap(long, action, help = "Draw the shortest path from start to end")]
    solve: bool,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More logging, repeatable")]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    logging::init(logging::level_from_verbosity(args.verbose));

    let settings_path = match args.config.clone() {
        Some(path) => path,
        None => MazeSettings::default_path()?,
    };

    if args.show_config_path {
        println!("{}", settings_path.display());
        return Ok(());
    }

    if args.reset_config {
        MazeSettings::reset_config(&settings_path)?;
        return Ok(());
    }

    better_panic::install();

    let mut overrides = MazeSettings::new();
    overrides.cols = args.cols;
    overrides.rows = args.rows;
    overrides.seed = args.seed;
    let settings = MazeSettings::load(&settings_path)?.merge(overrides);

    let mut session = MazeSession::new(settings)?;
    let path = if args.solve {
        Some(session.solve()?.clone())
    } else {
        None
    };

    print!("{}", draw_maze(session.maze(), path.as_ref()));
    println!("seed: {}", session.seed());

    Ok(())
}

fn draw_maze(maze: &Maze, path: Option<&Path>) -> String {
    let Dims(cols, rows) = maze.size();
    let mut out = String::new();
    let cell = |x, y| maze.cell(Dims(x, y));

    for y in 0..rows {
        for x in 0..cols {
            let top = cell(x, y).is_some_and(|c| c.is_closed(CellWall::Top));
            out.push_str(if top { "+---" } else { "+   " });
        }
        out.push_str("+\n");

        for x in 0..cols {
            let left = cell(x, y).is_some_and(|c| c.is_closed(CellWall::Left));
            let on_path = path.is_some_and(|p| p.contains(Dims(x, y)));
            out.push(if left { '|' } else { ' ' });
            out.push_str(if on_path { " * " } else { "   " });
        }
        let right = cell(cols - 1, y).is_some_and(|c| c.is_closed(CellWall::Right));
        out.push_str(if right { "|\n" } else { " \n" });
    }

    for x in 0..cols {
        let bottom = cell(x, rows - 1).is_some_and(|c| c.is_closed(CellWall::Bottom));
        out.push_str(if bottom { "+---" } else { "+   " });
    }
    out.push_str("+\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_openings_and_path() {
        let mut maze = Maze::new(2, 1, Dims(0, 0), Dims(1, 0)).unwrap();
        maze.open_passage(Dims(0, 0), Dims(1, 0)).unwrap();
        let path = gridmaze::solve(&maze).unwrap();

        assert_eq!(
            draw_maze(&maze, Some(&path)),
            "+---+---+\n  *   *  \n+---+---+\n"
        );
        assert_eq!(draw_maze(&maze, None), "+---+---+\n         \n+---+---+\n");
    }
}
