//! `maze <file>`: solve a text maze with A* and draw the result.

use std::env;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, bail};
use maze_cli::args;
use maze_cli::render::{self, RenderOptions};
use maze_core::Grid;
use maze_paths::{Distance, Mode, SearchError, solve};

fn main() -> ExitCode {
    env_logger::init();

    let Some(path) = args::maze_path(env::args_os()) else {
        eprintln!("Usage: maze <maze.txt>");
        return ExitCode::FAILURE;
    };

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path) -> anyhow::Result<()> {
    let grid =
        Grid::from_file(path).with_context(|| format!("loading maze {}", path.display()))?;
    let image = args::image_path(env::var_os("MAZE_IMAGE"));
    let opts = RenderOptions::default().explored();

    println!("Maze:");
    println!();
    print!("{grid}");
    println!();
    println!("Solving...");

    let result = match solve(&grid, &Distance::Manhattan, Mode::Astar) {
        Ok(r) => r,
        Err(SearchError::NoPath { nodes_expanded }) => {
            println!("States Explored: {nodes_expanded}");
            render::save(&grid, None, &opts, &image)
                .with_context(|| format!("writing {}", image.display()))?;
            bail!("no solution");
        }
        Err(e) => return Err(e.into()),
    };

    println!("States Explored: {}", result.nodes_expanded);
    println!("Solution:");
    println!();
    print!("{}", grid.render_text(Some(result.cells.as_slice())));
    println!();

    render::save(&grid, Some(&result), &opts, &image)
        .with_context(|| format!("writing {}", image.display()))?;
    log::info!(
        "path cost {} in {:?}, image written to {}",
        result.path_cost,
        result.elapsed,
        image.display()
    );
    Ok(())
}
