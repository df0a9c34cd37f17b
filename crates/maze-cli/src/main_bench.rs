//! `maze-bench`: compare A*, greedy and (optionally) Dijkstra on random mazes.

use anyhow::Context;
use clap::Parser;
use maze_gen::{GenConfig, MapGen, compare, table_header};
use maze_paths::{Distance, DuplicatePolicy, Mode};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Benchmark search strategies on random mazes.
#[derive(Parser, Debug)]
#[command(name = "maze-bench", version, about, long_about = None)]
struct Args {
    /// Maze side lengths, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = [30, 35, 40])]
    sizes: Vec<usize>,

    /// Probability that a cell is a wall
    #[arg(long, default_value_t = 0.3)]
    obstacle_prob: f64,

    /// RNG seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Also run Dijkstra
    #[arg(long)]
    dijkstra: bool,

    /// Emit one JSON object per line instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut mapgen = MapGen::new(rng);

    let grids = args
        .sizes
        .iter()
        .map(|&size| {
            let cfg = GenConfig {
                size,
                obstacle_prob: args.obstacle_prob,
                ..GenConfig::default()
            };
            mapgen
                .random_maze(&cfg)
                .with_context(|| format!("generating {size}x{size} maze"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut modes = vec![Mode::Astar, Mode::Greedy];
    if args.dijkstra {
        modes.push(Mode::Dijkstra);
    }
    let heuristics = [Distance::Manhattan, Distance::Euclidean];
    let records = compare(&grids, &heuristics, &modes, DuplicatePolicy::CostAware);

    if args.json {
        for r in &records {
            println!("{}", serde_json::to_string(r)?);
        }
    } else {
        println!("{}", table_header());
        for r in &records {
            println!("{r}");
        }
    }
    Ok(())
}
