//! Command-line demo for the waypath searches.
//!
//! Run: cargo run --bin waypath -- maze --algorithm astar --rows 15 --cols 30
//!      cargo run --bin waypath -- route --all --seed 7

use std::io;

use clap::{Args, Parser, Subcommand};
use crossterm::tty::IsTty;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::{EnvFilter, fmt};
use waypath_demos::{MazeReport, RouteReport, draw_maze, route_line};
use waypath_gen::{CityConfig, CityGen, MazeConfig, MazeGen};
use waypath_search::{GridAlgorithm, RoutingAlgorithm};

/// Maze search and multi-stop routing demos
#[derive(Parser)]
#[command(name = "waypath")]
#[command(version)]
#[command(about = "Maze search and multi-stop routing demos")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a random maze from its top-left to its bottom-right corner
    Maze(MazeArgs),
    /// Visit every bin of a random city from a central depot and return
    Route(RouteArgs),
}

#[derive(Args)]
struct Common {
    /// Seed for the generator; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Run every algorithm on the same model
    #[arg(long)]
    all: bool,
}

#[derive(Args)]
struct MazeArgs {
    /// bfs, dfs, astar or greedy
    #[arg(short, long, default_value = "astar")]
    algorithm: GridAlgorithm,

    #[arg(long, default_value_t = MazeConfig::default().rows)]
    rows: i32,

    #[arg(long, default_value_t = MazeConfig::default().cols)]
    cols: i32,

    /// Wall probability per cell
    #[arg(long, default_value_t = MazeConfig::default().wall_density)]
    density: f64,

    #[command(flatten)]
    common: Common,
}

#[derive(Args)]
struct RouteArgs {
    /// bfs, dfs, ucs or astar
    #[arg(short, long, default_value = "astar")]
    algorithm: RoutingAlgorithm,

    #[arg(long, default_value_t = CityConfig::default().bins)]
    bins: usize,

    #[arg(long, default_value_t = CityConfig::default().grid_size)]
    grid_size: i32,

    #[command(flatten)]
    common: Common,
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

fn run_maze(args: MazeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = MazeConfig {
        rows: args.rows,
        cols: args.cols,
        wall_density: args.density,
    };
    let mut maze = MazeGen::new(config, rng_for(args.common.seed))?.generate();

    let algorithms: Vec<GridAlgorithm> = if args.common.all {
        GridAlgorithm::ALL.to_vec()
    } else {
        vec![args.algorithm]
    };
    let reports: Vec<MazeReport> = algorithms
        .into_iter()
        .map(|a| MazeReport::run(&mut maze, a))
        .collect();

    if args.common.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    let mut stdout = io::stdout();
    let color = stdout.is_tty();
    for report in &reports {
        println!("{}", report.algorithm);
        draw_maze(&mut stdout, &maze, Some(&report.result), color)?;
        println!("{}\n", report.summary());
    }
    Ok(())
}

fn run_route(args: RouteArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = CityConfig {
        bins: args.bins,
        grid_size: args.grid_size,
    };
    let mut graph = CityGen::new(config, rng_for(args.common.seed))?.generate();

    let algorithms: Vec<RoutingAlgorithm> = if args.common.all {
        RoutingAlgorithm::ALL.to_vec()
    } else {
        vec![args.algorithm]
    };
    let reports: Vec<RouteReport> = algorithms
        .into_iter()
        .map(|a| RouteReport::run(&mut graph, a))
        .collect();

    if args.common.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in &reports {
        println!("{}", route_line(&graph, &report.result));
        println!("{}\n", report.summary());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Maze(args) => run_maze(args),
        Commands::Route(args) => run_route(args),
    }
}
