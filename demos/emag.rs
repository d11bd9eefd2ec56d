//! Solve an Emag level and print the route.
//!
//! Run from the workspace root: cargo run --bin emag -- --config demos/emag.toml first
//!
//! Without `--config` or `--dir`, level names are looked up in `./levels`.

use std::error::Error as _;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use emag_agent::Agent;
use emag_core::level::read_file;
use emag_core::{DirLevels, Grid};
use emag_demos::{Config, describe_route, render_route};
use emag_paths::FindPath;

#[derive(Parser, Debug)]
#[command(name = "emag", about = "Solve an Emag level and print the route")]
struct Args {
    /// Level name, or path to a level file
    level: String,

    /// TOML configuration file (without it, levels are read from ./levels)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the level files (overrides the config)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Level file extension (overrides the config)
    #[arg(short, long)]
    ext: Option<String>,

    /// List the route from the target back to the source
    #[arg(short, long)]
    reverse: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            let mut source = e.source();
            while let Some(cause) = source {
                log::error!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(dir) = &args.dir {
        config.levels.dir = dir.clone();
    }
    if let Some(ext) = &args.ext {
        config.levels.extension = ext.clone();
    }

    let as_file = PathBuf::from(&args.level);
    let grid = if as_file.is_file() {
        Grid::parse(&read_file(&as_file, &args.level)?)?
    } else {
        Grid::load(&DirLevels::with_config(config.levels), &args.level)?
    };
    log::info!(
        "level {}: {} grid, {} pickups",
        args.level,
        grid.dims(),
        grid.intelligence_count()
    );

    let path = grid.find_path()?;
    let mut agent = Agent::new(&grid)?;
    let steps = agent.walk(&grid, &path)?;

    println!("{}", render_route(&grid, &path));
    println!();
    let listed = if args.reverse { path.reversed() } else { path.clone() };
    println!("route:      {}", describe_route(&listed));
    println!("steps:      {}", steps.len());
    println!("cost:       {:.3}", path.cost());
    println!(
        "pickups:    {}/{}",
        agent.collected(),
        grid.intelligence_count()
    );
    println!("capability: {:.2}", agent.capability());
    Ok(())
}
