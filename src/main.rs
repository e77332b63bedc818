use clap::Parser;
use std::{error::Error, io, path::PathBuf};
use tilesearch::{
    harness::{Harness, ReportFormat, RunConfig, TimingMode, Verbosity},
    search::{Board, HeuristicName, SearchEngineName},
};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Explore the 8-puzzle state space with depth-first, uniform-cost,
/// breadth-first and A* search, and report how each one fares.
struct Cli {
    #[arg(
        help = "A TOML run configuration; command line options override it",
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
    #[arg(
        help = "How many times to run each engine [default: 5]",
        short = 'n',
        long = "iterations",
        id = "ITERATIONS"
    )]
    iterations: Option<usize>,
    #[arg(
        help = "The start board as nine comma separated cells, 0 being the blank \
        [default: 2,8,3,1,6,4,7,0,5]",
        short = 's',
        long = "start",
        id = "START"
    )]
    start: Option<Board>,
    #[arg(
        value_enum,
        help = "The search engines to run, in order [default: dfs,ucs,bfs,a-star]",
        short = 'e',
        long = "engines",
        id = "ENGINES",
        value_delimiter = ','
    )]
    engines: Option<Vec<SearchEngineName>>,
    #[arg(
        value_enum,
        help = "The heuristic guiding A* [default: misplaced-tiles]",
        long = "heuristic",
        id = "HEURISTIC"
    )]
    heuristic: Option<HeuristicName>,
    #[arg(
        value_enum,
        help = "Where each engine's clock starts [default: per-engine]",
        short = 't',
        long = "timing",
        id = "TIMING"
    )]
    timing: Option<TimingMode>,
    #[arg(
        help = "Draw a new solvable start board for every iteration",
        long = "randomise"
    )]
    randomise: bool,
    #[arg(help = "Seed for --randomise", long = "seed", id = "SEED")]
    seed: Option<u64>,
    #[arg(
        value_enum,
        help = "The report format [default: text]",
        short = 'f',
        long = "format",
        id = "FORMAT"
    )]
    format: Option<ReportFormat>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

impl Cli {
    /// The run configuration: the config file if one was given, otherwise the
    /// defaults, with every option given on the command line applied on top.
    fn run_config(&self) -> Result<RunConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_path(path)?,
            None => RunConfig::default(),
        };

        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if let Some(start) = self.start {
            config.start = start;
        }
        if let Some(engines) = &self.engines {
            config.engines = engines.clone();
        }
        if let Some(heuristic) = self.heuristic {
            config.heuristic = heuristic;
        }
        if let Some(timing) = self.timing {
            config.timing = timing;
        }
        if self.randomise {
            config.randomise = true;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(format) = self.format {
            config.format = format;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(io::stderr)
        .compact()
        .init();

    if let Err(e) = run(&cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = cli.run_config()?;
    info!(start = ?config.start.cells(), "starting runs");

    let mut harness = Harness::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    harness.run(&mut out)?;
    Ok(())
}
