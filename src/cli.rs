use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use crate::solver::{SearchRequest, Solver};
use crate::utils::validate_search_input;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Countdown - solve the Countdown numbers game
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(about = "Find arithmetic expressions over the source numbers that reach the target")]
#[command(version)]
pub struct CliArgs {
    /// Target value to reach
    pub target: i64,

    /// Source numbers, each usable at most once per expression
    #[arg(required = true)]
    pub numbers: Vec<i64>,

    /// Stop shortly after this many matches
    #[arg(short, long)]
    pub max_matches: Option<usize>,

    /// Wall-clock budget for the search, in seconds
    #[arg(short, long, default_value_t = 30)]
    pub timeout: u64,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub target: i64,
    pub numbers: Vec<i64>,
    pub max_matches: Option<usize>,
    pub time_budget: Duration,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    validate_search_input(&args.numbers, args.max_matches).context("Invalid search input")?;

    Ok(CliConfig {
        target: args.target,
        numbers: args.numbers,
        max_matches: args.max_matches,
        time_budget: Duration::from_secs(args.timeout),
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = Solver::with_time_budget(config.time_budget);
    let mut request = SearchRequest::new(config.numbers, config.target);
    request.max_matches = config.max_matches;

    info!(
        "Searching for expressions over {:?} that reach {}",
        request.numbers, request.target
    );

    let results = solver.run(&request).context("Search failed")?;

    if results.is_empty() {
        warn!("No matching expression found");
        println!("No solution.");
        return Ok(());
    }

    for found in &results {
        println!("{} = {}", found.infix, found.value);
    }
    Ok(())
}
