//! AOC CLI - Command-line interface for running Advent of Code solvers

mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::SolverRegistryBuilder;
use chrono::Local;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use log::{LevelFilter, info};
use output::OutputFormatter;
use std::io::Write;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    init_logging(config.log_level);

    // Build registry with tag filtering (only once)
    let registry = build_registry(&config.tags)?;
    info!("{} solver(s) registered", registry.storage().len());

    let executor = Executor::new(registry, &config);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }
    if config.input_override.is_some() && work_items.len() > 1 {
        return Err(CliError::Config(format!(
            "--input requires exactly one selected solver, found {}",
            work_items.len()
        )));
    }

    let mut formatter = OutputFormatter::new(config.quiet, config.timings, work_items.len() > 1);
    let failed = executor.execute(&work_items, |event| formatter.print_event(event));
    formatter.print_summary();

    if failed > 0 {
        return Err(CliError::Failed {
            failed,
            total: work_items.len(),
        });
    }
    Ok(())
}

/// Log to stderr so answers on stdout stay clean. `RUST_LOG` overrides `-v`.
fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .init();
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
