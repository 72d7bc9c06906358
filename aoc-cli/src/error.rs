//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input error
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Solver error
    #[error("Solver error: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// At least one solver reported an error
    #[error("{failed} of {total} solver(s) failed")]
    Failed { failed: usize, total: usize },
}

/// Executor-specific errors, reported per solver without stopping the run
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Input could not be loaded
    #[error(transparent)]
    Input(#[from] InputError),

    /// Parsing or solving failed
    #[error(transparent)]
    Solver(#[from] aoc_solver::SolverError),
}

/// Input loading errors
#[derive(Error, Debug)]
pub enum InputError {
    /// The input file does not exist
    #[error("input file {} not found", .path.display())]
    NotFound { path: PathBuf },

    /// Any other IO failure while reading
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
