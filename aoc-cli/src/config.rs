//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use log::LevelFilter;
use std::path::PathBuf;

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Base directory for default input paths
    pub input_dir: PathBuf,
    /// Explicit input file replacing the default path
    pub input_override: Option<PathBuf>,
    /// Quiet mode
    pub quiet: bool,
    /// Print timings and summary
    pub timings: bool,
    /// Log level for env_logger
    pub log_level: LevelFilter,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        if args.input_dir.as_os_str().is_empty() {
            return Err(CliError::Config("--input-dir must not be empty".to_string()));
        }
        if let Some(path) = &args.input
            && path.is_dir()
        {
            return Err(CliError::Config(format!(
                "--input {} is a directory, expected a file",
                path.display()
            )));
        }

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: args.input_dir,
            input_override: args.input,
            quiet: args.quiet,
            timings: args.timings,
            log_level: log_level(args.verbose),
        })
    }
}

/// Map `-v` occurrences to a level; warnings are always on
fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Result<Config, CliError> {
        let args = Args::try_parse_from(std::iter::once("aoc").chain(args.iter().copied()))
            .expect("arguments should parse");
        Config::from_args(args)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.year_filter, None);
        assert_eq!(config.day_filter, None);
        assert_eq!(config.part_filter, None);
        assert!(config.tags.is_empty());
        assert_eq!(config.input_override, None);
        assert!(!config.quiet);
        assert!(!config.timings);
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_filters_and_tags() {
        let config = parse(&["-y", "2024", "-d", "3", "-p", "2", "-t", "2024,lexer"]).unwrap();
        assert_eq!(config.year_filter, Some(2024));
        assert_eq!(config.day_filter, Some(3));
        assert_eq!(config.part_filter, Some(2));
        assert_eq!(config.tags, vec!["2024", "lexer"]);
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(parse(&["-v"]).unwrap().log_level, LevelFilter::Info);
        assert_eq!(parse(&["-vv"]).unwrap().log_level, LevelFilter::Debug);
        assert_eq!(parse(&["-vvvv"]).unwrap().log_level, LevelFilter::Trace);
    }

    #[test]
    fn test_day_out_of_range_rejected() {
        assert!(Args::try_parse_from(["aoc", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--part", "3"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_timings() {
        assert!(Args::try_parse_from(["aoc", "--quiet", "--timings"]).is_err());
    }

    #[test]
    fn test_input_directory_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().to_str().unwrap();
        assert!(matches!(parse(&["--input", path]), Err(CliError::Config(_))));
    }
}
