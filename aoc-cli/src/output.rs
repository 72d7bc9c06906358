//! Output formatting for solver results

use crate::executor::{ExecutionEvent, PartResult, WorkItem};
use chrono::TimeDelta;

/// Output formatter for solver results
///
/// Answers go to stdout, failures to stderr.
pub struct OutputFormatter {
    quiet: bool,
    timings: bool,
    headers: bool,
    start_time: std::time::Instant,
    solved: usize,
    failed: usize,
    total_parse_time: TimeDelta,
    total_solve_time: TimeDelta,
}

impl OutputFormatter {
    /// Create a new output formatter. Headers are printed when `headers` is
    /// set and not in quiet mode.
    pub fn new(quiet: bool, timings: bool, headers: bool) -> Self {
        Self {
            quiet,
            timings,
            headers: headers && !quiet,
            start_time: std::time::Instant::now(),
            solved: 0,
            failed: 0,
            total_parse_time: TimeDelta::zero(),
            total_solve_time: TimeDelta::zero(),
        }
    }

    /// Print a single execution event
    pub fn print_event(&mut self, event: ExecutionEvent<'_>) {
        match event {
            ExecutionEvent::Started(work) => {
                if self.headers {
                    println!("{}", format_header(work));
                }
            }
            ExecutionEvent::Part(result) => {
                self.solved += 1;
                if let Some(parse) = result.parse_duration {
                    self.total_parse_time += parse;
                }
                self.total_solve_time += result.solve_duration;
                println!("{}", self.format_part(&result));
            }
            ExecutionEvent::Failed { work, part, error } => {
                self.failed += 1;
                let (year, day) = (work.info.year, work.info.day);
                match part {
                    Some(part) => eprintln!("Error: {}/{:02} part {}: {}", year, day, part, error),
                    None => eprintln!("Error: {}/{:02}: {}", year, day, error),
                }
            }
        }
    }

    /// Format one answer line
    pub fn format_part(&self, result: &PartResult) -> String {
        if self.quiet {
            return result.answer.clone();
        }

        let label = result
            .label
            .map(str::to_string)
            .unwrap_or_else(|| format!("Part {}", result.part));

        if !self.timings {
            return format!("{}: {}", label, result.answer);
        }

        let parse_timing = result
            .parse_duration
            .map(|d| format!("parse: {}, ", format_duration(d)))
            .unwrap_or_default();
        format!(
            "{}: {} ({}solve: {})",
            label,
            result.answer,
            parse_timing,
            format_duration(result.solve_duration)
        )
    }

    /// Print a summary after all results, only when timings are requested
    pub fn print_summary(&self) {
        if !self.timings {
            return;
        }

        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!("Parts: {} solved, {} failed", self.solved, self.failed);
        println!("Total parse time: {}", format_duration(self.total_parse_time));
        println!("Total solve time: {}", format_duration(self.total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed_time)
        );
    }
}

/// `--- 2024 Day 1: Historian Hysteria ---`
fn format_header(work: &WorkItem) -> String {
    let info = &work.info;
    if info.meta.title.is_empty() {
        format!("--- {} Day {} ---", info.year, info.day)
    } else {
        format!("--- {} Day {}: {} ---", info.year, info.day, info.meta.title)
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
