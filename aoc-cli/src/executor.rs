//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::ExecutorError;
use crate::input::InputStore;
use aoc_solver::{FactoryInfo, SolverError, SolverRegistry};
use chrono::TimeDelta;
use log::{debug, info};
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Work item representing a solver to execute
#[derive(Debug, Clone)]
pub struct WorkItem {
    pub info: FactoryInfo,
    pub parts: RangeInclusive<u8>,
}

/// Answer for a single part
#[derive(Debug, Clone)]
pub struct PartResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub label: Option<&'static str>,
    pub answer: String,
    /// Set on the first part reported for a solver
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Progress reported while executing
#[derive(Debug)]
pub enum ExecutionEvent<'w> {
    /// A solver is about to load its input
    Started(&'w WorkItem),
    /// A part produced an answer
    Part(PartResult),
    /// Loading, parsing or a single part failed
    Failed {
        work: &'w WorkItem,
        part: Option<u8>,
        error: ExecutorError,
    },
}

/// Runs work items one after another in year/day order
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    input_override: Option<PathBuf>,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputStore::new(config.input_dir.clone()),
            input_override: config.input_override.clone(),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .storage()
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                parts: self.filter_parts(info.parts),
                info,
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Input path for a work item, honouring an explicit override
    pub fn input_path(&self, work: &WorkItem) -> PathBuf {
        match &self.input_override {
            Some(path) => path.clone(),
            None => self.inputs.path_for(&work.info),
        }
    }

    /// Execute all work items, reporting each step to `on_event`
    ///
    /// A failing solver does not stop the run. Returns the number of solvers
    /// that reported at least one failure.
    pub fn execute<'w, F>(&self, work_items: &'w [WorkItem], mut on_event: F) -> usize
    where
        F: FnMut(ExecutionEvent<'w>),
    {
        let mut failed = 0;
        for work in work_items {
            on_event(ExecutionEvent::Started(work));
            if !self.run_solver(work, &mut on_event) {
                failed += 1;
            }
        }
        info!(
            "finished {} solver(s), {} failed",
            work_items.len(),
            failed
        );
        failed
    }

    /// Run a single solver for its selected parts. Returns false on any failure.
    fn run_solver<'w, F>(&self, work: &'w WorkItem, on_event: &mut F) -> bool
    where
        F: FnMut(ExecutionEvent<'w>),
    {
        let (year, day) = (work.info.year, work.info.day);
        let path = self.input_path(work);
        info!("{}/{:02}: reading {}", year, day, path.display());

        let input = match self.inputs.load(&path) {
            Ok(input) => input,
            Err(e) => {
                on_event(ExecutionEvent::Failed {
                    work,
                    part: None,
                    error: e.into(),
                });
                return false;
            }
        };

        let mut solver = match self.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(e) => {
                on_event(ExecutionEvent::Failed {
                    work,
                    part: None,
                    error: e.into(),
                });
                return false;
            }
        };
        let parse_duration = solver.parse_duration();
        debug!("{}/{:02}: parsed in {}", year, day, parse_duration);

        let mut ok = true;
        let mut parse_duration = Some(parse_duration);
        for part in work.parts.clone() {
            match solver.solve(part) {
                Ok(result) => {
                    debug!("{}/{:02} part {}: {}", year, day, part, result.answer);
                    on_event(ExecutionEvent::Part(PartResult {
                        year,
                        day,
                        part,
                        label: solver.part_label(part),
                        solve_duration: result.duration(),
                        answer: result.answer,
                        parse_duration: parse_duration.take(),
                    }));
                }
                Err(e) => {
                    ok = false;
                    on_event(ExecutionEvent::Failed {
                        work,
                        part: Some(part),
                        error: SolverError::from(e).into(),
                    });
                }
            }
        }
        ok
    }
}
