//! Puzzle input loading from a base directory

use crate::error::InputError;
use aoc_solver::FactoryInfo;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Resolves and reads puzzle inputs
///
/// A solver's declared input path is joined onto `base_dir`. Solvers without
/// one fall back to `{base_dir}/{year}_day{day:02}.txt`.
pub struct InputStore {
    base_dir: PathBuf,
}

impl InputStore {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the input path for a registered solver
    pub fn path_for(&self, info: &FactoryInfo) -> PathBuf {
        if info.meta.input.is_empty() {
            self.base_dir
                .join(format!("{}_day{:02}.txt", info.year, info.day))
        } else {
            self.base_dir.join(info.meta.input)
        }
    }

    /// Read a whole input file
    pub fn load(&self, path: &Path) -> Result<String, InputError> {
        fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::NotFound {
                path: path.to_path_buf(),
            },
            _ => InputError::Io {
                path: path.to_path_buf(),
                source,
            },
        })
    }
}
