//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions are organized by year. Each one derives `AocSolver` for part
//! dispatch and `AutoRegisterSolver` to join the plugin inventory, and also
//! exposes its parsing and computation as plain functions.

#[cfg(feature = "year-2024")]
pub mod year_2024;
