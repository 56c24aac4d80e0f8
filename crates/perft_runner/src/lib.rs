//! Perft runner
//!
//! Command-line plumbing around `chess_core`: argument parsing, the TOML
//! configuration file and parallel EPD suite runs.

pub mod cli;
pub mod config;
pub mod suite;

pub use cli::{Cli, Command};
pub use config::{DEFAULT_CONFIG_PATH, RunnerConfig};
pub use suite::{CaseReport, DepthResult, SuiteReport, run_records, run_suite_file};
