//! Drives the search engines from a start board and reports their
//! statistics.

mod config;
mod report;
mod runner;
mod verbosity;

pub use config::{
    ConfigError, ReportFormat, RunConfig, TimingMode, REFERENCE_ITERATIONS, REFERENCE_START_BOARD,
};
pub use report::ReportLine;
pub use runner::Harness;
pub use verbosity::Verbosity;
