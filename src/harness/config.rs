//! Run configuration. Every value has a default that reproduces the
//! reference run, and any of them can be overridden from a TOML file.
//!
//! ```toml
//! iterations = 3
//! start = [2, 8, 3, 1, 6, 4, 7, 0, 5]
//! engines = ["bfs", "a-star"]
//! heuristic = "manhattan"
//! timing = "shared"
//! ```

use crate::search::{Board, HeuristicName, SearchEngineName};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use strum::IntoEnumIterator;
use thiserror::Error;

/// The start configuration used when none is given.
pub const REFERENCE_START_BOARD: Board = Board::new_unchecked([2, 8, 3, 1, 6, 4, 7, 0, 5]);

pub const REFERENCE_ITERATIONS: usize = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Which instant each engine's elapsed time is measured from.
#[derive(clap::ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TimingMode {
    /// The clock restarts right before each engine runs.
    #[default]
    PerEngine,
    /// One clock per iteration, started before the first engine. Each
    /// reported time then includes the engines that ran before it.
    Shared,
}

#[derive(clap::ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    /// One human readable line per run, blank line after each iteration.
    #[default]
    Text,
    /// One JSON object per run.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct RunConfig {
    pub iterations: usize,
    /// Start board, used for every iteration unless `randomise` is set.
    pub start: Board,
    /// Engines to run each iteration, in this order.
    pub engines: Vec<SearchEngineName>,
    /// Heuristic for A*.
    pub heuristic: HeuristicName,
    pub timing: TimingMode,
    /// Draw a fresh solvable start board for every iteration.
    pub randomise: bool,
    /// Seed for `randomise`. Without one the boards differ between runs.
    pub seed: Option<u64>,
    pub format: ReportFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            iterations: REFERENCE_ITERATIONS,
            start: REFERENCE_START_BOARD,
            engines: SearchEngineName::iter().collect(),
            heuristic: HeuristicName::default(),
            timing: TimingMode::default(),
            randomise: false,
            seed: None,
            format: ReportFormat::default(),
        }
    }
}

impl RunConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::Invalid(
                "iterations must be at least 1".to_string(),
            ));
        }
        if self.engines.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one search engine is needed".to_string(),
            ));
        }
        Ok(())
    }
}
