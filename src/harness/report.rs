use crate::search::{RunStatistics, SearchEngineName};
use serde::Serialize;
use std::{fmt, time::Duration};

/// The statistics of one engine run as they are reported.
///
/// `nodes_visited` counts each board at most once, the start included. The
/// older reference output could expand its start board twice, so its BFS and
/// UCS counts from the default start read 61 where these read 60.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub algorithm: String,
    pub iteration: usize,
    pub succeeded: bool,
    pub nodes_visited: u64,
    pub best_time_ns: u64,
    pub worst_time_ns: u64,
    pub average_time_ns: u64,
}

fn as_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

impl ReportLine {
    pub fn new(engine: SearchEngineName, iteration: usize, statistics: &RunStatistics) -> Self {
        Self {
            algorithm: engine.to_string(),
            iteration,
            succeeded: statistics.succeeded,
            nodes_visited: statistics.nodes_visited,
            best_time_ns: as_nanos(statistics.best_time),
            worst_time_ns: as_nanos(statistics.worst_time),
            average_time_ns: as_nanos(statistics.average_time),
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Iteration {}: Nodes visited={}, Best Time={} nanoseconds, \
             Worst Time={} nanoseconds, Average Time={} nanoseconds",
            self.algorithm,
            self.iteration,
            self.nodes_visited,
            self.best_time_ns,
            self.worst_time_ns,
            self.average_time_ns
        )
    }
}
