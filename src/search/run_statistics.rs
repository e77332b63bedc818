use std::time::Duration;

/// The outcome of one search engine invocation.
///
/// A run observes exactly one goal-reaching event, so the best, worst and
/// average times always hold the same value. All three are kept because the
/// report prints all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatistics {
    pub succeeded: bool,
    /// Number of states removed from the frontier, the goal included
    pub nodes_visited: u64,
    pub best_time: Duration,
    pub worst_time: Duration,
    pub average_time: Duration,
}

impl RunStatistics {
    pub fn success(nodes_visited: u64, elapsed: Duration) -> Self {
        Self {
            succeeded: true,
            nodes_visited,
            best_time: elapsed,
            worst_time: elapsed,
            average_time: elapsed,
        }
    }

    /// The frontier ran dry before a goal was found. Timings are zeroed since
    /// no goal-reaching event happened.
    pub fn failure(nodes_visited: u64) -> Self {
        Self {
            succeeded: false,
            nodes_visited,
            best_time: Duration::ZERO,
            worst_time: Duration::ZERO,
            average_time: Duration::ZERO,
        }
    }
}
