use std::time::Instant;
use tracing::info;

/// Counters collected while a search runs. They are logged periodically
/// during long searches and once more when the search finishes.
#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of states removed from the frontier
    expanded_nodes: u64,
    /// Number of successor states produced
    generated_nodes: u64,
    /// Number of successors dropped because their board was already visited
    pruned_duplicates: u64,
    /// Largest frontier size observed
    peak_frontier_size: usize,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            pruned_duplicates: 0,
            peak_frontier_size: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes as u64;
        self.log_if_needed();
    }

    pub fn increment_pruned_duplicates(&mut self) {
        self.pruned_duplicates += 1;
    }

    pub fn register_frontier_size(&mut self, frontier_size: usize) {
        self.peak_frontier_size = self.peak_frontier_size.max(frontier_size);
    }

    pub fn expanded_nodes(&self) -> u64 {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> u64 {
        self.generated_nodes
    }

    pub fn pruned_duplicates(&self) -> u64 {
        self.pruned_duplicates
    }

    pub fn peak_frontier_size(&self) -> usize {
        self.peak_frontier_size
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            pruned_duplicates = self.pruned_duplicates,
            peak_frontier_size = self.peak_frontier_size,
        );
    }

    pub fn finalise_search(&self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let mut statistics = SearchStatistics::new();
        statistics.increment_expanded_nodes();
        statistics.increment_expanded_nodes();
        statistics.increment_generated_nodes(3);
        statistics.increment_generated_nodes(4);
        statistics.increment_pruned_duplicates();
        statistics.register_frontier_size(5);
        statistics.register_frontier_size(2);

        assert_eq!(statistics.expanded_nodes(), 2);
        assert_eq!(statistics.generated_nodes(), 7);
        assert_eq!(statistics.pruned_duplicates(), 1);
        assert_eq!(statistics.peak_frontier_size(), 5);
    }
}
