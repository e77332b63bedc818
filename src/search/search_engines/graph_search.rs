//! The expansion loop shared by every search engine.

use crate::search::{
    search_engines::Frontier, PuzzleState, RunStatistics, SearchStatistics, VisitedSet,
};
use std::time::Instant;
use tracing::{debug, trace};

/// Search from `start` until a goal state is removed from `frontier` or the
/// frontier runs dry. The reported time is measured from `started_at`, which
/// the caller picks.
pub fn graph_search(
    frontier: &mut impl Frontier,
    start: PuzzleState,
    started_at: Instant,
) -> RunStatistics {
    graph_search_with_observer(frontier, start, started_at, |_| {})
}

/// Same as [`graph_search`], but `on_expand` sees every state removed from the
/// frontier, in removal order.
pub fn graph_search_with_observer(
    frontier: &mut impl Frontier,
    start: PuzzleState,
    started_at: Instant,
    mut on_expand: impl FnMut(&PuzzleState),
) -> RunStatistics {
    let mut statistics = SearchStatistics::new();
    let mut visited = VisitedSet::new();

    // The start board is registered up front so that it cannot re-enter the
    // frontier as the successor of one of its neighbours. BFS and UCS visit
    // one node fewer than they would otherwise (60 rather than 61 from the
    // default start).
    visited.insert(start.pack());
    frontier.push(start);

    while let Some(state) = frontier.pop() {
        statistics.increment_expanded_nodes();
        on_expand(&state);

        if state.is_goal() {
            let elapsed = started_at.elapsed();
            debug!(goal_cost = state.cost(), "goal reached");
            statistics.finalise_search();
            return RunStatistics::success(statistics.expanded_nodes(), elapsed);
        }

        let successors = state.successors();
        statistics.increment_generated_nodes(successors.len());
        for successor in successors {
            if visited.insert(successor.pack()) {
                frontier.push(successor);
            } else {
                trace!(board = successor.pack().value(), "skipping visited board");
                statistics.increment_pruned_duplicates();
            }
        }
        statistics.register_frontier_size(frontier.len());
    }

    debug!(visited_boards = visited.len(), "frontier exhausted");
    statistics.finalise_search();
    RunStatistics::failure(statistics.expanded_nodes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        search::{
            search_engines::{PriorityFrontier, QueueFrontier, StackFrontier},
            ManhattanDistance, MisplacedTiles, PackedBoard, ZeroHeuristic, GOAL_BOARD,
        },
        test_utils::*,
    };
    use std::collections::HashSet;

    fn expand_all(
        frontier: &mut impl Frontier,
        start: PuzzleState,
    ) -> (RunStatistics, Vec<PackedBoard>) {
        let mut expanded = Vec::new();
        let statistics =
            graph_search_with_observer(frontier, start, Instant::now(), |state| {
                expanded.push(state.pack())
            });
        (statistics, expanded)
    }

    /// Runs the search once per frontier kind.
    fn with_every_frontier(start: PuzzleState) -> Vec<(RunStatistics, Vec<PackedBoard>)> {
        vec![
            expand_all(&mut StackFrontier::new(), start),
            expand_all(&mut QueueFrontier::new(), start),
            expand_all(
                &mut PriorityFrontier::new(Box::new(ZeroHeuristic::new()), GOAL_BOARD),
                start,
            ),
            expand_all(
                &mut PriorityFrontier::new(Box::new(MisplacedTiles::new()), GOAL_BOARD),
                start,
            ),
        ]
    }

    #[test]
    fn start_at_goal_visits_one_node() {
        let mut frontier = QueueFrontier::new();
        let statistics =
            graph_search(&mut frontier, PuzzleState::new(GOAL_BOARD), Instant::now());
        assert!(statistics.succeeded);
        assert_eq!(statistics.nodes_visited, 1);
    }

    #[test]
    fn no_board_is_expanded_twice() {
        for (statistics, expanded) in with_every_frontier(start_state()) {
            assert!(statistics.succeeded);
            assert_eq!(expanded.len() as u64, statistics.nodes_visited);
            let unique: HashSet<PackedBoard> = expanded.iter().copied().collect();
            assert_eq!(unique.len(), expanded.len());
            assert_eq!(expanded.last(), Some(&GOAL_BOARD.pack()));
        }
    }

    #[test]
    fn unsolvable_board_exhausts_its_component() {
        for (statistics, expanded) in with_every_frontier(PuzzleState::new(UNSOLVABLE_BOARD)) {
            assert!(!statistics.succeeded);
            assert_eq!(statistics.nodes_visited, COMPONENT_SIZE as u64);
            let unique: HashSet<PackedBoard> = expanded.into_iter().collect();
            assert_eq!(unique.len(), COMPONENT_SIZE);
        }
    }

    #[test]
    fn manhattan_guided_search_is_tighter() {
        let mut frontier = PriorityFrontier::new(Box::new(ManhattanDistance::new()), GOAL_BOARD);
        let statistics = graph_search(&mut frontier, start_state(), Instant::now());
        assert!(statistics.succeeded);
        assert_eq!(statistics.nodes_visited, 6);
    }

    #[test]
    fn elapsed_time_counts_from_the_given_instant() {
        let started_at = Instant::now();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let mut frontier = QueueFrontier::new();
        let statistics = graph_search(&mut frontier, start_state(), started_at);
        assert!(statistics.average_time >= std::time::Duration::from_millis(2));
    }
}
