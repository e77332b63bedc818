use crate::search::PackedBoard;
use std::collections::HashSet;

/// The boards a single search run has already discovered, keyed by their
/// [`PackedBoard`] encoding. A fresh set is created for every run.
#[derive(Debug, Default)]
pub struct VisitedSet {
    seen: HashSet<PackedBoard>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, board: &PackedBoard) -> bool {
        self.seen.contains(board)
    }

    /// Records the board, returning `true` if it had not been seen before.
    pub fn insert(&mut self, board: PackedBoard) -> bool {
        self.seen.insert(board)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
