//! Project-completion detection over board snapshots.

use crate::board::domain::{Board, ColumnId};

/// Returns true iff the board holds at least one task and every task is in
/// the terminal (`done`) column.
///
/// An empty board is not complete: there is nothing to celebrate.
#[must_use]
pub fn is_fully_complete(board: &Board) -> bool {
    let total = board.total_tasks();
    total > 0 && board.column(ColumnId::Done).len() == total
}

/// Edge detector for the one-shot celebration signal.
///
/// [`is_fully_complete`] is stateless and would report `true` on every
/// evaluation while the board stays complete; the latch compares against
/// the previous result so the caller fires its notification exactly once
/// per transition into the fully-complete state. Moving a task back out of
/// the terminal column re-arms the latch.
///
/// Deliberately not `Copy`: the latch is single-instance edge state, and an
/// accidental by-value copy would fork it and re-fire the signal. Duplication
/// requires an explicit [`Clone`].
#[derive(Debug, Clone, Default)]
pub struct CompletionLatch {
    previous: bool,
}

impl CompletionLatch {
    /// Creates a latch in the armed (not-complete) state.
    #[must_use]
    pub const fn new() -> Self {
        Self { previous: false }
    }

    /// Evaluates the board, returning true only on the transition from
    /// not-complete to fully-complete.
    pub fn observe(&mut self, board: &Board) -> bool {
        let current = is_fully_complete(board);
        let fired = current && !self.previous;
        self.previous = current;
        fired
    }
}
