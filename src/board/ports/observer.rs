//! Change-notification port for rendering layers.

use crate::board::domain::Board;

/// Observer of board state changes.
///
/// Observers are invoked synchronously after every state change with a
/// borrow of the updated board. Implementations must treat the borrow as
/// read-only and must not attempt to issue board mutations from within the
/// notification; the store holds itself exclusively for the duration of a
/// mutation, so reentrant mutation through the same store handle cannot
/// compile.
pub trait BoardObserver {
    /// Called after a board mutation has been applied.
    fn board_changed(&self, board: &Board);
}

impl<F> BoardObserver for F
where
    F: Fn(&Board),
{
    fn board_changed(&self, board: &Board) {
        self(board);
    }
}
