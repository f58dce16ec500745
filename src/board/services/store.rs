//! The board store: sole mutator of board state.

use crate::board::{
    domain::{Board, ColumnId, MoveOutcome, Task, TaskDraft, TaskId},
    ports::BoardObserver,
};
use mockable::Clock;
use tracing::{debug, warn};

/// Single source of truth for board state.
///
/// The store owns the [`Board`], a clock for stamping task creation times,
/// and the list of registered observers. All mutations are applied
/// atomically within one call and observers are notified synchronously
/// afterwards; there is no background work and no interleaving of two
/// mutations (the `&mut self` receiver enforces this statically).
pub struct BoardStore<C: Clock> {
    board: Board,
    observers: Vec<Box<dyn BoardObserver>>,
    clock: C,
}

impl<C: Clock> BoardStore<C> {
    /// Creates a store over an empty board.
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self::with_board(Board::new(), clock)
    }

    /// Creates a store over a pre-seeded board.
    #[must_use]
    pub const fn with_board(board: Board, clock: C) -> Self {
        Self {
            board,
            observers: Vec::new(),
            clock,
        }
    }

    /// Returns a read-only borrow of the current board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns an owned deep copy of the current board, suitable for
    /// handing to a rendering layer that outlives the borrow.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Registers an observer to be notified after every state change.
    ///
    /// Observers cannot be unregistered; they live as long as the store.
    /// Notification order is registration order. Observers must not issue
    /// store mutations from within [`BoardObserver::board_changed`]; see the
    /// port documentation for the reentrancy discipline.
    pub fn subscribe(&mut self, observer: impl BoardObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Creates a new task into the intake (`todo`) column.
    ///
    /// Returns the fresh task identifier, or `None` when the draft title is
    /// empty or whitespace-only. Rejection is silent by design: the board is
    /// left untouched, no observer fires, and the caller re-prompts the user
    /// if it cares.
    pub fn create_task(&mut self, draft: TaskDraft) -> Option<TaskId> {
        match Task::new(draft, &self.clock) {
            Ok(task) => {
                let task_id = task.id();
                self.board.enqueue(task);
                debug!(task = %task_id, "task created into intake column");
                self.notify();
                Some(task_id)
            }
            Err(error) => {
                debug!(%error, "task creation rejected");
                None
            }
        }
    }

    /// Moves a task from `source` to the end of `target`.
    ///
    /// Same-column requests are idempotent no-ops and do not notify. A task
    /// missing from the stated source column is a silent no-op logged at
    /// `warn` level: drag-and-drop gestures can race UI re-renders, and
    /// dropping the phantom move is preferable to failing. The task record
    /// is unchanged by a move; only column membership changes.
    pub fn move_task(
        &mut self,
        task_id: TaskId,
        source: ColumnId,
        target: ColumnId,
    ) -> MoveOutcome {
        let outcome = self.board.transfer(task_id, source, target);
        match outcome {
            MoveOutcome::Moved => {
                debug!(task = %task_id, %source, %target, "task moved");
                self.notify();
            }
            MoveOutcome::SameColumn => {}
            MoveOutcome::NotInSource => {
                warn!(task = %task_id, %source, "move ignored: task not in source column");
            }
        }
        outcome
    }

    /// Replaces the board wholesale and notifies observers.
    ///
    /// Used when the active project changes and the board is reseeded for
    /// the new project's tasks.
    pub fn reset(&mut self, board: Board) {
        self.board = board;
        debug!(tasks = self.board.total_tasks(), "board reset");
        self.notify();
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.board_changed(&self.board);
        }
    }
}
