//! Board aggregate root: the fixed column set and its mutations.

use super::{Column, ColumnId, Task, TaskId};
use serde::{Deserialize, Serialize};

/// Result of a transfer request.
///
/// Only [`MoveOutcome::Moved`] changes board state; the other variants are
/// deliberate no-ops. A task missing from the stated source column indicates
/// caller state desynchronisation (a drag gesture racing a re-render), which
/// the board tolerates rather than escalates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The task was removed from the source column and appended to the
    /// target column.
    Moved,
    /// Source and target are the same column; nothing changed.
    SameColumn,
    /// The task was not found in the stated source column; nothing changed.
    NotInSource,
}

/// The complete board: four workflow columns in fixed order, transitively
/// owning every task.
///
/// Invariant: a task belongs to exactly one column at all times. The only
/// mutations are [`Board::enqueue`] (append to the intake column) and
/// [`Board::transfer`] (transactional remove-from-source plus
/// append-to-target); no task exists outside a column and no task is ever
/// copied between columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    todo: Column,
    in_progress: Column,
    review: Column,
    done: Column,
}

impl Board {
    /// Creates an empty board with the fixed column set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todo: Column::new(ColumnId::Todo),
            in_progress: Column::new(ColumnId::InProgress),
            review: Column::new(ColumnId::Review),
            done: Column::new(ColumnId::Done),
        }
    }

    /// Creates a board pre-populated with seed tasks.
    ///
    /// Seed placement may target any column; this is the session-start path
    /// where a project's existing tasks land in whatever stage they were in.
    #[must_use]
    pub fn from_seed(seed: impl IntoIterator<Item = (ColumnId, Task)>) -> Self {
        let mut board = Self::new();
        for (column_id, task) in seed {
            board.column_mut(column_id).push(task);
        }
        board
    }

    /// Returns the columns in fixed board order.
    #[must_use]
    pub const fn columns(&self) -> [&Column; 4] {
        [&self.todo, &self.in_progress, &self.review, &self.done]
    }

    /// Returns the column with the given identifier.
    #[must_use]
    pub const fn column(&self, id: ColumnId) -> &Column {
        match id {
            ColumnId::Todo => &self.todo,
            ColumnId::InProgress => &self.in_progress,
            ColumnId::Review => &self.review,
            ColumnId::Done => &self.done,
        }
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub fn total_tasks(&self) -> usize {
        self.columns().iter().map(|column| column.len()).sum()
    }

    /// Finds a task anywhere on the board, returning its owning column.
    #[must_use]
    pub fn find_task(&self, task_id: TaskId) -> Option<(ColumnId, &Task)> {
        self.columns().into_iter().find_map(|column| {
            column
                .tasks()
                .iter()
                .find(|task| task.id() == task_id)
                .map(|task| (column.id(), task))
        })
    }

    /// Appends a task to the end of the intake column.
    pub(crate) fn enqueue(&mut self, task: Task) {
        self.todo.push(task);
    }

    /// Moves a task from `source` to the end of `target`.
    ///
    /// The task record itself is unchanged; only column membership changes.
    /// Same-column requests and tasks missing from the stated source leave
    /// the board untouched.
    pub(crate) fn transfer(
        &mut self,
        task_id: TaskId,
        source: ColumnId,
        target: ColumnId,
    ) -> MoveOutcome {
        if source == target {
            return MoveOutcome::SameColumn;
        }
        let Some(task) = self.column_mut(source).take(task_id) else {
            return MoveOutcome::NotInSource;
        };
        self.column_mut(target).push(task);
        MoveOutcome::Moved
    }

    const fn column_mut(&mut self, id: ColumnId) -> &mut Column {
        match id {
            ColumnId::Todo => &mut self.todo,
            ColumnId::InProgress => &mut self.in_progress,
            ColumnId::Review => &mut self.review,
            ColumnId::Done => &mut self.done,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
