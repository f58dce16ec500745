//! Workflow columns and their fixed identifier set.

use super::{ParseColumnIdError, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a workflow column.
///
/// The set is closed and established at board construction; columns are
/// never added or removed at runtime, so an unknown column cannot be
/// expressed in the typed API. The parse error exists only for the string
/// boundary (serialised snapshots, UI route parameters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnId {
    /// Intake column for newly created tasks.
    Todo,
    /// Work has started.
    InProgress,
    /// Awaiting review.
    Review,
    /// Terminal column; work is finished.
    Done,
}

impl ColumnId {
    /// All columns in fixed board order.
    pub const ALL: [Self; 4] = [Self::Todo, Self::InProgress, Self::Review, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inprogress",
            Self::Review => "review",
            Self::Done => "done",
        }
    }

    /// Returns the human-readable column title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Done => "Done",
        }
    }

    /// Returns true for the terminal column.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl TryFrom<&str> for ColumnId {
    type Error = ParseColumnIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "inprogress" => Ok(Self::InProgress),
            "review" => Ok(Self::Review),
            "done" => Ok(Self::Done),
            _ => Err(ParseColumnIdError(value.to_owned())),
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered bucket of tasks representing one workflow stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    tasks: Vec<Task>,
}

impl Column {
    /// Creates an empty column.
    #[must_use]
    pub(crate) const fn new(id: ColumnId) -> Self {
        Self {
            id,
            tasks: Vec::new(),
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> ColumnId {
        self.id
    }

    /// Returns the human-readable column title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.id.title()
    }

    /// Returns the tasks in column order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true when the column holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns true when the column holds the given task.
    #[must_use]
    pub fn contains(&self, task_id: TaskId) -> bool {
        self.tasks.iter().any(|task| task.id() == task_id)
    }

    /// Appends a task to the end of the column.
    pub(crate) fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Removes and returns the task with the given identifier, preserving
    /// the relative order of the remaining tasks.
    pub(crate) fn take(&mut self, task_id: TaskId) -> Option<Task> {
        let position = self.tasks.iter().position(|task| task.id() == task_id)?;
        Some(self.tasks.remove(position))
    }
}
