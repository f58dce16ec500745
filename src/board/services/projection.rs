//! Sorted/filtered table projection over a board snapshot.
//!
//! The projection is a pure function: it flattens the board's columns into
//! one row sequence, tags every row with its owning column's title, applies
//! an optional status filter, and stable-sorts by the chosen key. The board
//! itself is never mutated.

use crate::board::domain::{Board, ColumnId, Task};
use serde::Serialize;
use std::cmp::Ordering;

/// One row of the table view: a task annotated with the display title of
/// the column that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// Display title of the owning column.
    pub status: &'static str,
    /// The projected task record.
    #[serde(flatten)]
    pub task: Task,
}

/// Status filter for the table view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Keep every task.
    #[default]
    All,
    /// Keep only tasks owned by the given column.
    Column(ColumnId),
}

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Sort by task title.
    Title,
    /// Sort by priority label (lexical, matching the rendered text).
    Priority,
    /// Sort by assignee name.
    Assignee,
    /// Sort by due date (chronological; undated tasks first).
    DueDate,
    /// Sort by owning column title.
    Status,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Natural comparator order.
    #[default]
    Ascending,
    /// Reversed comparator order; ties keep their original relative order.
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Sort selection for the table view, owned by the presentation layer.
///
/// Selecting a new key resets the direction to ascending; selecting the
/// current key again flips the direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    key: Option<SortKey>,
    direction: SortDirection,
}

impl SortState {
    /// Unsorted state: rows stay in board order.
    pub const UNSORTED: Self = Self {
        key: None,
        direction: SortDirection::Ascending,
    };

    /// Creates a sort state for the given key and direction.
    #[must_use]
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }

    /// Returns the active sort key, if any.
    #[must_use]
    pub const fn key(self) -> Option<SortKey> {
        self.key
    }

    /// Returns the active sort direction.
    #[must_use]
    pub const fn direction(self) -> SortDirection {
        self.direction
    }

    /// Applies a header click: a repeated key flips the direction, a new
    /// key starts ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == Some(key) {
            self.direction = self.direction.flipped();
        } else {
            self.key = Some(key);
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Projects a board snapshot into table rows.
///
/// Columns are flattened in fixed board order with tasks in column order,
/// the filter is applied, and the result is stable-sorted when a sort key
/// is active. Descending order is a stable sort under the reversed
/// comparator, so equal keys retain their original relative order in both
/// directions.
#[must_use]
pub fn project(board: &Board, filter: StatusFilter, sort: SortState) -> Vec<TableRow> {
    let mut rows: Vec<TableRow> = board
        .columns()
        .into_iter()
        .filter(|column| match filter {
            StatusFilter::All => true,
            StatusFilter::Column(id) => column.id() == id,
        })
        .flat_map(|column| {
            column.tasks().iter().cloned().map(|task| TableRow {
                status: column.title(),
                task,
            })
        })
        .collect();

    if let Some(key) = sort.key() {
        rows.sort_by(|a, b| {
            let ordering = compare(a, b, key);
            match sort.direction() {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
    rows
}

/// Compares two rows on the chosen key.
///
/// Text keys compare lexically, matching the rendered cell text. Due dates
/// compare as calendar dates, which coincides with lexical ISO-8601 order
/// for dated tasks; undated tasks sort first.
fn compare(a: &TableRow, b: &TableRow, key: SortKey) -> Ordering {
    match key {
        SortKey::Title => a.task.title().as_str().cmp(b.task.title().as_str()),
        SortKey::Priority => a.task.priority().as_str().cmp(b.task.priority().as_str()),
        SortKey::Assignee => a.task.assignee().cmp(b.task.assignee()),
        SortKey::DueDate => a.task.due_date().cmp(&b.task.due_date()),
        SortKey::Status => a.status.cmp(b.status),
    }
}
