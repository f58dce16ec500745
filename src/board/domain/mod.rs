//! Domain model for the task board.
//!
//! The board domain models a fixed set of workflow columns, the tasks they
//! own, and the two mutations the board supports: enqueueing a new task into
//! the intake column and transferring an existing task between columns. All
//! infrastructure concerns stay outside of the domain boundary.

mod board;
mod column;
mod error;
mod ids;
mod task;

pub use board::{Board, MoveOutcome};
pub use column::{Column, ColumnId};
pub use error::{BoardDomainError, ParseColumnIdError, ParsePriorityError};
pub use ids::TaskId;
pub use task::{Priority, Task, TaskDraft, TaskTitle};
