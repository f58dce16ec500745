//! Trellis: in-memory task board core for a project-management dashboard.
//!
//! This crate provides the state-management heart of a kanban-style task
//! board: a fixed four-column board holding task records, a store that is
//! the sole mutator of board state, and pure read-only projections used by
//! table and completion views.
//!
//! # Architecture
//!
//! Trellis follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board/task types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for outward notifications
//! - **Services**: The board store and the derived-view functions
//!
//! Rendering layers consume the store through its snapshot accessors and the
//! observer port; they never mutate board state directly.
//!
//! # Modules
//!
//! - [`board`]: Columns, tasks, the board store, and derived views

pub mod board;
