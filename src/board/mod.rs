//! Task board state management.
//!
//! This module implements the board core: creating tasks into the intake
//! column, transferring tasks between columns (the drag-and-drop operation),
//! snapshotting board state for rendering, and the pure derived views built
//! on top of snapshots (sorted/filtered table rows and the all-tasks-done
//! completion signal). The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - The store and derived-view services in [`services`]

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
