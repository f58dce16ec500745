//! Port contracts for the board core.
//!
//! Ports define framework-agnostic interfaces through which rendering
//! layers observe board state.

pub mod observer;

pub use observer::BoardObserver;
