//! Unit tests for the board feature.

mod completion_tests;
mod helpers;
mod projection_tests;
