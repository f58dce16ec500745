//! Board store and derived-view services.

mod completion;
mod projection;
mod store;

pub use completion::{CompletionLatch, is_fully_complete};
pub use projection::{SortDirection, SortKey, SortState, StatusFilter, TableRow, project};
pub use store::BoardStore;
