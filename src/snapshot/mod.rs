//! Snapshot persistence boundary
//!
//! One audit run hands its entries here once, in bulk. The store appends one
//! row per entry keyed by `(db, tbl, captured_on)`; a failing write persists
//! nothing.

pub mod mem;
pub mod mysql;
pub mod store;

// Public exports
pub use mem::MemSnapshotStore;
pub use mysql::MySqlSnapshotStore;
pub use store::{SnapshotError, SnapshotResult, SnapshotStore};
