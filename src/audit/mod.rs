//! Catalog traversal and size resolution
//!
//! The walker drives everything: it lists databases, skips the blacklisted
//! ones, lists tables, parses each table's storage location out of its
//! schema-definition text, classifies the location, measures the measurable
//! ones, and collects one [`entry::CatalogEntry`] per table (success or
//! recorded failure) into an ordered [`entry::Snapshot`].

pub mod audit;
pub mod blacklist;
pub mod classify;
pub mod entry;
pub mod location;
pub mod size;

pub use audit::{AuditError, Auditor, AuditorBuilder};
pub use entry::{CatalogEntry, Snapshot};
