use async_trait::async_trait;
use thiserror::Error;

use crate::audit::Snapshot;

/// Errors that can occur while persisting a snapshot
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for snapshot persistence
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Durable store for audit snapshots.
///
/// A store appends one row per entry, stamped with the run's capture date.
/// The write is all-or-nothing: a failing store must not leave a partial
/// run behind.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Append every entry of `snapshot`, stamped with its capture date.
    ///
    /// # Errors
    ///
    /// Returns a `SnapshotError` if the write fails; in that case none of the
    /// run's rows are persisted.
    async fn record(&self, snapshot: &Snapshot) -> SnapshotResult<()>;
}
