use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::info;

use super::store::{SnapshotResult, SnapshotStore};
use crate::audit::Snapshot;

/// MySQL-backed snapshot store.
///
/// Appends one row per entry inside a single transaction, so a run is either
/// fully persisted or not at all. Schema and migration of the target table
/// are the operator's responsibility; the expected shape is:
///
/// ```sql
/// CREATE TABLE table_size_snapshot (
///     db          VARCHAR(255) NOT NULL,
///     tbl         VARCHAR(255) NOT NULL,
///     location    TEXT         NOT NULL,
///     size_bytes  BIGINT       NOT NULL,
///     description TEXT         NOT NULL,
///     captured_on DATE         NOT NULL,
///     PRIMARY KEY (db, tbl, captured_on)
/// );
/// ```
pub struct MySqlSnapshotStore {
    pool: MySqlPool,
    table: String,
}

impl MySqlSnapshotStore {
    /// Connect to the store.
    ///
    /// # Arguments
    ///
    /// * `dsn` - MySQL connection string (e.g., "mysql://audit:secret@db:3306/metrics")
    /// * `table` - Target table name, taken from the run configuration
    ///
    /// # Errors
    ///
    /// Returns a `SnapshotError` if the pool cannot be established.
    pub async fn connect(dsn: &str, table: impl Into<String>) -> SnapshotResult<Self> {
        let pool = MySqlPoolOptions::new().max_connections(2).connect(dsn).await?;

        Ok(Self {
            pool,
            table: table.into(),
        })
    }

    fn insert_statement(&self) -> String {
        // The table name comes from the operator's own configuration, not
        // from warehouse data
        format!(
            "INSERT INTO {} (db, tbl, location, size_bytes, description, captured_on) \
             VALUES (?, ?, ?, ?, ?, ?)",
            self.table
        )
    }
}

#[async_trait]
impl SnapshotStore for MySqlSnapshotStore {
    async fn record(&self, snapshot: &Snapshot) -> SnapshotResult<()> {
        let statement = self.insert_statement();
        let mut tx = self.pool.begin().await?;

        for entry in &snapshot.entries {
            sqlx::query(&statement)
                .bind(&entry.database)
                .bind(&entry.table)
                .bind(&entry.location)
                .bind(entry.size_bytes)
                .bind(&entry.description)
                .bind(snapshot.captured_on)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        info!(
            "Recorded snapshot, rows={} captured_on={} table={}",
            snapshot.entries.len(),
            snapshot.captured_on,
            self.table
        );
        Ok(())
    }
}
