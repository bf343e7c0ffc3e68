use async_trait::async_trait;
use std::sync::Mutex;

use super::store::{SnapshotResult, SnapshotStore};
use crate::audit::Snapshot;

/// In-memory snapshot store.
///
/// Holds recorded snapshots in a `Vec`; used by tests and dry runs that want
/// the persistence path exercised without a database.
#[derive(Default)]
pub struct MemSnapshotStore {
    snapshots: Mutex<Vec<Snapshot>>,
}

impl MemSnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All snapshots recorded so far, oldest first.
    pub fn snapshots(&self) -> Vec<Snapshot> {
        self.snapshots
            .lock()
            .expect("mem snapshot store lock poisoned")
            .clone()
    }
}

#[async_trait]
impl SnapshotStore for MemSnapshotStore {
    async fn record(&self, snapshot: &Snapshot) -> SnapshotResult<()> {
        self.snapshots
            .lock()
            .expect("mem snapshot store lock poisoned")
            .push(snapshot.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::CatalogEntry;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_record_keeps_entries_and_date() {
        let store = MemSnapshotStore::new();
        let snapshot = Snapshot {
            captured_on: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            entries: vec![
                CatalogEntry::resolved("ods", "t1", "hdfs://c/warehouse/ods.db/t1"),
                CatalogEntry::failed("ods", "t2", "boom"),
            ],
        };

        store.record(&snapshot).await.unwrap();

        let recorded = store.snapshots();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].captured_on, snapshot.captured_on);
        assert_eq!(recorded[0].entries.len(), 2);
    }

    #[tokio::test]
    async fn test_record_appends_runs_in_order() {
        let store = MemSnapshotStore::new();

        for day in 1..=3 {
            let snapshot = Snapshot {
                captured_on: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
                entries: vec![],
            };
            store.record(&snapshot).await.unwrap();
        }

        let recorded = store.snapshots();
        assert_eq!(recorded.len(), 3);
        assert_eq!(
            recorded[0].captured_on,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert_eq!(
            recorded[2].captured_on,
            NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
        );
    }
}
