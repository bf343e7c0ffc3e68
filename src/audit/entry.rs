// Copyright 2025 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.
//
// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Sentinel size for "no path or size could not be determined".
///
/// Coupled to a non-empty description: an entry carries -1 if and only if it
/// records a failure. An unmeasurable location (anything that is not on the
/// distributed filesystem) keeps the zero value instead; that is a different
/// condition than a measurement failure.
pub const SIZE_UNKNOWN: i64 = -1;

/// One table's audit result.
///
/// Exactly one entry exists per enumerated table of a run, success or not. A
/// failed table keeps its identity and records the reason instead of data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Database the table lives in
    pub database: String,

    /// Table name, unique together with `database` for a given run date
    pub table: String,

    /// Resolved storage path, empty if resolution failed
    pub location: String,

    /// Cumulative bytes under the location; [`SIZE_UNKNOWN`] on failure, 0
    /// when the location is not measurable
    pub size_bytes: i64,

    /// Empty on success, otherwise the failure reason
    pub description: String,
}

impl CatalogEntry {
    /// Entry for a table whose location was resolved.
    ///
    /// Size starts at the zero value; [`CatalogEntry::set_size`] or
    /// [`CatalogEntry::mark_size_failure`] backfill it before the entry is
    /// considered final.
    pub fn resolved(
        database: impl Into<String>,
        table: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            database: database.into(),
            table: table.into(),
            location: location.into(),
            size_bytes: 0,
            description: String::new(),
        }
    }

    /// Entry for a table that failed before a location could be resolved.
    pub fn failed(
        database: impl Into<String>,
        table: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            database: database.into(),
            table: table.into(),
            location: String::new(),
            size_bytes: SIZE_UNKNOWN,
            description: description.into(),
        }
    }

    /// Backfill a measured size.
    pub fn set_size(&mut self, size_bytes: u64) {
        self.size_bytes = size_bytes as i64;
    }

    /// Backfill a size-measurement failure, keeping the resolved location.
    pub fn mark_size_failure(&mut self, description: impl Into<String>) {
        self.size_bytes = SIZE_UNKNOWN;
        self.description = description.into();
    }

    /// Whether this entry records a failure.
    pub fn is_failure(&self) -> bool {
        !self.description.is_empty()
    }
}

impl Display for CatalogEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "Database: {}\nTable: {}\nLocation: {}\nSize: {} bytes\nDescription: {}",
            self.database, self.table, self.location, self.size_bytes, self.description
        )
    }
}

/// The complete output of one audit run.
///
/// Every entry shares the single `captured_on` date, taken once when the run
/// started and normalized to a calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Calendar date the run executed
    pub captured_on: NaiveDate,

    /// Per-table results, in catalog listing order
    pub entries: Vec<CatalogEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_entry() {
        let entry = CatalogEntry::resolved("ods", "t1", "hdfs://cluster/warehouse/ods.db/t1");

        assert_eq!(entry.database, "ods");
        assert_eq!(entry.table, "t1");
        assert_eq!(entry.location, "hdfs://cluster/warehouse/ods.db/t1");
        assert_eq!(entry.size_bytes, 0);
        assert!(entry.description.is_empty());
        assert!(!entry.is_failure());
    }

    #[test]
    fn test_failed_entry() {
        let entry = CatalogEntry::failed("ods", "t2", "describe failed: gateway unreachable");

        assert_eq!(entry.location, "");
        assert_eq!(entry.size_bytes, SIZE_UNKNOWN);
        assert_eq!(entry.description, "describe failed: gateway unreachable");
        assert!(entry.is_failure());
    }

    #[test]
    fn test_set_size() {
        let mut entry = CatalogEntry::resolved("ods", "t1", "hdfs://cluster/warehouse/ods.db/t1");
        entry.set_size(1024);

        assert_eq!(entry.size_bytes, 1024);
        assert!(!entry.is_failure());
    }

    #[test]
    fn test_mark_size_failure_keeps_location() {
        let mut entry = CatalogEntry::resolved("ods", "t1", "hdfs://cluster/warehouse/ods.db/t1");
        entry.mark_size_failure("permission denied");

        assert_eq!(entry.location, "hdfs://cluster/warehouse/ods.db/t1");
        assert_eq!(entry.size_bytes, SIZE_UNKNOWN);
        assert!(entry.is_failure());
    }

    #[test]
    fn test_sentinel_couples_with_description() {
        // size_bytes == -1 iff description != ""
        let success = {
            let mut e = CatalogEntry::resolved("ods", "t1", "hdfs://c/warehouse/ods.db/t1");
            e.set_size(42);
            e
        };
        let unmeasured = CatalogEntry::resolved("ods", "t2", "/local/path");
        let failed = CatalogEntry::failed("ods", "t3", "boom");

        for entry in [&success, &unmeasured, &failed] {
            assert_eq!(
                entry.size_bytes == SIZE_UNKNOWN,
                !entry.description.is_empty(),
                "sentinel/description coupling violated for {:?}",
                entry
            );
        }
    }

    #[test]
    fn test_display() {
        let mut entry = CatalogEntry::resolved("ods", "t1", "hdfs://cluster/warehouse/ods.db/t1");
        entry.set_size(1024);

        let rendered = entry.to_string();
        assert!(rendered.contains("Database: ods"));
        assert!(rendered.contains("Table: t1"));
        assert!(rendered.contains("Size: 1024 bytes"));
    }

    #[test]
    fn test_entry_serialization_round_trip() {
        let entry = CatalogEntry::failed("ods", "t2", "have no location");
        let json = serde_json::to_string(&entry).unwrap();
        let back: CatalogEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(entry, back);
    }

    #[test]
    fn test_snapshot_shares_one_date() {
        let captured_on = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let snapshot = Snapshot {
            captured_on,
            entries: vec![
                CatalogEntry::resolved("ods", "t1", "hdfs://c/warehouse/ods.db/t1"),
                CatalogEntry::failed("ods", "t2", "boom"),
            ],
        };

        assert_eq!(snapshot.captured_on, captured_on);
        assert_eq!(snapshot.entries.len(), 2);
    }
}
