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

//! # Warehouse Pulse
//!
//! A Rust library for auditing the storage footprint of metastore-backed SQL
//! warehouses.
//!
//! Warehouse Pulse walks every database and table the warehouse catalog
//! knows about, resolves each table's physical storage location out of its
//! `SHOW CREATE TABLE` text, measures the bytes the location occupies on the
//! distributed filesystem, and persists a dated snapshot of the results to a
//! relational store for trend analysis.
//!
//! ## Features
//!
//! - **Full catalog traversal**: every database and table, with configurable
//!   database blacklisting
//! - **Partial-failure semantics**: one table failing to describe, parse, or
//!   measure never aborts the run; the failure is recorded in its entry
//! - **Bounded concurrency**: tables resolve through a worker pool that caps
//!   simultaneous catalog and filesystem calls while preserving listing order
//! - **Pluggable sessions**: catalog, filesystem, and snapshot store are
//!   traits; production wires a SQL-gateway REST client, HDFS via
//!   `object_store`, and MySQL via `sqlx`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use warehouse_pulse::{AuditConfig, Auditor};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! // Load the immutable run configuration
//! let config = AuditConfig::from_yaml_file("config.yaml")?;
//!
//! // Build the auditor (catalog session + filesystem session)
//! let auditor = Auditor::builder(config).build().await?;
//!
//! // Walk the catalog; one entry per table, failures recorded in place
//! let snapshot = auditor.run().await?;
//!
//! for entry in &snapshot.entries {
//!     println!("{}", entry);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Persisting a run
//!
//! ```rust,no_run
//! use warehouse_pulse::snapshot::{MySqlSnapshotStore, SnapshotStore};
//! use warehouse_pulse::{AuditConfig, Auditor};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let config = AuditConfig::from_yaml_file("config.yaml")?;
//! let snapshot_config = config.snapshot.clone().expect("snapshot section");
//!
//! let auditor = Auditor::builder(config).build().await?;
//! let snapshot = auditor.run().await?;
//!
//! let store =
//!     MySqlSnapshotStore::connect(&snapshot_config.dsn, snapshot_config.table).await?;
//! store.record(&snapshot).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`audit`] - Catalog traversal, location parsing, classification, size resolution
//! - [`catalog`] - Warehouse catalog session (SQL-gateway REST client)
//! - [`storage`] - Distributed filesystem abstraction layer
//! - [`snapshot`] - Snapshot persistence boundary
//! - [`config`] - Immutable run configuration
//! - [`util`] - Retry policy and helpers

pub mod audit;
pub mod catalog;
pub mod config;
pub mod snapshot;
pub mod storage;
pub mod util;

// Re-export commonly used types
pub use audit::{AuditError, Auditor, CatalogEntry, Snapshot};
pub use config::AuditConfig;
pub use storage::StorageConfig;
