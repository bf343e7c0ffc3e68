use chrono::Local;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::audit::blacklist::BlacklistFilter;
use crate::audit::classify::{classify, PathClass};
use crate::audit::entry::{CatalogEntry, Snapshot};
use crate::audit::location::parse_location;
use crate::audit::size::SizeResolver;
use crate::catalog::{Catalog, CatalogError, RestCatalog};
use crate::config::AuditConfig;
use crate::storage::{StorageError, StorageProvider, StorageProviderFactory};
use crate::util::retry::RetryPolicy;

/// Fatal errors of an audit run.
///
/// Only database/table enumeration and session setup surface here; a
/// per-table failure becomes a failure-flavored [`CatalogEntry`] instead and
/// never aborts the run.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Catalog enumeration failed: {0}")]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Builder for constructing an [`Auditor`] instance.
///
/// The production sessions (SQL gateway, HDFS) are derived from the
/// configuration; tests and embedders can inject their own `Catalog` or
/// `StorageProvider` implementations instead.
///
/// # Examples
///
/// ```no_run
/// use warehouse_pulse::{AuditConfig, Auditor};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
/// let config = AuditConfig::from_yaml_file("config.yaml")?;
/// let auditor = Auditor::builder(config).build().await?;
/// let snapshot = auditor.run().await?;
/// # Ok(())
/// # }
/// ```
pub struct AuditorBuilder {
    config: AuditConfig,
    catalog: Option<Arc<dyn Catalog>>,
    storage: Option<Arc<dyn StorageProvider>>,
}

impl AuditorBuilder {
    /// Creates a new `AuditorBuilder` with the given configuration.
    pub fn new(config: AuditConfig) -> Self {
        Self {
            config,
            catalog: None,
            storage: None,
        }
    }

    /// Use a specific catalog session instead of the configured SQL gateway.
    pub fn with_catalog(mut self, catalog: Arc<dyn Catalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Use a specific filesystem session instead of the configured backend.
    pub fn with_storage(mut self, storage: Arc<dyn StorageProvider>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Builds the `Auditor` instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog endpoint is invalid or the filesystem
    /// backend cannot be initialized.
    pub async fn build(self) -> Result<Auditor, AuditError> {
        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => Arc::new(RestCatalog::new(
                &self.config.catalog.endpoint,
                &self.config.catalog.username,
                self.config.catalog.password.as_deref(),
            )?),
        };

        let storage = match self.storage {
            Some(storage) => storage,
            None => StorageProviderFactory::from_config(self.config.storage.clone()).await?,
        };

        // Fail at build time rather than mid-walk if the filesystem session
        // is unusable
        storage.validate_connection().await?;

        let retry = RetryPolicy::new(self.config.audit.max_retries);

        Ok(Auditor {
            catalog,
            blacklist: BlacklistFilter::new(self.config.blacklist.databases.clone()),
            sizes: SizeResolver::new(storage, retry),
            retry,
            parallelism: self.config.audit.parallelism.max(1),
        })
    }
}

/// Walks the warehouse catalog and produces one audit snapshot.
///
/// One run lists every database, skips the blacklisted ones, lists every
/// table, resolves each table's storage location out of its schema-definition
/// text, measures measurable locations, and collects exactly one
/// [`CatalogEntry`] per table, in catalog listing order, with per-table
/// failures recorded in place rather than aborting the walk.
///
/// Tables are resolved through a bounded worker pool: up to `parallelism`
/// `(database, table)` items are in flight at once, each performing at most
/// one catalog or filesystem call at a time, so neither service sees more
/// than `parallelism` simultaneous requests.
pub struct Auditor {
    catalog: Arc<dyn Catalog>,
    blacklist: BlacklistFilter,
    sizes: SizeResolver,
    retry: RetryPolicy,
    parallelism: usize,
}

impl Auditor {
    /// Creates a new [`AuditorBuilder`] for constructing an `Auditor`.
    pub fn builder(config: AuditConfig) -> AuditorBuilder {
        AuditorBuilder::new(config)
    }

    /// Execute one full audit run.
    ///
    /// # Returns
    ///
    /// A [`Snapshot`] holding the run's capture date and one entry per
    /// enumerated non-blacklisted table, ordered as the catalog listed them.
    ///
    /// # Errors
    ///
    /// Fails with [`AuditError::Catalog`] when database or table enumeration
    /// itself errors. Nothing is returned in that case; there is no partial
    /// snapshot.
    pub async fn run(&self) -> Result<Snapshot, AuditError> {
        // One capture date for the whole run, normalized to the calendar day
        // the run started
        let captured_on = Local::now().date_naive();
        info!("Starting audit run, captured_on={}", captured_on);

        let databases = self
            .retry
            .retry("list_databases", || self.catalog.list_databases())
            .await?;
        info!("Listed databases, count={}", databases.len());

        let mut work = Vec::new();
        for database in databases {
            if self.blacklist.is_excluded(&database) {
                info!("Skipping blacklisted database={}", database);
                continue;
            }

            let tables = self
                .retry
                .retry("list_tables", || self.catalog.list_tables(&database))
                .await?;
            info!("Listed tables, database={} count={}", database, tables.len());

            for table in tables {
                work.push((database.clone(), table));
            }
        }

        // buffered (not buffer_unordered) keeps the output in listing order
        // while capping in-flight work
        let entries: Vec<CatalogEntry> = stream::iter(work)
            .map(|(database, table)| self.audit_table(database, table))
            .buffered(self.parallelism)
            .collect()
            .await;

        let failures = entries.iter().filter(|e| e.is_failure()).count();
        info!(
            "Audit run complete, entries={} failures={}",
            entries.len(),
            failures
        );

        Ok(Snapshot {
            captured_on,
            entries,
        })
    }

    /// Resolve one table to its entry. Infallible by design: every error
    /// becomes a failure-flavored entry.
    async fn audit_table(&self, database: String, table: String) -> CatalogEntry {
        let lines = match self
            .retry
            .retry("describe_table", || {
                self.catalog.describe_table(&database, &table)
            })
            .await
        {
            Ok(lines) => lines,
            Err(e) => {
                warn!("Describe failed, table={}.{}: {}", database, table, e);
                return CatalogEntry::failed(database, table, e.to_string());
            }
        };

        let location = match parse_location(&lines) {
            Ok(location) => location,
            Err(e) => {
                warn!("No location, table={}.{}: {}", database, table, e);
                return CatalogEntry::failed(database, table, e.to_string());
            }
        };

        let mut entry = CatalogEntry::resolved(database, table, location);

        match classify(&entry.location) {
            PathClass::Measurable => match self.sizes.resolve_size(&entry.location).await {
                Ok(size) => entry.set_size(size),
                Err(e) => {
                    // The location is still worth recording; only the size is lost
                    warn!(
                        "Size query failed, table={}.{} location={}: {}",
                        entry.database, entry.table, entry.location, e
                    );
                    entry.mark_size_failure(e.to_string());
                }
            },
            PathClass::Unmeasurable => {
                // Not on the distributed filesystem; size stays at the zero
                // value, distinct from the failure sentinel
            }
        }

        entry
    }
}
