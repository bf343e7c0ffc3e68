use async_trait::async_trait;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use super::error::CatalogResult;

/// Session against the warehouse catalog service.
///
/// The catalog owns database and table definitions and can describe a
/// table's structure and storage properties. The audit only needs three
/// read-only operations, so the trait stays that narrow; anything that can
/// answer these three questions (a SQL gateway, a metastore proxy, an
/// in-memory fixture in tests) can drive a run.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// List the names of all databases in the warehouse.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the catalog is unreachable or rejects the
    /// query. The walker treats this as fatal: without the database list
    /// there is nothing to audit.
    async fn list_databases(&self) -> CatalogResult<Vec<String>>;

    /// List the names of all tables in a database.
    ///
    /// # Arguments
    ///
    /// * `database` - Database name as returned by [`Catalog::list_databases`]
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the catalog is unreachable or rejects the
    /// query.
    async fn list_tables(&self, database: &str) -> CatalogResult<Vec<String>>;

    /// Fetch the schema-definition text for a table, as a sequence of lines.
    ///
    /// The response is the warehouse's `SHOW CREATE TABLE` output with one
    /// result row per line; the storage location is parsed out of it by the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the catalog is unreachable or rejects the
    /// query. Callers treat this as a per-table failure, not a fatal one.
    async fn describe_table(&self, database: &str, table: &str) -> CatalogResult<Vec<String>>;
}

impl Debug for dyn Catalog {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Catalog")
    }
}
