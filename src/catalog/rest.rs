use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::error::{CatalogError, CatalogResult};
use super::session::Catalog;

/// Default timeout for a single statement round trip.
const STATEMENT_TIMEOUT: Duration = Duration::from_secs(300);

/// Catalog session over the warehouse's SQL-gateway REST API.
///
/// The gateway accepts a SQL statement via `POST <endpoint>/v1/statements`
/// and answers with the complete result set as JSON rows. Statements are
/// stateless, so table listings are issued as `SHOW TABLES IN <db>` rather
/// than `USE <db>` plus `SHOW TABLES`.
///
/// # Examples
///
/// ```no_run
/// use warehouse_pulse::catalog::{Catalog, RestCatalog};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
/// let catalog = RestCatalog::new("http://gateway:10099", "audit", Some("secret"))?;
/// let databases = catalog.list_databases().await?;
/// # Ok(())
/// # }
/// ```
pub struct RestCatalog {
    client: reqwest::Client,
    endpoint: Url,
    username: String,
    password: Option<String>,
}

#[derive(Serialize)]
struct StatementRequest<'a> {
    statement: &'a str,
}

#[derive(Deserialize)]
struct StatementResponse {
    #[serde(default)]
    rows: Vec<Vec<serde_json::Value>>,

    /// Statement-level failure reported inside a 200 response
    #[serde(default)]
    error: Option<String>,
}

impl RestCatalog {
    /// Create a session against a SQL gateway.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Base URL of the gateway (e.g., "http://gateway:10099")
    /// * `username` - Account the statements run as
    /// * `password` - Optional password for basic auth
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Endpoint` if the endpoint is not a valid URL,
    /// or `CatalogError::Transport` if the HTTP client cannot be built.
    pub fn new(
        endpoint: &str,
        username: &str,
        password: Option<&str>,
    ) -> CatalogResult<Self> {
        // A missing trailing slash would make Url::join replace the last path segment
        let endpoint = Url::parse(&format!("{}/", endpoint.trim_end_matches('/')))?;
        let client = reqwest::Client::builder()
            .timeout(STATEMENT_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            username: username.to_string(),
            password: password.map(str::to_string),
        })
    }

    /// Run a statement and return the first column of every result row.
    ///
    /// All three audit queries (`SHOW DATABASES`, `SHOW TABLES IN`,
    /// `SHOW CREATE TABLE`) are single-column result sets, so the flattening
    /// is lossless.
    async fn execute(&self, statement: &str) -> CatalogResult<Vec<String>> {
        debug!("Executing statement={}", statement);

        let url = self.endpoint.join("v1/statements")?;
        let response = self
            .client
            .post(url)
            .basic_auth(&self.username, self.password.as_deref())
            .json(&StatementRequest { statement })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());
            return Err(CatalogError::Query {
                statement: statement.to_string(),
                message,
            });
        }

        let body: StatementResponse = response.json().await?;
        if let Some(message) = body.error {
            return Err(CatalogError::Query {
                statement: statement.to_string(),
                message,
            });
        }

        Ok(body.rows.into_iter().map(first_column).collect())
    }
}

/// Render the first column of a result row as a line of text.
fn first_column(row: Vec<serde_json::Value>) -> String {
    match row.into_iter().next() {
        Some(serde_json::Value::String(s)) => s,
        Some(value) => value.to_string(),
        None => String::new(),
    }
}

#[async_trait]
impl Catalog for RestCatalog {
    async fn list_databases(&self) -> CatalogResult<Vec<String>> {
        self.execute("SHOW DATABASES").await
    }

    async fn list_tables(&self, database: &str) -> CatalogResult<Vec<String>> {
        self.execute(&format!("SHOW TABLES IN {}", database)).await
    }

    async fn describe_table(&self, database: &str, table: &str) -> CatalogResult<Vec<String>> {
        self.execute(&format!("SHOW CREATE TABLE {}.{}", database, table))
            .await
    }
}
