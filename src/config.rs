use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::storage::StorageConfig;

/// Errors that can occur while loading the audit configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Endpoint and credentials of the warehouse catalog session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the warehouse SQL gateway
    pub endpoint: String,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: Option<String>,
}

/// Relational store the snapshot is appended to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// MySQL connection string (e.g., "mysql://audit:secret@db:3306/metrics")
    pub dsn: String,

    /// Target table; its schema is owned by the operator
    #[serde(default = "default_snapshot_table")]
    pub table: String,
}

fn default_snapshot_table() -> String {
    "table_size_snapshot".to_string()
}

/// Database names that must never be traversed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlacklistConfig {
    #[serde(default)]
    pub databases: HashSet<String>,
}

/// Traversal tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditOptions {
    /// Cap on simultaneous catalog and filesystem calls. The default of 1
    /// reproduces a strictly sequential traversal.
    #[serde(default = "default_parallelism")]
    pub parallelism: usize,

    /// Retries on top of the first attempt for transient catalog and
    /// filesystem errors
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            parallelism: default_parallelism(),
            max_retries: default_max_retries(),
        }
    }
}

fn default_parallelism() -> usize {
    1
}

fn default_max_retries() -> usize {
    3
}

/// Immutable parameter bundle for one audit run.
///
/// Loaded once at process start and threaded through every component
/// explicitly; nothing reads configuration from process-wide state.
///
/// # Examples
///
/// ```
/// use warehouse_pulse::AuditConfig;
///
/// let config = AuditConfig::from_yaml(r#"
/// catalog:
///   endpoint: http://gateway:10099
///   username: audit
/// storage:
///   type: hdfs
///   options:
///     url: hdfs://warehouse-cluster:8020
/// snapshot:
///   dsn: mysql://audit:secret@db:3306/metrics
/// blacklist:
///   databases: [stg_stream, tmp]
/// audit:
///   parallelism: 8
/// "#).unwrap();
///
/// assert_eq!(config.audit.parallelism, 8);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    pub catalog: CatalogConfig,

    pub storage: StorageConfig,

    /// Absent means the run cannot be persisted (dry-run only)
    #[serde(default)]
    pub snapshot: Option<SnapshotConfig>,

    #[serde(default)]
    pub blacklist: BlacklistConfig,

    #[serde(default)]
    pub audit: AuditOptions,
}

impl AuditConfig {
    /// Parse a configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the YAML does not match the expected
    /// shape.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Load a configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read and
    /// `ConfigError::Parse` if its contents do not match the expected shape.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::config::StorageType;

    const FULL_CONFIG: &str = r#"
catalog:
  endpoint: http://gateway:10099
  username: audit
  password: secret
storage:
  type: hdfs
  options:
    url: hdfs://warehouse-cluster:8020
snapshot:
  dsn: mysql://audit:secret@db:3306/metrics
  table: warehouse_sizes
blacklist:
  databases:
    - stg_stream
    - tmp
audit:
  parallelism: 8
  max_retries: 5
"#;

    #[test]
    fn test_full_config() {
        let config = AuditConfig::from_yaml(FULL_CONFIG).unwrap();

        assert_eq!(config.catalog.endpoint, "http://gateway:10099");
        assert_eq!(config.catalog.username, "audit");
        assert_eq!(config.catalog.password.as_deref(), Some("secret"));
        assert_eq!(config.storage.storage_type, StorageType::Hdfs);
        assert_eq!(
            config.storage.get_option("url"),
            Some(&"hdfs://warehouse-cluster:8020".to_string())
        );

        let snapshot = config.snapshot.unwrap();
        assert_eq!(snapshot.dsn, "mysql://audit:secret@db:3306/metrics");
        assert_eq!(snapshot.table, "warehouse_sizes");

        assert!(config.blacklist.databases.contains("stg_stream"));
        assert!(config.blacklist.databases.contains("tmp"));
        assert_eq!(config.audit.parallelism, 8);
        assert_eq!(config.audit.max_retries, 5);
    }

    #[test]
    fn test_minimal_config_defaults() {
        let config = AuditConfig::from_yaml(
            r#"
catalog:
  endpoint: http://gateway:10099
storage:
  type: local
  options:
    path: /tmp/warehouse
"#,
        )
        .unwrap();

        assert!(config.catalog.username.is_empty());
        assert!(config.catalog.password.is_none());
        assert!(config.snapshot.is_none());
        assert!(config.blacklist.databases.is_empty());
        assert_eq!(config.audit.parallelism, 1);
        assert_eq!(config.audit.max_retries, 3);
    }

    #[test]
    fn test_snapshot_table_default() {
        let config = AuditConfig::from_yaml(
            r#"
catalog:
  endpoint: http://gateway:10099
storage:
  type: hdfs
  options:
    url: hdfs://nn1:8020
snapshot:
  dsn: mysql://audit@db:3306/metrics
"#,
        )
        .unwrap();

        assert_eq!(config.snapshot.unwrap().table, "table_size_snapshot");
    }

    #[test]
    fn test_invalid_yaml() {
        let result = AuditConfig::from_yaml("catalog: [not, a, mapping]");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = AuditConfig::from_yaml_file("/nonexistent/config.yaml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_from_yaml_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, FULL_CONFIG).unwrap();

        let config = AuditConfig::from_yaml_file(&path).unwrap();
        assert_eq!(config.catalog.endpoint, "http://gateway:10099");
    }
}
