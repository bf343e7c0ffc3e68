use std::sync::Arc;

use super::config::StorageConfig;
use super::error::StorageResult;
use super::object_store::ObjectStoreProvider;
use super::provider::StorageProvider;

/// Factory for creating filesystem backends
pub struct StorageProviderFactory;

impl StorageProviderFactory {
    /// Create a filesystem backend from a configuration.
    ///
    /// This factory creates a generic provider that works with any supported
    /// object_store backend (HDFS or the local filesystem).
    ///
    /// # Arguments
    ///
    /// * `config` - The filesystem configuration specifying the backend type and options
    ///
    /// # Returns
    ///
    /// A `Result` containing:
    /// * `Ok(Arc<dyn StorageProvider>)` - A thread-safe reference to the initialized backend
    /// * `Err(StorageError)` - If the backend cannot be created
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// * The filesystem configuration is invalid
    /// * Required configuration options are missing
    /// * The backend cannot be initialized
    pub async fn from_config(config: StorageConfig) -> StorageResult<Arc<dyn StorageProvider>> {
        let provider = ObjectStoreProvider::new(config).await?;
        Ok(Arc::new(provider))
    }
}
