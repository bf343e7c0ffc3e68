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

use super::config::{StorageConfig, StorageType};
use super::error::{StorageError, StorageResult};
use super::provider::{string_to_path, FileMetadata, StorageProvider};
use async_trait::async_trait;
use futures::stream::StreamExt;
use hdfs_native_object_store::HdfsObjectStore;
use object_store::{local::LocalFileSystem, ObjectStore};
use std::fmt::{Debug, Formatter};
use std::path::PathBuf;
use std::sync::Arc;

/// Generic filesystem backend that works with any object_store implementation
pub struct ObjectStoreProvider {
    pub config: StorageConfig,
    pub store: Arc<dyn ObjectStore>,
    pub base_path: String,
}

impl ObjectStoreProvider {
    /// Create a new filesystem backend from configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Filesystem configuration specifying the backend type and options
    ///
    /// # Returns
    ///
    /// A `Result` containing:
    /// * `Ok(ObjectStoreProvider)` - A configured backend ready to use
    /// * `Err(StorageError)` - If the backend cannot be initialized
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// * The filesystem configuration is invalid
    /// * Required configuration options are missing
    /// * The backend cannot be created (e.g., invalid NameNode URL)
    pub async fn new(config: StorageConfig) -> StorageResult<Self> {
        let (store, base_path) = Self::build_store(&config)?;

        Ok(Self {
            config,
            store: Arc::from(store),
            base_path,
        })
    }

    /// Build the appropriate object store based on configuration.
    fn build_store(config: &StorageConfig) -> StorageResult<(Box<dyn ObjectStore>, String)> {
        match config.storage_type {
            StorageType::Hdfs => Self::build_hdfs_store(config),
            StorageType::Local => Self::build_local_store(config),
        }
    }

    /// Build an HDFS store.
    ///
    /// # Arguments
    ///
    /// * `config` - Filesystem configuration with HDFS options (url)
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// * The 'url' option is missing from configuration
    /// * The HDFS store cannot be initialized (e.g., invalid URL)
    fn build_hdfs_store(config: &StorageConfig) -> StorageResult<(Box<dyn ObjectStore>, String)> {
        let url = config.options.get("url").ok_or_else(|| {
            StorageError::ConfigError("HDFS storage requires 'url' option".to_string())
        })?;

        let store = HdfsObjectStore::with_url(url).map_err(|e| {
            StorageError::ConfigError(format!("Failed to create HDFS store: {}", e))
        })?;

        Ok((Box::new(store), url.clone()))
    }

    /// Build a local filesystem store.
    ///
    /// # Arguments
    ///
    /// * `config` - Filesystem configuration with 'path' option specifying the local directory
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// * The 'path' option is missing from configuration
    /// * The path cannot be canonicalized (doesn't exist or permission denied)
    /// * The path is not a directory
    fn build_local_store(config: &StorageConfig) -> StorageResult<(Box<dyn ObjectStore>, String)> {
        let path = config.options.get("path").ok_or_else(|| {
            StorageError::ConfigError("Local storage requires 'path' option".to_string())
        })?;
        let base_path = PathBuf::from(path);

        // Canonicalize the path (handles both relative and absolute paths, resolves symlinks)
        let canonical_path = base_path.canonicalize().map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to resolve path '{}': {} (path must exist)",
                path, e
            ))
        })?;

        if !canonical_path.is_dir() {
            return Err(StorageError::ConfigError(format!(
                "Base path is not a directory: {}",
                canonical_path.display()
            )));
        }

        let store = LocalFileSystem::new_with_prefix(&canonical_path).map_err(|e| {
            StorageError::ConfigError(format!("Failed to create local store: {}", e))
        })?;

        let base_path_str = canonical_path.to_string_lossy().to_string();
        Ok((Box::new(store), base_path_str))
    }
}

#[async_trait]
impl StorageProvider for ObjectStoreProvider {
    fn base_path(&self) -> &str {
        &self.base_path
    }

    async fn validate_connection(&self) -> StorageResult<()> {
        // For the local filesystem, check that the base path is still accessible
        if self.config.storage_type == StorageType::Local {
            let path = PathBuf::from(&self.base_path);
            return if path.exists() && path.is_dir() {
                Ok(())
            } else {
                Err(StorageError::ConnectionError(format!(
                    "Base path is not accessible: {}",
                    self.base_path
                )))
            };
        }

        // For HDFS, list the root to validate the NameNode connection
        self.store.list_with_delimiter(None).await?;
        Ok(())
    }

    async fn list_files(&self, path: &str, recursive: bool) -> StorageResult<Vec<FileMetadata>> {
        let object_path = if path.is_empty() {
            None
        } else {
            Some(string_to_path(path))
        };

        let mut files = Vec::new();

        if recursive {
            let mut stream = self.store.list(object_path.as_ref());

            while let Some(meta) = stream.next().await {
                let meta = meta?;
                files.push(FileMetadata {
                    path: meta.location.to_string(),
                    size: meta.size,
                    last_modified: Some(meta.last_modified),
                });
            }
        } else {
            let list_result = self.store.list_with_delimiter(object_path.as_ref()).await?;

            for meta in list_result.objects {
                files.push(FileMetadata {
                    path: meta.location.to_string(),
                    size: meta.size,
                    last_modified: Some(meta.last_modified),
                });
            }
        }

        Ok(files)
    }
}

impl Debug for ObjectStoreProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "StorageProvider(type={}, base_path={})",
            self.config.storage_type_str(),
            self.base_path
        )
    }
}
