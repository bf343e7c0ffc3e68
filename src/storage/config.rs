// Copyright 2022 Adobe. All rights reserved.
// This file is licensed to you under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License. You may obtain a copy
// of the License at http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under
// the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR REPRESENTATIONS
// OF ANY KIND, either express or implied. See the License for the specific language
// governing permissions and limitations under the License.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Filesystem backend type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    /// HDFS, addressed through a NameNode URL
    Hdfs,
    /// Local filesystem storage
    Local,
}

/// Generic configuration for filesystem backends
///
/// The configuration uses a HashMap for backend-specific options, which are
/// passed directly to the underlying store builders. This keeps the config
/// serializable as one block of the audit configuration file.
///
/// # Examples
///
/// ## HDFS
/// ```
/// use warehouse_pulse::storage::StorageConfig;
///
/// let config = StorageConfig::hdfs()
///     .with_option("url", "hdfs://warehouse-cluster:8020");
/// ```
///
/// ## Local filesystem
/// ```
/// use warehouse_pulse::storage::StorageConfig;
///
/// let config = StorageConfig::local()
///     .with_option("path", "/tmp/data");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Filesystem backend type
    #[serde(rename = "type")]
    pub storage_type: StorageType,

    /// Backend-specific configuration options
    ///
    /// HDFS:
    /// - url: NameNode URL (e.g., "hdfs://nn1:8020")
    ///
    /// Local:
    /// - path: Base path
    #[serde(default)]
    pub options: HashMap<String, String>,
}

impl StorageConfig {
    /// Create a new filesystem configuration.
    ///
    /// # Arguments
    ///
    /// * `storage_type` - The type of filesystem backend ("hdfs", "local")
    ///
    /// # Returns
    ///
    /// A new `StorageConfig` instance with no options set.
    pub fn new(storage_type: impl Into<String>) -> Self {
        let storage_type_str = storage_type.into();
        let storage_type = match storage_type_str.to_lowercase().as_str() {
            "hdfs" => StorageType::Hdfs,
            "local" => StorageType::Local,
            _ => panic!("Unknown storage type: {}", storage_type_str),
        };

        Self {
            storage_type,
            options: HashMap::new(),
        }
    }

    /// Create an HDFS filesystem configuration.
    pub fn hdfs() -> Self {
        Self {
            storage_type: StorageType::Hdfs,
            options: HashMap::new(),
        }
    }

    /// Create a local filesystem configuration.
    pub fn local() -> Self {
        Self {
            storage_type: StorageType::Local,
            options: HashMap::new(),
        }
    }

    /// Add a configuration option.
    ///
    /// # Arguments
    ///
    /// * `key` - The option key
    /// * `value` - The option value
    ///
    /// # Returns
    ///
    /// The `StorageConfig` instance with the added option (for method chaining).
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Add multiple configuration options.
    pub fn with_options(mut self, options: HashMap<String, String>) -> Self {
        self.options.extend(options);
        self
    }

    /// Get a configuration option.
    pub fn get_option(&self, key: &str) -> Option<&String> {
        self.options.get(key)
    }

    /// Get the storage type as a string.
    pub fn storage_type_str(&self) -> &str {
        match self.storage_type {
            StorageType::Hdfs => "hdfs",
            StorageType::Local => "local",
        }
    }
}
