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

use std::sync::Arc;
use tracing::debug;

use crate::audit::classify::HDFS_SCHEME;
use crate::storage::{StorageError, StorageProvider, StorageResult};
use crate::util::retry::RetryPolicy;

/// Derive the filesystem path of a measurable location.
///
/// The location embeds the scheme and the cluster authority
/// (`hdfs://clusterA/warehouse/db.db/t`); the filesystem session wants an
/// absolute path rooted at `/`. Everything after the scheme token is taken,
/// the first segment (the authority) is dropped, and the remainder is
/// re-rooted under `/` with a trailing `/`:
///
/// ```
/// use warehouse_pulse::audit::size::warehouse_path;
///
/// let path = warehouse_path("hdfs://clusterA/warehouse/db.db/t").unwrap();
/// assert_eq!(path, "/warehouse/db.db/t/");
/// ```
///
/// # Errors
///
/// Fails with [`StorageError::InvalidLocation`] when the scheme token is
/// absent or nothing follows the authority.
pub fn warehouse_path(location: &str) -> StorageResult<String> {
    let (_, after_scheme) = location
        .split_once(HDFS_SCHEME)
        .ok_or_else(|| StorageError::InvalidLocation(location.to_string()))?;

    let (_authority, path) = after_scheme
        .split_once('/')
        .ok_or_else(|| StorageError::InvalidLocation(location.to_string()))?;

    Ok(format!("/{}/", path))
}

/// Resolves the cumulative occupied bytes under a measurable location.
///
/// The resolver owns the retry budget for filesystem queries; the storage
/// provider itself never retries.
pub struct SizeResolver {
    storage: Arc<dyn StorageProvider>,
    retry: RetryPolicy,
}

impl SizeResolver {
    /// Create a resolver over a filesystem session.
    pub fn new(storage: Arc<dyn StorageProvider>, retry: RetryPolicy) -> Self {
        Self { storage, retry }
    }

    /// Measure the cumulative content size under `location`, in bytes.
    ///
    /// # Arguments
    ///
    /// * `location` - A location already classified as measurable
    ///
    /// # Errors
    ///
    /// Fails with a `StorageError` when the location is malformed or the
    /// filesystem query fails after the retry budget is spent. Callers treat
    /// this as a per-table failure.
    pub async fn resolve_size(&self, location: &str) -> StorageResult<u64> {
        let path = warehouse_path(location)?;
        debug!("Measuring location={} path={}", location, path);

        self.retry
            .retry("content_size", || self.storage.content_size(&path))
            .await
    }
}
