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

use thiserror::Error;

use crate::util::retry::Retryable;

/// Errors that can occur during filesystem operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Object store error: {0}")]
    ObjectStoreError(#[from] object_store::Error),
}

/// Result type for filesystem operations
pub type StorageResult<T> = Result<T, StorageError>;

impl Retryable for StorageError {
    fn is_retryable(&self) -> bool {
        match self {
            StorageError::ConnectionError(_) => true,
            StorageError::IoError(e) => matches!(
                e.kind(),
                std::io::ErrorKind::ConnectionReset
                    | std::io::ErrorKind::BrokenPipe
                    | std::io::ErrorKind::Interrupted
                    | std::io::ErrorKind::TimedOut
            ),
            // Generic store errors are transport-level; NotFound and friends
            // will not heal on retry
            StorageError::ObjectStoreError(e) => matches!(e, object_store::Error::Generic { .. }),
            StorageError::ConfigError(_) | StorageError::InvalidLocation(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_config_error() {
        let error = StorageError::ConfigError("Invalid configuration".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_connection_error() {
        let error = StorageError::ConnectionError("Failed to connect".to_string());
        assert_eq!(error.to_string(), "Connection error: Failed to connect");
    }

    #[test]
    fn test_invalid_location_error() {
        let error = StorageError::InvalidLocation("hdfs://".to_string());
        assert_eq!(error.to_string(), "Invalid location: hdfs://");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let storage_error: StorageError = io_error.into();

        match storage_error {
            StorageError::IoError(_) => {
                assert!(storage_error.to_string().contains("IO error"));
            }
            _ => panic!("Expected IoError variant"),
        }
    }

    #[test]
    fn test_object_store_error_conversion() {
        let os_error = object_store::Error::NotFound {
            path: "warehouse/db.db/t".to_string(),
            source: Box::new(io::Error::new(io::ErrorKind::NotFound, "missing")),
        };
        let storage_error: StorageError = os_error.into();

        match storage_error {
            StorageError::ObjectStoreError(_) => {
                assert!(storage_error.to_string().contains("Object store error"));
            }
            _ => panic!("Expected ObjectStoreError variant"),
        }
    }

    #[test]
    fn test_error_debug() {
        let error = StorageError::ConfigError("test".to_string());
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("ConfigError"));
    }

    #[test]
    fn test_storage_result_err() {
        let result: StorageResult<i32> = Err(StorageError::ConfigError("error".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_connection_error_is_retryable() {
        assert!(StorageError::ConnectionError("reset".to_string()).is_retryable());
    }

    #[test]
    fn test_config_error_is_not_retryable() {
        assert!(!StorageError::ConfigError("missing option".to_string()).is_retryable());
    }

    #[test]
    fn test_not_found_is_not_retryable() {
        let error = StorageError::ObjectStoreError(object_store::Error::NotFound {
            path: "warehouse/db.db/t".to_string(),
            source: Box::new(io::Error::new(io::ErrorKind::NotFound, "missing")),
        });
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_timed_out_io_is_retryable() {
        let error: StorageError = io::Error::new(io::ErrorKind::TimedOut, "timed out").into();
        assert!(error.is_retryable());
    }
}
