use crate::util::retry::Retryable;
use thiserror::Error;

/// Errors that can occur while talking to the warehouse catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Invalid catalog endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Query failed: {statement}: {message}")]
    Query { statement: String, message: String },

    #[error("Malformed response: {0}")]
    Response(String),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

impl Retryable for CatalogError {
    fn is_retryable(&self) -> bool {
        match self {
            CatalogError::Connection(_) => true,
            CatalogError::Transport(e) => e.is_timeout() || e.is_connect(),
            // A rejected statement or a bad endpoint will not heal on retry
            CatalogError::Endpoint(_) | CatalogError::Query { .. } | CatalogError::Response(_) => {
                false
            }
        }
    }
}
