//! Warehouse catalog session
//!
//! The catalog service owns database and table definitions. This module
//! provides the session trait the walker consumes plus the production
//! implementation over the warehouse's SQL-gateway REST API.

pub mod error;
pub mod rest;
pub mod session;

// Public exports
pub use error::{CatalogError, CatalogResult};
pub use rest::RestCatalog;
pub use session::Catalog;
