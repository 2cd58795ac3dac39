//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`NexbuyError`] which covers every failure the storefront can
//! report. It uses `thiserror` for ergonomic error definitions and includes constructor
//! helpers for the common failure scenarios.
//!
//! # Public API
//! - [`NexbuyError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, NexbuyError>`
//!
//! # Error Categories
//! - **Store operations**: directory creation, read and write failures
//! - **Catalog loading**: unreadable files, duplicate ids, out-of-range ratings
//! - **Storefront actions**: unknown products, credentials, checkout validation
//!
//! Cart and query operations never produce errors: unknown ids are no-ops and
//! quantities are clamped. The variants here are for the outer layers.

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for nexbuy
#[derive(Error, Debug)]
pub enum NexbuyError {
    // Store errors
    #[error("Could not determine the data directory")]
    DataDirectoryNotFound,

    #[error("Failed to create data directory '{path}': {source}")]
    DataDirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read store entry '{path}': {source}")]
    StoreReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write store entry '{path}': {source}")]
    StoreWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // Catalog errors
    #[error("Failed to read catalog file '{path}': {source}")]
    CatalogReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file '{path}': {source}")]
    CatalogParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Duplicate product id in catalog: {id}")]
    DuplicateProduct { id: String },

    #[error("Product {id} has rating {rating}, expected a value between 0 and 5")]
    InvalidRating { id: String, rating: f32 },

    // Storefront errors
    #[error("Product not found: {id}")]
    UnknownProduct { id: String },

    #[error("Provide valid credentials (6+ chars).")]
    InvalidCredentials,

    #[error("Not signed in")]
    NotSignedIn,

    #[error("Cart empty")]
    EmptyCart,

    #[error("Please provide valid checkout information: {reason}")]
    InvalidCheckout { reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using NexbuyError
pub type Result<T> = std::result::Result<T, NexbuyError>;

impl NexbuyError {
    /// Create a data directory creation failed error
    pub fn data_directory_creation_failed(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::DataDirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a store read failed error
    pub fn store_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StoreReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a store write failed error
    pub fn store_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StoreWriteFailed {
            path: path.into(),
            source,
        }
    }

    pub fn catalog_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CatalogReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn catalog_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::CatalogParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create an unknown product error
    pub fn unknown_product(id: impl Into<String>) -> Self {
        Self::UnknownProduct { id: id.into() }
    }

    /// Create an invalid checkout error with the first failing field
    pub fn invalid_checkout(reason: impl Into<String>) -> Self {
        Self::InvalidCheckout {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NexbuyError::EmptyCart;
        assert_eq!(err.to_string(), "Cart empty");
    }

    #[test]
    fn test_unknown_product_error() {
        let err = NexbuyError::unknown_product("p42");
        assert_eq!(err.to_string(), "Product not found: p42");
    }

    #[test]
    fn test_invalid_checkout_error() {
        let err = NexbuyError::invalid_checkout("card: 16 digits");
        assert_eq!(
            err.to_string(),
            "Please provide valid checkout information: card: 16 digits"
        );
    }

    #[test]
    fn test_store_write_failed() {
        let path = PathBuf::from("/test/nexbuy_cart_v1.json");
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = NexbuyError::store_write_failed(&path, io_err);
        assert!(err.to_string().contains("/test/nexbuy_cart_v1.json"));
        assert!(err.to_string().contains("access denied"));
    }

    #[test]
    fn test_data_directory_creation_failed() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let err = NexbuyError::data_directory_creation_failed("/test/path", io_err);
        assert!(err.to_string().contains("/test/path"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_catalog_parse_failed() {
        let json_err = serde_json::from_str::<serde_json::Value>("[ invalid").unwrap_err();
        let err = NexbuyError::catalog_parse_failed("/test/catalog.json", json_err);
        assert!(err.to_string().contains("/test/catalog.json"));
        assert!(err.to_string().contains("Failed to parse catalog"));
    }

    #[test]
    fn test_invalid_rating_error() {
        let err = NexbuyError::InvalidRating {
            id: "p1".to_string(),
            rating: 7.5,
        };
        assert!(err.to_string().contains("p1"));
        assert!(err.to_string().contains("7.5"));
    }
}
