//! Catalog client errors.

use reqwest::StatusCode;
use thiserror::Error;

/// A failed HTTP exchange with the catalog service.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request could not be sent, or the response body could not be
    /// read or decoded.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(StatusCode),
}

/// Failures surfaced to the views, one per catalog operation.
///
/// Each failure is terminal to the operation that triggered it; callers turn
/// it into local UI state rather than letting it propagate.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Listing the catalog failed.
    #[error("failed to fetch products")]
    List(#[source] RequestError),

    /// The requested product could not be fetched.
    #[error("product not found")]
    NotFound(#[source] RequestError),

    /// Creating a product was rejected.
    #[error("failed to create product: {0}")]
    Create(#[source] RequestError),

    /// Updating a product was rejected.
    #[error("failed to update product: {0}")]
    Update(#[source] RequestError),

    /// Deleting a product was rejected.
    #[error("failed to delete product: {0}")]
    Delete(#[source] RequestError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_attempted_action() {
        let status = || RequestError::Status(StatusCode::INTERNAL_SERVER_ERROR);

        assert_eq!(
            CatalogError::List(status()).to_string(),
            "failed to fetch products"
        );
        assert_eq!(
            CatalogError::NotFound(status()).to_string(),
            "product not found"
        );
        assert_eq!(
            CatalogError::Create(status()).to_string(),
            "failed to create product: unexpected status 500 Internal Server Error"
        );
        assert_eq!(
            CatalogError::Update(status()).to_string(),
            "failed to update product: unexpected status 500 Internal Server Error"
        );
        assert_eq!(
            CatalogError::Delete(status()).to_string(),
            "failed to delete product: unexpected status 500 Internal Server Error"
        );
    }
}
