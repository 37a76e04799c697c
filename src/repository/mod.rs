use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{category::Category, product::Product};

pub mod fallback;
pub mod sanity;

#[cfg(test)]
pub mod mock;

pub use fallback::FallbackCatalog;
pub use sanity::SanityRepository;

/// Classification of a failed backend query.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend responded with status {0}")]
    Status(u16),
    #[error("backend payload could not be decoded: {0}")]
    Decode(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Read-only access to product documents.
#[async_trait]
pub trait ProductReader: Send + Sync {
    async fn fetch_products(&self) -> RepositoryResult<Vec<Product>>;
    async fn fetch_products_by_category(&self, category_id: &str)
    -> RepositoryResult<Vec<Product>>;
    async fn fetch_product_by_id(&self, product_id: &str) -> RepositoryResult<Option<Product>>;
}

/// Read-only access to category documents.
#[async_trait]
pub trait CategoryReader: Send + Sync {
    async fn fetch_categories(&self) -> RepositoryResult<Vec<Category>>;
}

/// Read-only access to the global settings document.
#[async_trait]
pub trait SettingsReader: Send + Sync {
    /// Returns `None` when no settings record carries a tax rate.
    async fn fetch_tax_rate(&self) -> RepositoryResult<Option<f64>>;
}

/// Everything the catalog service needs from a backend.
pub trait CatalogReader: ProductReader + CategoryReader + SettingsReader {}

impl<T> CatalogReader for T where T: ProductReader + CategoryReader + SettingsReader {}
