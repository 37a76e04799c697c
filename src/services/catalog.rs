use std::future::Future;

use crate::config::ServerConfig;
use crate::domain::{category::Category, product::Product, settings::sanitize_tax_rate};
use crate::repository::{CatalogReader, FallbackCatalog, RepositoryResult, SanityRepository};
use crate::services::{ServiceError, ServiceResult};

/// Why fallback data was served instead of backend data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// No backend client was constructed.
    Unconfigured,
    /// The backend query failed and the failure was absorbed.
    BackendFailure,
}

/// Where a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    Backend,
    Fallback(FallbackReason),
}

impl DataOrigin {
    /// Degraded-data notice attached to successful envelopes.
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            DataOrigin::Backend => None,
            DataOrigin::Fallback(FallbackReason::Unconfigured) => {
                Some("Content backend is not configured; serving sample data")
            }
            DataOrigin::Fallback(FallbackReason::BackendFailure) => {
                Some("Content backend is unavailable; serving fallback data")
            }
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, DataOrigin::Fallback(_))
    }
}

/// A service result tagged with its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub data: T,
    pub origin: DataOrigin,
}

impl<T> Sourced<T> {
    pub fn backend(data: T) -> Self {
        Self {
            data,
            origin: DataOrigin::Backend,
        }
    }

    pub fn fallback(data: T, reason: FallbackReason) -> Self {
        Self {
            data,
            origin: DataOrigin::Fallback(reason),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sourced<U> {
        Sourced {
            data: f(self.data),
            origin: self.origin,
        }
    }
}

/// Chooses between the content backend and the fallback catalog per request.
///
/// Backend failures never leave this type: they are logged and replaced by
/// the same fallback data served when no backend is configured.
pub struct CatalogService<B = SanityRepository> {
    backend: Option<B>,
    fallback: FallbackCatalog,
}

impl CatalogService<SanityRepository> {
    /// Build the service from the startup configuration.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(SanityRepository::from_config(&config.sanity))
    }
}

impl<B> CatalogService<B>
where
    B: CatalogReader,
{
    pub fn new(backend: Option<B>) -> Self {
        Self {
            backend,
            fallback: FallbackCatalog,
        }
    }

    /// Whether requests are sent to the backend at all.
    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    pub async fn products(&self) -> Sourced<Vec<Product>> {
        self.resolve("products", |backend| backend.fetch_products(), |fallback| {
            fallback.products()
        })
        .await
    }

    pub async fn categories(&self) -> Sourced<Vec<Category>> {
        self.resolve(
            "categories",
            |backend| backend.fetch_categories(),
            |fallback| fallback.categories(),
        )
        .await
    }

    /// Products whose category identifier equals `category_id` exactly.
    pub async fn products_by_category(
        &self,
        category_id: &str,
    ) -> ServiceResult<Sourced<Vec<Product>>> {
        let category_id = required(category_id, "Category ID")?;

        Ok(self
            .resolve(
                "products by category",
                |backend| backend.fetch_products_by_category(category_id),
                |fallback| fallback.products_by_category(category_id),
            )
            .await)
    }

    /// `None` means the product does not exist; it is not an error.
    pub async fn product_by_id(&self, product_id: &str) -> ServiceResult<Sourced<Option<Product>>> {
        let product_id = required(product_id, "Product ID")?;

        Ok(self
            .resolve(
                "product by id",
                |backend| backend.fetch_product_by_id(product_id),
                |fallback| fallback.product_by_id(product_id),
            )
            .await)
    }

    /// Global tax rate; a missing record and a failed query both give the default.
    pub async fn tax_rate(&self) -> Sourced<f64> {
        self.resolve("tax rate", |backend| backend.fetch_tax_rate(), |_| None)
            .await
            .map(sanitize_tax_rate)
    }

    async fn resolve<'a, T, Fut>(
        &'a self,
        what: &str,
        query: impl FnOnce(&'a B) -> Fut,
        fallback: impl FnOnce(&FallbackCatalog) -> T,
    ) -> Sourced<T>
    where
        Fut: Future<Output = RepositoryResult<T>>,
    {
        let Some(backend) = self.backend.as_ref() else {
            return Sourced::fallback(fallback(&self.fallback), FallbackReason::Unconfigured);
        };

        match query(backend).await {
            Ok(data) => Sourced::backend(data),
            Err(err) => {
                log::error!("Backend query for {what} failed, serving fallback data: {err}");
                Sourced::fallback(fallback(&self.fallback), FallbackReason::BackendFailure)
            }
        }
    }
}

fn required<'a>(value: &'a str, name: &'static str) -> ServiceResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ServiceError::MissingParameter(name));
    }
    Ok(value)
}
