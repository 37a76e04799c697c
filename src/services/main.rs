use serde::Serialize;

use crate::repository::CatalogReader;
use crate::services::catalog::CatalogService;

/// Data required to render the API status template.
#[derive(Debug, Serialize)]
pub struct StatusPageData {
    pub product_count: usize,
    pub category_count: usize,
    /// Whether the counts came from the live backend.
    pub live: bool,
    /// Degraded-data notice shown above the counts.
    pub warning: Option<&'static str>,
}

/// Loads the product and category counts for the status page.
pub async fn load_status_page<B>(catalog: &CatalogService<B>) -> StatusPageData
where
    B: CatalogReader,
{
    let products = catalog.products().await;
    let categories = catalog.categories().await;

    let warning = products
        .origin
        .warning()
        .or_else(|| categories.origin.warning());

    StatusPageData {
        product_count: products.data.len(),
        category_count: categories.data.len(),
        live: !products.origin.is_fallback() && !categories.origin.is_fallback(),
        warning,
    }
}
