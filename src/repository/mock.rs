use async_trait::async_trait;
use mockall::mock;

use super::{CategoryReader, ProductReader, RepositoryResult, SettingsReader};
use crate::domain::{category::Category, product::Product};

mock! {
    pub Catalog {}

    #[async_trait]
    impl ProductReader for Catalog {
        async fn fetch_products(&self) -> RepositoryResult<Vec<Product>>;
        async fn fetch_products_by_category(&self, category_id: &str) -> RepositoryResult<Vec<Product>>;
        async fn fetch_product_by_id(&self, product_id: &str) -> RepositoryResult<Option<Product>>;
    }

    #[async_trait]
    impl CategoryReader for Catalog {
        async fn fetch_categories(&self) -> RepositoryResult<Vec<Category>>;
    }

    #[async_trait]
    impl SettingsReader for Catalog {
        async fn fetch_tax_rate(&self) -> RepositoryResult<Option<f64>>;
    }
}
