use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::SanityConfig;
use crate::domain::{category::Category as DomainCategory, product::Product as DomainProduct};
use crate::models::{
    QueryResponse, category::Category as SanityCategory, product::Product as SanityProduct,
};
use crate::repository::{
    CategoryReader, ProductReader, RepositoryError, RepositoryResult, SettingsReader,
};

const PRODUCT_PROJECTION: &str = r#"{
  "id": _id,
  title,
  slug,
  description,
  price,
  "imageUrl": image.asset->url,
  "categoryId": category._ref,
  "stockStatus": stock
}"#;

const CATEGORY_PROJECTION: &str = r#"{
  "id": _id,
  title,
  slug,
  description,
  "imageUrl": image.asset->url
}"#;

pub(crate) const TAX_RATE_QUERY: &str = r#"*[_type == "settings"][0].taxRate"#;

pub(crate) fn products_query() -> String {
    format!(r#"*[_type == "product"]{}"#, PRODUCT_PROJECTION)
}

pub(crate) fn products_by_category_query() -> String {
    format!(
        r#"*[_type == "product" && category._ref == $categoryId]{}"#,
        PRODUCT_PROJECTION
    )
}

pub(crate) fn product_by_id_query() -> String {
    format!(
        r#"*[_type == "product" && _id == $productId][0]{}"#,
        PRODUCT_PROJECTION
    )
}

pub(crate) fn categories_query() -> String {
    format!(r#"*[_type == "category"]{}"#, CATEGORY_PROJECTION)
}

#[derive(Clone)]
/// Content backend client issuing GROQ queries over the HTTP query API.
pub struct SanityRepository {
    client: reqwest::Client, // reqwest::Client is cheap to clone
    query_url: String,
    token: Option<String>,
}

impl SanityRepository {
    /// Create a client for the supplied configuration.
    pub fn new(config: &SanityConfig) -> RepositoryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            query_url: config.query_url(),
            token: config.token.clone(),
        })
    }

    /// Create a client only when the configuration names a real project.
    pub fn from_config(config: &SanityConfig) -> Option<Self> {
        if !config.is_configured() {
            log::warn!(
                "Sanity client not configured. Set SANITY_PROJECT_ID to query the content backend."
            );
            return None;
        }

        match Self::new(config) {
            Ok(repo) => Some(repo),
            Err(err) => {
                log::error!("Failed to build Sanity client: {err}");
                None
            }
        }
    }

    pub fn query_url(&self) -> &str {
        &self.query_url
    }

    /// Run `groq` with JSON-encoded `$name` parameters and decode `result`.
    async fn query<T>(&self, groq: &str, params: &[(&str, &str)]) -> RepositoryResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let mut pairs = Vec::with_capacity(params.len() + 1);
        pairs.push(("query".to_string(), groq.to_string()));
        for (name, value) in params {
            pairs.push((
                format!("${name}"),
                serde_json::Value::from(*value).to_string(),
            ));
        }

        let mut request = self.client.get(&self.query_url).query(&pairs);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RepositoryError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let decoded: QueryResponse<T> = serde_json::from_slice(&body)
            .map_err(|err| RepositoryError::Decode(err.to_string()))?;

        Ok(decoded.result)
    }
}

#[async_trait]
impl ProductReader for SanityRepository {
    async fn fetch_products(&self) -> RepositoryResult<Vec<DomainProduct>> {
        let products = self
            .query::<Vec<SanityProduct>>(&products_query(), &[])
            .await?
            .unwrap_or_default();

        Ok(products.into_iter().map(DomainProduct::from).collect())
    }

    async fn fetch_products_by_category(
        &self,
        category_id: &str,
    ) -> RepositoryResult<Vec<DomainProduct>> {
        let products = self
            .query::<Vec<SanityProduct>>(
                &products_by_category_query(),
                &[("categoryId", category_id)],
            )
            .await?
            .unwrap_or_default();

        Ok(products.into_iter().map(DomainProduct::from).collect())
    }

    async fn fetch_product_by_id(&self, product_id: &str) -> RepositoryResult<Option<DomainProduct>> {
        let product = self
            .query::<SanityProduct>(&product_by_id_query(), &[("productId", product_id)])
            .await?;

        Ok(product.map(DomainProduct::from))
    }
}

#[async_trait]
impl CategoryReader for SanityRepository {
    async fn fetch_categories(&self) -> RepositoryResult<Vec<DomainCategory>> {
        let categories = self
            .query::<Vec<SanityCategory>>(&categories_query(), &[])
            .await?
            .unwrap_or_default();

        Ok(categories.into_iter().map(DomainCategory::from).collect())
    }
}

#[async_trait]
impl SettingsReader for SanityRepository {
    async fn fetch_tax_rate(&self) -> RepositoryResult<Option<f64>> {
        self.query::<f64>(TAX_RATE_QUERY, &[]).await
    }
}
