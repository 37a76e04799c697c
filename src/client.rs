//! Typed consumers of the JSON API, one per resource.
//!
//! Each [`Resource`] owns a payload, a loading flag and an error message.
//! A fetch performs exactly one request; on failure the payload keeps its
//! initial value and the error is set.

use reqwest::Url;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::{
    category::Category, product::Product, response::ApiResponse, settings::DEFAULT_TAX_RATE,
    settings::TaxRatePayload,
};

/// Base URL used when `API_BASE_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080/api";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("API request failed: {0}")]
    Status(u16),
    #[error("invalid API base URL: {0}")]
    BaseUrl(String),
}

/// Client state of a single API resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Resource<T> {
    /// A resource about to be fetched, holding its initial payload.
    pub fn new(initial: T) -> Self {
        Self {
            data: initial,
            loading: true,
            error: None,
        }
    }

    fn idle(initial: T) -> Self {
        Self {
            data: initial,
            loading: false,
            error: None,
        }
    }

    fn settle<U>(
        &mut self,
        outcome: Result<ApiResponse<U>, ClientError>,
        what: &str,
        into_data: impl FnOnce(U) -> T,
    ) {
        match outcome {
            Ok(response) if response.success => {
                self.data = into_data(response.data);
                self.error = None;
            }
            Ok(response) => {
                self.error = Some(
                    response
                        .error
                        .unwrap_or_else(|| format!("Failed to fetch {what}")),
                );
            }
            Err(err) => self.error = Some(err.to_string()),
        }
        self.loading = false;
    }
}

/// HTTP client for the catalog endpoints.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client for `API_BASE_URL`, falling back to the local server.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Append `segments` to the base URL, percent-encoding each one.
    fn endpoint_url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|err| ClientError::BaseUrl(err.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| ClientError::BaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch_api<T>(&self, segments: &[&str]) -> Result<ApiResponse<T>, ClientError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(segments)?;
        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status().as_u16()));
        }

        Ok(response.json::<ApiResponse<T>>().await?)
    }

    pub async fn products(&self) -> Resource<Vec<Product>> {
        let mut resource = Resource::new(Vec::new());
        let outcome = self.fetch_api(&["products"]).await;
        resource.settle(outcome, "products", |data| data);
        resource
    }

    pub async fn categories(&self) -> Resource<Vec<Category>> {
        let mut resource = Resource::new(Vec::new());
        let outcome = self.fetch_api(&["categories"]).await;
        resource.settle(outcome, "categories", |data| data);
        resource
    }

    /// Tax rate resource; starts at, and keeps on failure, the default rate.
    pub async fn tax_rate(&self) -> Resource<f64> {
        let mut resource = Resource::new(DEFAULT_TAX_RATE);
        let outcome = self.fetch_api::<TaxRatePayload>(&["settings", "tax-rate"]).await;
        resource.settle(outcome, "tax rate", |payload| payload.tax_rate);
        resource
    }
}

/// A resource whose request depends on a key such as a product id.
///
/// [`KeyedResource::watch`] only issues a request when the key changed
/// since the previous call; a `None` key clears the payload without a request.
pub struct KeyedResource<T> {
    key: Option<String>,
    primed: bool,
    state: Resource<T>,
    endpoint: fn(&str) -> Vec<&str>,
    what: &'static str,
}

impl<T> KeyedResource<T>
where
    T: Default + DeserializeOwned,
{
    fn new(endpoint: fn(&str) -> Vec<&str>, what: &'static str) -> Self {
        Self {
            key: None,
            primed: false,
            state: Resource::new(T::default()),
            endpoint,
            what,
        }
    }

    pub fn state(&self) -> &Resource<T> {
        &self.state
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Refetch when `key` differs from the last one; returns whether a request was made.
    pub async fn watch(&mut self, client: &ApiClient, key: Option<&str>) -> bool {
        if self.primed && self.key.as_deref() == key {
            return false;
        }
        self.primed = true;
        self.key = key.map(str::to_string);

        let Some(key) = key else {
            self.state = Resource::idle(T::default());
            return false;
        };

        self.state = Resource::new(T::default());
        let outcome = client.fetch_api::<T>(&(self.endpoint)(key)).await;
        self.state.settle(outcome, self.what, |data| data);
        true
    }
}

impl KeyedResource<Option<Product>> {
    /// Single product keyed by product id.
    pub fn product() -> Self {
        Self::new(|id| vec!["products", id], "product")
    }
}

impl KeyedResource<Vec<Product>> {
    /// Products of one category keyed by category id.
    pub fn products_by_category() -> Self {
        Self::new(|id| vec!["categories", id, "products"], "products")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_success_sets_payload_and_clears_error() {
        let mut resource = Resource::new(Vec::<u32>::new());
        resource.error = Some("stale".to_string());

        resource.settle(Ok(ApiResponse::success(vec![1, 2], "ok")), "numbers", |data| data);

        assert_eq!(resource.data, vec![1, 2]);
        assert_eq!(resource.error, None);
        assert!(!resource.loading);
    }

    #[test]
    fn settle_failed_envelope_keeps_initial_payload() {
        let mut resource = Resource::new(DEFAULT_TAX_RATE);

        resource.settle(
            Ok(ApiResponse::<TaxRatePayload>::failure("settings missing")),
            "tax rate",
            |payload| payload.tax_rate + 1.0,
        );

        assert_eq!(resource.data, DEFAULT_TAX_RATE);
        assert_eq!(resource.error.as_deref(), Some("settings missing"));
    }

    #[test]
    fn settle_failed_envelope_without_error_uses_generic_message() {
        let mut resource = Resource::new(Vec::<u32>::new());
        let mut response = ApiResponse::<Vec<u32>>::failure("x");
        response.error = None;

        resource.settle(Ok(response), "products", |data| data);

        assert_eq!(resource.error.as_deref(), Some("Failed to fetch products"));
    }

    #[test]
    fn settle_status_error_reports_status() {
        let mut resource = Resource::new(Vec::<u32>::new());

        resource.settle(Err(ClientError::Status(404)), "product", |data| data);

        assert_eq!(resource.error.as_deref(), Some("API request failed: 404"));
        assert!(resource.data.is_empty());
    }

    #[test]
    fn endpoints_interpolate_keys() {
        let product = KeyedResource::product();
        let by_category = KeyedResource::products_by_category();

        assert_eq!((product.endpoint)("p-1"), vec!["products", "p-1"]);
        assert_eq!(
            (by_category.endpoint)("c-1"),
            vec!["categories", "c-1", "products"]
        );
        assert!(product.state().loading);
        assert_eq!(product.key(), None);
    }

    #[test]
    fn endpoint_url_encodes_each_segment() {
        let client = ApiClient::new("http://127.0.0.1:8080/api/");

        let url = client
            .endpoint_url(&["products", "mock-product-1#other"])
            .expect("url");
        let nested = client.endpoint_url(&["categories", "a/b?c", "products"]).expect("url");

        assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/products/mock-product-1%23other");
        assert_eq!(
            nested.as_str(),
            "http://127.0.0.1:8080/api/categories/a%2Fb%3Fc/products"
        );
    }

    #[test]
    fn endpoint_url_rejects_unparsable_base() {
        let client = ApiClient::new("not a url");

        assert!(matches!(
            client.endpoint_url(&["products"]),
            Err(ClientError::BaseUrl(_))
        ));
    }

    #[actix_web::test]
    async fn watch_with_no_key_clears_without_request() {
        // Unroutable base URL: any request would fail and set an error.
        let client = ApiClient::new("http://127.0.0.1:9/api");
        let mut resource = KeyedResource::product();

        let fetched = resource.watch(&client, None).await;

        assert!(!fetched);
        assert!(!resource.state().loading);
        assert_eq!(resource.state().error, None);
        assert_eq!(resource.state().data, None);
        assert!(!resource.watch(&client, None).await);
    }
}
