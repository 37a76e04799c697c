use serde::{Deserialize, Serialize};

/// Domain representation of a product published in the content backend.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend document identifier.
    pub id: String,
    /// Human-readable name of the product.
    pub title: String,
    /// URL-friendly name used by the storefront.
    pub slug: String,
    /// Longer description shown to users.
    #[serde(default)]
    pub description: String,
    /// Unit price as a decimal amount.
    pub price: f64,
    /// Optional absolute URL of the product image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Identifier of the owning category. Not enforced by this service.
    pub category_id: String,
    /// Stock status label, for example `inStock`.
    #[serde(default)]
    pub stock_status: String,
}

impl Product {
    /// Build a product with the required fields and empty optional details.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        price: f64,
        category_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            category_id: category_id.into(),
            ..Self::default()
        }
    }

    /// Attach a slug to the product.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Attach a descriptive text to the product.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach an image URL to the product.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Set the stock status label.
    pub fn with_stock_status(mut self, stock_status: impl Into<String>) -> Self {
        self.stock_status = stock_status.into();
        self
    }

    /// Whether the product belongs to `category_id` (exact match).
    pub fn belongs_to(&self, category_id: &str) -> bool {
        self.category_id == category_id
    }
}
