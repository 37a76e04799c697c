use serde::{Deserialize, Serialize};

/// Domain representation of a product category published in the content backend.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Backend document identifier.
    pub id: String,
    /// Human-readable name of the category.
    pub title: String,
    /// URL-friendly name used by the storefront.
    pub slug: String,
    /// Description that expands upon the category title.
    #[serde(default)]
    pub description: String,
    /// Optional absolute URL of the category image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Category {
    /// Build a category with the supplied identifier and title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Attach a slug to the category.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Attach a descriptive text to the category.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach an image URL to the category.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}
