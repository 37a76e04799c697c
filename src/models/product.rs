use serde::Deserialize;

use super::Slug;
use crate::domain::product::Product as DomainProduct;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: Option<String>,
    pub slug: Option<Slug>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub category_id: Option<String>,
    pub stock_status: Option<String>,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            title: value.title.unwrap_or_default(),
            slug: value.slug.map(Slug::into_string).unwrap_or_default(),
            description: value.description.unwrap_or_default(),
            price: value.price.unwrap_or_default(),
            image_url: value.image_url,
            category_id: value.category_id.unwrap_or_default(),
            stock_status: value.stock_status.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_backend_document_with_slug_object() {
        let document: Product = serde_json::from_value(json!({
            "id": "p-1",
            "title": "Classic T-Shirt",
            "slug": { "_type": "slug", "current": "classic-t-shirt" },
            "description": null,
            "price": 29.99,
            "imageUrl": null,
            "categoryId": "c-1",
            "stockStatus": "inStock"
        }))
        .expect("decode");

        let product = DomainProduct::from(document);

        assert_eq!(product.slug, "classic-t-shirt");
        assert_eq!(product.description, "");
        assert_eq!(product.image_url, None);
        assert_eq!(product.category_id, "c-1");
    }

    #[test]
    fn decodes_sparse_document() {
        let document: Product =
            serde_json::from_value(json!({ "id": "p-2", "slug": "plain" })).expect("decode");

        let product = DomainProduct::from(document);

        assert_eq!(product.slug, "plain");
        assert_eq!(product.price, 0.0);
        assert_eq!(product.title, "");
    }
}
