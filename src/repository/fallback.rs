use lazy_static::lazy_static;

use crate::domain::{category::Category, product::Product};

lazy_static! {
    static ref SAMPLE_CATEGORIES: Vec<Category> = vec![
        Category::new("mock-category-1", "Apparel")
            .with_slug("apparel")
            .with_description("Clothing items including t-shirts, hoodies, and more.")
            .with_image_url("https://via.placeholder.com/300x300?text=Apparel"),
        Category::new("mock-category-2", "Accessories")
            .with_slug("accessories")
            .with_description("Fashion accessories like caps, bags, and jewelry.")
            .with_image_url("https://via.placeholder.com/300x300?text=Accessories"),
    ];
    static ref SAMPLE_PRODUCTS: Vec<Product> = vec![
        Product::new("mock-product-1", "Classic T-Shirt", 29.99, "mock-category-1")
            .with_slug("classic-t-shirt")
            .with_description("A comfortable cotton t-shirt perfect for everyday wear.")
            .with_image_url("https://via.placeholder.com/300x300?text=T-Shirt")
            .with_stock_status("inStock"),
        Product::new("mock-product-2", "Designer Hoodie", 79.99, "mock-category-1")
            .with_slug("designer-hoodie")
            .with_description("Premium quality hoodie with custom design options.")
            .with_image_url("https://via.placeholder.com/300x300?text=Hoodie")
            .with_stock_status("inStock"),
        Product::new("mock-product-3", "Custom Cap", 24.99, "mock-category-2")
            .with_slug("custom-cap")
            .with_description("Adjustable cap with embroidery customization.")
            .with_image_url("https://via.placeholder.com/300x300?text=Cap")
            .with_stock_status("inStock"),
    ];
}

/// Static sample catalog served when the backend is unconfigured or failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackCatalog;

impl FallbackCatalog {
    pub fn products(&self) -> Vec<Product> {
        SAMPLE_PRODUCTS.clone()
    }

    pub fn categories(&self) -> Vec<Category> {
        SAMPLE_CATEGORIES.clone()
    }

    /// Exact-match filter on the product's category identifier.
    pub fn products_by_category(&self, category_id: &str) -> Vec<Product> {
        SAMPLE_PRODUCTS
            .iter()
            .filter(|product| product.belongs_to(category_id))
            .cloned()
            .collect()
    }

    pub fn product_by_id(&self, product_id: &str) -> Option<Product> {
        SAMPLE_PRODUCTS
            .iter()
            .find(|product| product.id == product_id)
            .cloned()
    }
}
