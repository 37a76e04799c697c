use actix_web::{HttpResponse, Responder, get, post, web};

use crate::domain::{
    product::Product,
    response::ApiResponse,
    settings::TaxRatePayload,
};
use crate::services::ServiceError;
use crate::services::catalog::{CatalogService, Sourced};

fn sourced_response<T>(sourced: Sourced<T>, message: String) -> ApiResponse<T> {
    ApiResponse::success(sourced.data, message).with_warning(sourced.origin.warning())
}

fn bad_request<T: Default + serde::Serialize>(err: ServiceError) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::<T>::failure(err.to_string()))
}

#[get("/products")]
/// Return every product, from the backend or the fallback catalog.
pub async fn list_products(catalog: web::Data<CatalogService>) -> impl Responder {
    let products = catalog.products().await;
    let message = format!("Fetched {} products successfully", products.data.len());

    HttpResponse::Ok().json(sourced_response(products, message))
}

#[post("/products")]
/// Echo a product payload back; catalog writes happen in the content backend.
pub async fn echo_product(body: web::Bytes) -> impl Responder {
    match serde_json::from_slice::<Product>(&body) {
        Ok(product) => HttpResponse::Ok().json(ApiResponse::success(
            Some(product),
            "Product operation completed",
        )),
        Err(err) => {
            log::error!("Failed to parse product payload: {err}");
            HttpResponse::InternalServerError()
                .json(ApiResponse::<Option<Product>>::failure(err.to_string()))
        }
    }
}

#[get("/products/{product_id:[^/]*}")]
/// Return a single product.
///
/// A blank id yields `400 Bad Request`, an unknown one `404 Not Found`.
pub async fn show_product(
    path: web::Path<String>,
    catalog: web::Data<CatalogService>,
) -> impl Responder {
    let product_id = path.into_inner();

    match catalog.product_by_id(&product_id).await {
        Ok(Sourced {
            data: Some(product),
            origin,
        }) => HttpResponse::Ok().json(
            ApiResponse::success(Some(product), "Product fetched successfully")
                .with_warning(origin.warning()),
        ),
        Ok(Sourced { data: None, .. }) => HttpResponse::NotFound()
            .json(ApiResponse::<Option<Product>>::failure("Product not found")),
        Err(err) => bad_request::<Option<Product>>(err),
    }
}

#[get("/categories")]
/// Return every category, from the backend or the fallback catalog.
pub async fn list_categories(catalog: web::Data<CatalogService>) -> impl Responder {
    let categories = catalog.categories().await;
    let message = format!("Fetched {} categories successfully", categories.data.len());

    HttpResponse::Ok().json(sourced_response(categories, message))
}

#[get("/categories/{category_id:[^/]*}/products")]
/// Return the products of one category. A blank id yields `400 Bad Request`.
pub async fn list_category_products(
    path: web::Path<String>,
    catalog: web::Data<CatalogService>,
) -> impl Responder {
    let category_id = path.into_inner();

    match catalog.products_by_category(&category_id).await {
        Ok(products) => {
            let message = format!(
                "Fetched {} products for category {}",
                products.data.len(),
                category_id.trim()
            );
            HttpResponse::Ok().json(sourced_response(products, message))
        }
        Err(err) => bad_request::<Vec<Product>>(err),
    }
}

#[get("/settings/tax-rate")]
/// Return the global tax rate; the payload always carries a number.
pub async fn show_tax_rate(catalog: web::Data<CatalogService>) -> impl Responder {
    let tax_rate = catalog.tax_rate().await.map(TaxRatePayload::new);

    HttpResponse::Ok().json(sourced_response(
        tax_rate,
        "Tax rate fetched successfully".to_string(),
    ))
}
