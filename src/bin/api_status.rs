use dotenvy::dotenv;

use designwear_web::client::{ApiClient, KeyedResource};

/// Prints what the storefront's data fetchers would see for the configured API.
#[actix_web::main]
async fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let client = ApiClient::from_env();
    log::info!("Querying {}", client.base_url());

    let products = client.products().await;
    match &products.error {
        None => println!("{} products loaded", products.data.len()),
        Some(err) => println!("products: {err}"),
    }

    let categories = client.categories().await;
    match &categories.error {
        None => println!("{} categories loaded", categories.data.len()),
        Some(err) => println!("categories: {err}"),
    }

    let tax_rate = client.tax_rate().await;
    match &tax_rate.error {
        None => println!("tax rate {}%", tax_rate.data),
        Some(err) => println!("tax rate {}% (default): {err}", tax_rate.data),
    }

    let mut by_category = KeyedResource::products_by_category();
    for category in &categories.data {
        by_category.watch(&client, Some(category.id.as_str())).await;
        let state = by_category.state();
        match &state.error {
            None => println!("  {}: {} products", category.title, state.data.len()),
            Some(err) => println!("  {}: {err}", category.title),
        }
    }
}
