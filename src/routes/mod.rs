use actix_web::{HttpResponse, Scope, web};
use tera::{Context, Tera};

pub mod api;
pub mod flutter;
pub mod main;

/// Render `template` into an HTML response, logging render failures.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Every JSON endpoint under the `/api` prefix.
pub fn api_scope() -> Scope {
    web::scope("/api")
        .service(api::list_products)
        .service(api::echo_product)
        .service(api::show_product)
        .service(api::list_categories)
        .service(api::list_category_products)
        .service(api::show_tax_rate)
        .service(flutter::receive_message)
        .service(flutter::flutter_status)
        .service(flutter::health)
        .route("/flutter-env", web::get().to(flutter::flutter_env))
}
