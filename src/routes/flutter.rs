use actix_web::http::header;
use actix_web::{HttpResponse, Responder, get, post, web};
use chrono::Utc;
use serde_json::{Value, json};

use crate::config::ServerConfig;
use crate::services::catalog::CatalogService;
use crate::services::flutter_env::render_env_file;

#[post("/flutter")]
/// Accept a message from the embedded client and echo it back.
pub async fn receive_message(body: web::Bytes) -> impl Responder {
    match serde_json::from_slice::<Value>(&body) {
        Ok(data) => {
            log::info!("Received Flutter message: {data}");
            HttpResponse::Ok().json(json!({
                "success": true,
                "message": "Message received from Flutter",
                "echo": data,
            }))
        }
        Err(err) => {
            log::error!("Failed to parse Flutter message: {err}");
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Failed to process Flutter message",
            }))
        }
    }
}

#[get("/flutter")]
/// Liveness marker polled by the embedded client.
pub async fn flutter_status() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "Flutter API ready",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

#[get("/health")]
pub async fn health(
    catalog: web::Data<CatalogService>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "environment": config.app.environment.as_str(),
        "debug": config.app.is_debug,
        "sanityConfigured": catalog.is_configured(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Serve the configuration snapshot as a plain-text `.env` file.
///
/// Also mounted at the bundle's own `.env` asset path, which static file
/// serving refuses because it is a dotfile.
pub async fn flutter_env(config: web::Data<ServerConfig>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain")
        .insert_header((header::CACHE_CONTROL, "no-store, max-age=0"))
        .body(render_env_file(&config.exported_env))
}
