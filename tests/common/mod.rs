//! Helpers for integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::http::{StatusCode, header};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

use designwear_web::config::ServerConfig;

/// Build a configuration from explicit variables only.
pub fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

/// Configuration without a backend project: every read serves fallback data.
pub fn unconfigured() -> ServerConfig {
    config_from(&[])
}

/// Configuration pointing at a port nothing listens on.
pub fn unreachable_backend() -> ServerConfig {
    config_from(&[
        ("SANITY_PROJECT_ID", "test-project"),
        ("SANITY_API_HOST", "http://127.0.0.1:9"),
        ("SANITY_TIMEOUT_SECS", "2"),
    ])
}

/// Configuration pointing at a running fake backend, plus extra variables.
pub fn backend_with(addr: SocketAddr, extra: &[(&str, &str)]) -> ServerConfig {
    let host = format!("http://{addr}");
    let mut pairs = vec![
        ("SANITY_PROJECT_ID", "test-project"),
        ("SANITY_API_HOST", host.as_str()),
        ("SANITY_TIMEOUT_SECS", "5"),
    ];
    pairs.extend_from_slice(extra);
    config_from(&pairs)
}

/// Configuration pointing at a running fake backend.
pub fn backend_at(addr: SocketAddr) -> ServerConfig {
    backend_with(addr, &[])
}

fn product_documents() -> Vec<Value> {
    vec![
        json!({
            "id": "prod-1",
            "title": "Linen Shirt",
            "slug": { "_type": "slug", "current": "linen-shirt" },
            "description": "Breathable summer shirt.",
            "price": 49.5,
            "imageUrl": "https://cdn.example.com/linen.png",
            "categoryId": "cat-shirts",
            "stockStatus": "inStock"
        }),
        json!({
            "id": "prod-2",
            "title": "Denim Jacket",
            "slug": { "_type": "slug", "current": "denim-jacket" },
            "description": null,
            "price": 120,
            "imageUrl": null,
            "categoryId": "cat-outerwear",
            "stockStatus": "outOfStock"
        }),
    ]
}

fn category_documents() -> Vec<Value> {
    vec![
        json!({
            "id": "cat-shirts",
            "title": "Shirts",
            "slug": { "_type": "slug", "current": "shirts" },
            "description": "Shirts and tops.",
            "imageUrl": null
        }),
        json!({
            "id": "cat-outerwear",
            "title": "Outerwear",
            "slug": "outerwear",
            "description": "Jackets and coats."
        }),
    ]
}

fn decode_param(params: &HashMap<String, String>, name: &str) -> Option<String> {
    params
        .get(name)
        .and_then(|raw| serde_json::from_str::<String>(raw).ok())
}

async fn fake_query(params: web::Query<HashMap<String, String>>) -> HttpResponse {
    let query = params.get("query").cloned().unwrap_or_default();

    let result = if query.contains(r#"_type == "settings""#) {
        json!(21.5)
    } else if query.contains("$productId") {
        let id = decode_param(&params, "$productId").unwrap_or_default();
        product_documents()
            .into_iter()
            .find(|doc| doc["id"] == json!(id))
            .unwrap_or(Value::Null)
    } else if query.contains("$categoryId") {
        let id = decode_param(&params, "$categoryId").unwrap_or_default();
        Value::Array(
            product_documents()
                .into_iter()
                .filter(|doc| doc["categoryId"] == json!(id))
                .collect(),
        )
    } else if query.contains(r#"_type == "product""#) {
        Value::Array(product_documents())
    } else if query.contains(r#"_type == "category""#) {
        Value::Array(category_documents())
    } else {
        return HttpResponse::BadRequest().json(json!({ "error": "unknown query" }));
    };

    HttpResponse::Ok().json(json!({ "ms": 1, "query": query, "result": result }))
}

/// Bind `$factory` on an ephemeral port and run it in the background.
macro_rules! launch {
    ($factory:expr) => {{
        let server = HttpServer::new($factory)
            .workers(1)
            .disable_signals()
            .bind(("127.0.0.1", 0))
            .expect("bind fake backend");

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        FakeBackend { addr, handle }
    }};
}

const QUERY_PATH: &str = "/v2023-05-03/data/query/production";

/// A running fake of the backend query API.
pub struct FakeBackend {
    pub addr: SocketAddr,
    handle: ServerHandle,
}

impl FakeBackend {
    /// Start a backend serving the fixture documents.
    pub fn start() -> Self {
        launch!(|| App::new().route(QUERY_PATH, web::get().to(fake_query)))
    }

    /// Start a backend that answers every request with `status` and `body`.
    pub fn failing(status: u16, body: &'static str) -> Self {
        launch!(move || {
            App::new().default_service(web::to(move || async move {
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                HttpResponse::build(status)
                    .content_type("application/json")
                    .body(body)
            }))
        })
    }

    /// Start a backend that holds every query for `delay` before answering.
    pub fn slow(delay: Duration) -> Self {
        launch!(move || {
            App::new().route(
                QUERY_PATH,
                web::get().to(move |params: web::Query<HashMap<String, String>>| async move {
                    actix_web::rt::time::sleep(delay).await;
                    fake_query(params).await
                }),
            )
        })
    }

    /// Start a backend that serves the fixtures only to `Bearer <token>` requests.
    pub fn private(token: &'static str) -> Self {
        launch!(move || {
            App::new().route(
                QUERY_PATH,
                web::get().to(
                    move |req: HttpRequest, params: web::Query<HashMap<String, String>>| async move {
                        let expected = format!("Bearer {token}");
                        let authorization = req
                            .headers()
                            .get(header::AUTHORIZATION)
                            .and_then(|value| value.to_str().ok());
                        if authorization != Some(expected.as_str()) {
                            return HttpResponse::Unauthorized()
                                .json(json!({ "error": "missing or invalid token" }));
                        }
                        fake_query(params).await
                    },
                ),
            )
        })
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }

    /// Stop without waiting for in-flight requests to finish.
    pub async fn abort(self) {
        self.handle.stop(false).await;
    }
}
