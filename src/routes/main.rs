use actix_web::{Responder, get, web};
use tera::{Context, Tera};

use crate::config::ServerConfig;
use crate::routes::render_template;
use crate::services::catalog::CatalogService;
use crate::services::main::load_status_page;
use crate::shell::{BundleMount, ShellContext};

fn shell_context(config: &ServerConfig, bundle: &BundleMount, flutter_id: &str) -> Context {
    let shell = ShellContext::new(config, bundle, flutter_id);
    let shell_json = shell.script_json().unwrap_or_else(|err| {
        log::error!("Failed to serialize shell settings: {err}");
        "{}".to_string()
    });

    let mut context = Context::new();
    context.insert("app_name", &config.app.app_name);
    context.insert("shell", &shell);
    context.insert("shell_json", &shell_json);
    context
}

#[get("/")]
/// Host the client bundle full-page.
pub async fn show_index(
    config: web::Data<ServerConfig>,
    bundle: web::Data<BundleMount>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = shell_context(&config, &bundle, "flutter_main");
    render_template(&tera, "main/index.html", &context)
}

#[get("/flutter")]
/// Integration page embedding the bundle next to its status.
pub async fn show_integration(
    config: web::Data<ServerConfig>,
    bundle: web::Data<BundleMount>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = shell_context(&config, &bundle, "flutter_integration");
    render_template(&tera, "main/integration.html", &context)
}

#[get("/api-status")]
pub async fn show_api_status(
    config: web::Data<ServerConfig>,
    catalog: web::Data<CatalogService>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = load_status_page(catalog.get_ref()).await;

    let mut context = Context::new();
    context.insert("app_name", &config.app.app_name);
    context.insert("status", &data);
    render_template(&tera, "main/api_status.html", &context)
}
