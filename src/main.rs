use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;
use tera::Tera;

use designwear_web::config::ServerConfig;
use designwear_web::routes::api_scope;
use designwear_web::routes::flutter::flutter_env;
use designwear_web::routes::main::{show_api_status, show_index, show_integration};
use designwear_web::services::catalog::CatalogService;
use designwear_web::shell::BundleMount;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let address = config.address.clone();
    let port = config.port;

    let tera = match Tera::new(&config.templates) {
        Ok(t) => t,
        Err(e) => {
            log::error!("Parsing error(s): {e}");
            std::process::exit(1);
        }
    };

    let catalog = web::Data::new(CatalogService::from_config(&config));
    if !catalog.is_configured() {
        log::warn!("Serving sample catalog data until SANITY_PROJECT_ID is set");
    }

    let bundle = web::Data::new(BundleMount::new(config.bundle.clone()));
    if let Err(err) = bundle.mount().await {
        log::warn!("Client bundle unavailable: {err}");
    }
    let bundle_mounted = bundle.is_mounted();

    let config = web::Data::new(config);
    let server_bundle = bundle.clone();

    log::info!("Listening on http://{address}:{port}");

    HttpServer::new(move || {
        let mut app = App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(tera.clone()))
            .app_data(catalog.clone())
            .app_data(config.clone())
            .app_data(server_bundle.clone())
            .service(api_scope())
            .route(
                "/flutter-assets/assets/assets/.env",
                web::get().to(flutter_env),
            );

        if bundle_mounted {
            app = app.service(
                web::scope("/flutter-assets")
                    .wrap(middleware::DefaultHeaders::new().add((
                        header::CACHE_CONTROL,
                        "public, max-age=3600, immutable",
                    )))
                    .service(server_bundle.files()),
            );
        }

        app.service(show_index)
            .service(show_integration)
            .service(show_api_status)
    })
    .bind((address, port))?
    .run()
    .await?;

    bundle.unmount();
    Ok(())
}
