mod config;
mod proxy;
mod routes;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use config::ServerConfig;
use proxy::Upstream;
use routes::configure_routes;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    if config.frontend_dir.is_dir() {
        log::info!("Serving frontend from {}", config.frontend_dir.display());
    } else {
        log::warn!(
            "Frontend directory {} does not exist; pages will answer 404 until it is built",
            config.frontend_dir.display()
        );
    }

    match &config.api_upstream {
        Some(upstream) => log::info!("Forwarding API requests to {}", upstream),
        None => log::warn!("API_UPSTREAM is not set; API requests will answer 503"),
    }

    let upstream = Upstream::new(config.api_upstream.clone()).map_err(io::Error::other)?;
    let frontend_dir = config.frontend_dir.clone();
    let bind_address = config.bind_address();

    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::AUTHORIZATION,
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(web::Data::new(upstream.clone()))
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
