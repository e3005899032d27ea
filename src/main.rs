mod web;

use std::sync::Arc;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use tracing_subscriber::EnvFilter;

use cs_courses::config::AppConfig;
use cs_courses::services::ClerkIdentityProvider;

use crate::web::AppState;
use crate::web::handlers;
use crate::web::middleware::SecurityHeaders;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,actix_web=info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            log::error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let provider = Arc::new(ClerkIdentityProvider::new(config.identity.clone()));
    let bind_addr = config.bind_addr.clone();
    let static_dir = config.static_dir.clone();
    let pkg_dir = config.pkg_dir.clone();
    let state = Data::new(AppState::new(config, provider));

    log::info!("serving {} and {} on {}", static_dir, pkg_dir, bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(SecurityHeaders)
            .wrap(Logger::default())
            .configure(handlers::configure)
            .service(Files::new("/static", &static_dir).prefer_utf8(true))
            .service(Files::new("/pkg", &pkg_dir))
            .service(Files::new("/c++", format!("{static_dir}/c++")))
            .default_service(actix_web::web::to(handlers::spa::client_shell))
    })
    .bind(bind_addr)?
    .run()
    .await
}
