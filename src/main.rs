use actix_web::{web, App, HttpServer};
use auth_api::config::EnvConfig;
use auth_api::db;
use auth_api::routes::configure_routes;
use auth_api::services::credentials::CredentialService;
use log::warn;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    if config.database_url.is_empty() {
        warn!("DATABASE_URL is not set; credential requests will fail until it is configured");
    } else if let Err(e) = db::migrate(&config.database_url).await {
        warn!("Startup migration failed: {}", e);
    }

    let service = CredentialService::new(config);

    println!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(service.clone()))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
