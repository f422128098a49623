use std::io;

use actix_web::{App, HttpServer, middleware, web};
use env_logger::Env;

use trivia_api::db::{establish_connection_pool, run_pending_migrations};
use trivia_api::models::config::ServerConfig;
use trivia_api::repository::DieselRepository;
use trivia_api::routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let server_config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            return Err(io::Error::other(e));
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            return Err(io::Error::other(e));
        }
    };

    if let Err(e) = run_pending_migrations(&pool) {
        log::error!("Failed to run migrations: {e}");
        return Err(io::Error::other(e));
    }

    let repo = web::Data::new(DieselRepository::new(pool));
    let bind_address = (server_config.address.clone(), server_config.port);
    let server_config = web::Data::new(server_config);

    log::info!(
        "Starting trivia API at http://{}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .wrap(routes::cors_headers())
            .wrap(middleware::Logger::default())
            .app_data(repo.clone())
            .app_data(server_config.clone())
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
    })
    .bind(bind_address)?
    .run()
    .await
}
