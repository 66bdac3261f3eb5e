//! Single binary web server for the room API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so phones on the same network can reach it.
//! Override with env: HOST, PORT. Set DATA_DIR to keep rooms on disk, PLAYERS
//! for the roster (comma-separated, four names).

use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use padel_scorecard::api::{self, ApiState};
use padel_scorecard::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    match &config.data_dir {
        Some(dir) => log::info!("Storing rooms as JSON files in {}", dir.display()),
        None => log::info!("Storing rooms in memory (set DATA_DIR to persist)"),
    }
    log::info!("Players: {}", config.roster.names().join(", "));

    let state = Data::new(ApiState::new(config.build_store(), config.roster.clone()));

    let bind = (config.host.as_str(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(api::configure)
    })
    .bind(bind)?
    .run()
    .await
}
