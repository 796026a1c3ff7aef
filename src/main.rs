// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, database, photo storage and start HTTP server

mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;
mod storage;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use db::{PhotoRepository, PhotoStore};
use dotenv::dotenv;
use std::io;
use std::sync::Arc;
use storage::{BlobStore, FsBlobStore};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info,sqlx=warn"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting photos service...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Initialize database connection pool
    let pool = match config::init_db_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    // 5. Initialize photo file storage
    let blobs = match FsBlobStore::new(config.storage_root.clone()).await {
        Ok(blobs) => blobs,
        Err(e) => {
            log::error!("Failed to initialize photo storage: {:#}", e);
            std::process::exit(1);
        }
    };

    let store: Arc<dyn PhotoStore> = Arc::new(PhotoRepository::new(pool));
    let blobs: Arc<dyn BlobStore> = Arc::new(blobs);
    let store = web::Data::from(store);
    let blobs = web::Data::from(blobs);
    let config = web::Data::new(config);

    // 6. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);

    HttpServer::new(move || {
        App::new()
            // Application state (stores and config)
            .app_data(store.clone())
            .app_data(blobs.clone())
            .app_data(config.clone())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .service(web::scope(&config.api_prefix).configure(handlers::photos_config))
    })
    .bind(&server_addr)?
    .run()
    .await
}
