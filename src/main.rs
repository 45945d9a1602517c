mod config;
mod db;
mod models;
mod routes;
mod services;
mod utils;
mod views;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};

use crate::config::AppConfig;
use crate::services::price_service::{HttpPriceClient, PriceLookup};
use crate::views::Views;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,sqlx=warn".to_string()),
        )
        .init();

    let config = AppConfig::from_env();

    println!("🔌 Connecting to database...");
    let db = db::establish_connection(&config.database_url)
        .await
        .expect("Failed to connect to database");
    db::setup_schema(&db)
        .await
        .expect("Failed to create database schema");
    println!("✅ Database ready!");

    let prices: Arc<dyn PriceLookup> = Arc::new(HttpPriceClient::new(&config.price_api_base));
    let views = Views::new().expect("Failed to load templates");

    println!("🚀 Starting server on http://{}", config.bind_addr);
    let bind_addr = config.bind_addr.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(db.clone()))
            .app_data(web::Data::from(prices.clone()))
            .app_data(web::Data::new(views.clone()))
            .app_data(web::Data::new(config.clone()))
            .configure(routes::configure_routes)
            .default_service(web::to(routes::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
