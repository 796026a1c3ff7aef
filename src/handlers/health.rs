// src/handlers/health.rs
// DOCUMENTATION: Health check handler
// PURPOSE: Report service status and database reachability

use crate::db::PhotoStore;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

pub async fn health_check(store: web::Data<dyn PhotoStore>) -> impl Responder {
    let (mut response, database) = match store.ping().await {
        Ok(()) => (HttpResponse::Ok(), "ok"),
        Err(_) => (HttpResponse::ServiceUnavailable(), "unavailable"),
    };

    response.json(json!({
        "status": if database == "ok" { "ok" } else { "degraded" },
        "service": "photos-service",
        "version": env!("CARGO_PKG_VERSION"),
        "database": database
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
