mod routes;
mod controllers;
mod services;
mod models;
mod api_docs;
mod config;

use std::net::SocketAddr;
use axum::{routing::get, response::Html, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::Scalar;

use crate::api_docs::ApiDoc;
use crate::config::Config;
use crate::controllers::calc_controller::root;
use crate::routes::calc_routes::api_routes;

/// Assemble the full application router. The sizing frontend is served
/// from another origin, so CORS stays wide open.
pub fn app() -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/api", api_routes())
        .route("/scalar", get(|| async {
            Html(Scalar::new(ApiDoc::openapi()).to_html())
        }))
        .layer(CorsLayer::permissive())
}

#[tokio::main]
async fn main() {
    // 1. Load configuration
    let config = Config::from_env();

    // 2. Start Axum HTTP server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    println!("SolarCalc backend listening on http://{}", addr);
    println!("Scalar UI: http://{}/scalar", addr);

    if let Err(e) = axum_server::bind(addr)
        .serve(app().into_make_service())
        .await
    {
        eprintln!("HTTP server error: {}", e);
    }
}
