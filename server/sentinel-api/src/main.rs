//! Binary entrypoint for the Sentinel API.

use axum::{routing::get, routing::post, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use sentinel_api::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
  let port: u16 = std::env::var("PORT")
    .unwrap_or_else(|_| "8000".into())
    .parse()
    .expect("PORT must be a valid u16");

  let pool = sqlx::PgPool::connect(&database_url).await?;
  let state = Arc::new(AppState { pool });

  let app = Router::new()
    .route("/health", get(sentinel_api::health))
    .route("/api/compliance-check", post(sentinel_api::compliance_check))
    .route("/api/risk-score", post(sentinel_api::risk_score))
    .route("/api/analyze", post(sentinel_api::analyze_commit))
    .route("/api/history", get(sentinel_api::history))
    .route("/api/export.csv", get(sentinel_api::export_csv))
    .layer(CorsLayer::permissive())
    .with_state(state);

  let addr = SocketAddr::from(([127, 0, 0, 1], port));
  println!("sentinel-api listening on http://{}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
