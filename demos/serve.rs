//! Minimal server showing the error types in handlers.
//!
//! Run with `cargo run --example serve`, then try:
//!   curl -i localhost:8080/cards/7
//!   curl -i localhost:8080/flaky

use anyhow::Result;
use axum::{extract::Path, routing::get, Json, Router};
use serde_json::{json, Value};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use httperror::{http_error, AppError};

async fn get_card(Path(id): Path<u64>) -> Result<Json<Value>, AppError> {
    if id == 0 {
        return Err(http_error!(400, "card ids start at 1").into());
    }
    Err(http_error!(404, "no card with id {}", id).into())
}

async fn flaky() -> Result<Json<Value>, AppError> {
    // An opaque failure from a deeper layer; answered with a generic 500.
    Err(anyhow::anyhow!("connection pool exhausted").into())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,httperror=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = Router::new()
        .route("/health", get(health))
        .route("/cards/:id", get(get_card))
        .route("/flaky", get(flaky));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
