use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::{error, info};

use crate::files::types::IndexStats;
use crate::files::FileIndex;

pub const RUNNING_TEXT: &str = "File index bot is running.";

pub fn router(index: Arc<FileIndex>) -> Router {
    Router::new()
        .route("/", get(running))
        .route("/status", get(status))
        .with_state(index)
}

async fn running() -> &'static str {
    RUNNING_TEXT
}

#[derive(Serialize)]
struct Status {
    status: &'static str,
    #[serde(flatten)]
    stats: IndexStats,
}

async fn status(State(index): State<Arc<FileIndex>>) -> Json<Status> {
    Json(Status {
        status: "ok",
        stats: index.stats().await,
    })
}

/// Bind the health server and serve it on a background task.
pub async fn spawn(index: Arc<FileIndex>, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind health endpoint on {}", addr))?;
    info!(%addr, "Health endpoint listening");

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router(index)).await {
            error!("Health endpoint stopped: {}", e);
        }
    });
    Ok(())
}
