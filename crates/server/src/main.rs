mod api;
mod dto;
mod state;

use crate::state::AppState;
use axum::routing::get;
use std::{sync::Arc, time::Instant};
use tracing::{error, info};

const DEFAULT_PORT: u32 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let args: Vec<_> = std::env::args().collect();
    if args.len() < 2 {
        error!("Missing gazetteer data file");
        std::process::exit(1);
    }
    let path = match std::path::Path::new(&args[1]).canonicalize() {
        Ok(path) => path,
        Err(err) => {
            error!("Bad data path {}: {err}", args[1]);
            std::process::exit(1);
        }
    };

    info!("Loading data...");
    let now = Instant::now();
    let repository = match AppState::load_repository(&path) {
        Ok(repository) => repository,
        Err(err) => {
            error!("Failed to load gazetteer data: {err}");
            std::process::exit(1);
        }
    };
    info!(
        "Loading {} records took {:?}",
        repository.len(),
        now.elapsed()
    );
    let state = Arc::new(AppState::new(path, repository));

    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u32>().ok())
        .unwrap_or(DEFAULT_PORT);

    let app = axum::Router::new()
        .route("/suggestions", get(api::suggestions))
        .route("/data/age", get(api::age))
        .route("/data/fetch", get(api::fetch_url))
        .with_state(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .unwrap();
    info!("Listening to port {port}");
    axum::serve(listener, app).await.unwrap();
}
