mod bootstrap;
mod health;
mod web;

use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use stylist_core::config::{AppConfig, LoadOptions};
use tokio::sync::oneshot;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

fn init_logging(config: &AppConfig) {
    use stylist_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    run().await
}

pub async fn run() -> Result<()> {
    let config = AppConfig::load(LoadOptions::default())?;
    init_logging(&config);

    let app = bootstrap::bootstrap(config)?;
    let server = &app.config.server;
    let address = format!("{}:{}", server.bind_address, server.port);
    let grace = Duration::from_secs(server.graceful_shutdown_secs);

    let router = Router::new()
        .merge(web::router(app.web.clone()))
        .merge(health::router(app.favorites.clone()))
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("could not bind {address}"))?;
    info!(
        event_name = "system.server.started",
        bind_address = %address,
        "stylist-server listening"
    );

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let serving = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = stop_rx.await;
            })
            .await
    });

    tokio::signal::ctrl_c().await?;
    info!(
        event_name = "system.server.stopping",
        grace_secs = grace.as_secs(),
        "stylist-server stopping"
    );
    let _ = stop_tx.send(());

    match tokio::time::timeout(grace, serving).await {
        Ok(joined) => joined.context("server task panicked")??,
        Err(_) => warn!(
            event_name = "system.server.shutdown_timeout",
            grace_secs = grace.as_secs(),
            "in-flight requests did not finish before the shutdown deadline"
        ),
    }

    Ok(())
}
