//! Videogame catalog and library service over SQLite.

pub mod api;
pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod password;
pub mod state;
pub mod web;

use anyhow::Context;
use axum::Router;
use migration::{Migrator, MigratorTrait};
use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use crate::{config::Config, state::AppState};

pub async fn run() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();

    let db = database::connection::establish_connection(&config.database_url)
        .await
        .context("failed to open the database")?;
    info!("database connection established");

    info!("running migrations");
    Migrator::up(&db, None).await.context("migration failed")?;

    database::seed::seed_if_empty(&db)
        .await
        .context("seeding failed")?;

    let address = format!("0.0.0.0:{}", config.port);
    let state = AppState {
        db: db.clone(),
        config,
    };

    let app = Router::new()
        .merge(api::router())
        .merge(web::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    database::connection::close_connection(db)
        .await
        .context("failed to close the database")?;
    info!("database connection closed");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("failed to install Ctrl+C handler");
        info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
        info!("received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
