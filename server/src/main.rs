//! Items server: reads `DB_*` from the environment (or `.env`), bootstraps the
//! database, and serves the API on `0.0.0.0:8080`.
//!
//! Run from repo root: `cargo run -p items-server`

use items_service::{bootstrap, build_app, AppState, CorsPolicy, DbConfig, ServerConfig};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("items_service=info,items_server=info,tower_http=info")
            }),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("startup failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let db = DbConfig::from_env()?;
    let server = ServerConfig::default();

    let pool = bootstrap(&db).await?;
    let app = build_app(AppState::from_pool(pool), &server, CorsPolicy::permissive());

    let listener = TcpListener::bind(server.addr).await?;
    tracing::info!("backend listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
