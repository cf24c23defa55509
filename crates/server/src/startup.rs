use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::Router;
use common::env::frontend_available;
use configs::{AppConfig, DatabaseConfig, StorageBackend};
use migration::MigratorTrait;
use tokio::net::TcpListener;
use service::records::{InMemoryRecordRepository, RecordRepository, SeaOrmRecordRepository};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{routes, state::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Open the configured record store; Postgres is migrated before use.
pub async fn build_repository(cfg: &DatabaseConfig) -> anyhow::Result<Arc<dyn RecordRepository>> {
    match cfg.backend {
        StorageBackend::Postgres => {
            let db = models::db::connect_with_config(cfg).await?;
            migration::Migrator::up(&db, None).await?;
            info!("database migrations applied");
            Ok(Arc::new(SeaOrmRecordRepository::new(db)))
        }
        StorageBackend::Memory => {
            warn!("using in-memory storage; records are lost on restart");
            Ok(Arc::new(InMemoryRecordRepository::new()))
        }
    }
}

/// Build the app for `cfg` without binding a socket.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let repo = build_repository(&cfg.database).await?;
    let frontend_dir = &cfg.server.frontend_dir;
    let frontend = frontend_available(frontend_dir).await.then_some(frontend_dir.as_str());
    Ok(routes::build_router(ServerState::new(repo), build_cors(), frontend))
}

/// Serve `app` on `listener` until `shutdown` resolves, then stop accepting
/// and let in-flight requests finish.
pub async fn serve_until<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await
}

/// Build the app for `cfg`, bind the configured address and serve until
/// `shutdown` resolves.
pub async fn serve<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&cfg).await?;
    let addr = bind_addr(&cfg)?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, backend = ?cfg.database.backend, "lava-rapido listening");
    serve_until(listener, app, shutdown).await?;
    info!("in-flight requests drained");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "ctrl_c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!(signal = "ctrl_c", "shutdown requested"),
        _ = terminate => info!(signal = "sigterm", "shutdown requested"),
    }
}
