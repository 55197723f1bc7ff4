use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, ServerConfig};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use service::store::{RecordStore, SeaOrmRecordStore};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", server.host, server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {}:{}: {e}", server.host, server.port)))
}

/// Connect to the configured database, apply migrations and wrap the pool
/// in a record store.
pub async fn build_state(cfg: &AppConfig) -> Result<ServerState, StartupError> {
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    models::db::migrate(&db)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    let store: Arc<dyn RecordStore> = Arc::new(SeaOrmRecordStore::new(db));
    Ok(ServerState::new(store))
}

/// Router with the default middleware stack.
pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

/// Public entry: build the app and serve until `shutdown` resolves.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = bind_addr(&cfg.server)?;
    let state = build_state(&cfg).await?;
    let app = build_app(state);

    info!(%addr, sqlite = cfg.database.is_sqlite(), "starting user registry");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| StartupError::InvalidConfig(format!("cannot bind {addr}: {e}")))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| StartupError::Any(e.into()))?;
    info!("server stopped accepting connections");
    Ok(())
}

/// Resolve once `signal` fires. If the listener itself fails, never resolve,
/// so the server keeps running instead of stopping right after start.
pub async fn shutdown_on<F, E>(signal: F)
where
    F: Future<Output = Result<(), E>>,
    E: std::fmt::Display,
{
    if let Err(e) = signal.await {
        error!(service = "server", event = "signal_listen_failed", error = %e, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn shutdown_resolves_on_signal() {
        let done = tokio::time::timeout(
            Duration::from_millis(200),
            shutdown_on(async { Ok::<(), std::io::Error>(()) }),
        )
        .await;
        assert!(done.is_ok());
    }

    #[tokio::test]
    async fn failed_signal_listener_keeps_serving() {
        let failing = async { Err::<(), _>(std::io::Error::other("no signal handler")) };
        let done = tokio::time::timeout(Duration::from_millis(50), shutdown_on(failing)).await;
        assert!(done.is_err(), "shutdown must not resolve when the listener fails");
    }

    #[test]
    fn bind_addr_from_config() {
        let s = ServerConfig { host: "127.0.0.1".into(), port: 5000, worker_threads: None };
        assert_eq!(bind_addr(&s).unwrap().port(), 5000);
    }

    #[test]
    fn bind_addr_rejects_hostname() {
        let s = ServerConfig { host: "not a host".into(), port: 5000, worker_threads: None };
        assert!(matches!(bind_addr(&s), Err(StartupError::InvalidConfig(_))));
    }
}
