use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::Context;
use tower_http::trace::TraceLayer;

use todo_lists::{
    config::AppConfig,
    db::{connection, executor::QueryExecutor, seed::seed_user},
    logging::init_tracing,
    middleware::catch_panic_layer,
    routes::router,
    session::SessionStore,
    state::AppState,
    store::{Credentials, StoreBackend, StoreKind},
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("server failed: {err:?}");
        eprintln!("server failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env()?;
    init_tracing(&cfg.logging)?;

    let backend = build_backend(&cfg).await?;
    tracing::info!(store = backend.kind().as_str(), "store ready");

    let sessions = SessionStore::from_config(&cfg.session);
    sessions.spawn_pruner(Duration::from_secs(cfg.session.prune_interval_secs));

    let state = AppState::new(cfg, backend, sessions);

    let app = router(Arc::clone(&state))
        .layer(catch_panic_layer())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", state.config.general.host, state.config.general.port)
        .parse()
        .context("invalid host/port")?;
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn build_backend(cfg: &AppConfig) -> anyhow::Result<StoreBackend> {
    match cfg.store.kind {
        StoreKind::Memory => {
            let mut credentials = Credentials::new();
            if let Some(auth) = &cfg.auth {
                credentials = credentials
                    .with_user(&auth.username, &auth.password)
                    .map_err(|e| anyhow::anyhow!("user seed hash error: {e}"))?;
            }
            Ok(StoreBackend::memory(credentials))
        }
        StoreKind::Postgres => {
            let db_cfg = cfg
                .database
                .as_ref()
                .context("database config is required for the postgres store")?;
            let db = connection::connect(db_cfg).await?;
            if let Some(auth) = &cfg.auth {
                seed_user(&db, auth).await?;
            }
            Ok(StoreBackend::postgres(QueryExecutor::new(db)))
        }
    }
}
