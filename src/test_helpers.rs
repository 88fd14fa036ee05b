use std::{sync::Arc, time::Duration};

use axum::Router;
use sea_orm::DatabaseConnection;

use crate::{
    config::{AppConfig, AuthConfig, StoreConfig},
    db::executor::QueryExecutor,
    routes::router,
    session::SessionStore,
    state::AppState,
    store::{Credentials, StoreBackend, StoreKind},
};

pub const TEST_USERNAME: &str = "admin";
pub const TEST_PASSWORD: &str = "adminpassword";

pub fn test_config() -> AppConfig {
    AppConfig {
        auth: Some(AuthConfig {
            username: TEST_USERNAME.to_string(),
            password: TEST_PASSWORD.to_string(),
        }),
        ..Default::default()
    }
}

/// In-memory backend with the test user seeded.
pub fn test_state() -> Arc<AppState> {
    let cfg = test_config();
    let credentials = Credentials::new()
        .with_user(TEST_USERNAME, TEST_PASSWORD)
        .expect("hash test password");
    let sessions = SessionStore::new(Duration::from_secs(cfg.session.idle_timeout_secs));
    AppState::new(cfg, StoreBackend::memory(credentials), sessions)
}

/// Postgres backend over a prepared mock connection.
pub fn mock_pg_state(db: DatabaseConnection) -> Arc<AppState> {
    let mut cfg = test_config();
    cfg.store = StoreConfig {
        kind: StoreKind::Postgres,
    };
    let sessions = SessionStore::new(Duration::from_secs(cfg.session.idle_timeout_secs));
    AppState::new(cfg, StoreBackend::postgres(QueryExecutor::new(db)), sessions)
}

pub fn test_router() -> Router {
    router(test_state())
}
