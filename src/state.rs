use std::sync::Arc;

use crate::{config::AppConfig, session::SessionStore, store::StoreBackend};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub backend: StoreBackend,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: AppConfig, backend: StoreBackend, sessions: SessionStore) -> Arc<Self> {
        Arc::new(Self {
            config,
            backend,
            sessions,
        })
    }
}
