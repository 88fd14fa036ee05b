use std::{collections::HashMap, sync::Arc, time::Duration};

use tokio::{sync::RwLock, task::JoinHandle};
use uuid::Uuid;

use super::state::Session;
use crate::config::SessionConfig;

/// Registry of live sessions keyed by cookie id.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout,
        }
    }

    pub fn from_config(cfg: &SessionConfig) -> Self {
        Self::new(Duration::from_secs(cfg.idle_timeout_secs))
    }

    /// Returns the session for `id`, or a fresh one when the id is unknown.
    /// The flag is `true` when a new session was created.
    pub async fn resolve(&self, id: Option<Uuid>) -> (Session, bool) {
        let existing = match id {
            Some(id) => self.get(id).await,
            None => None,
        };
        if let Some(session) = existing {
            session.touch().await;
            return (session, false);
        }

        let session = Session::new(Uuid::new_v4());
        self.sessions
            .write()
            .await
            .insert(session.id(), session.clone());
        tracing::debug!(session_id = %session.id(), "created session");
        (session, true)
    }

    pub async fn get(&self, id: Uuid) -> Option<Session> {
        self.sessions.read().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Drops sessions idle for longer than the configured timeout.
    pub async fn prune_idle(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let mut expired = Vec::new();
        for (id, session) in sessions.iter() {
            if session.idle_for().await > self.idle_timeout {
                expired.push(*id);
            }
        }
        for id in &expired {
            sessions.remove(id);
        }
        expired.len()
    }

    pub fn spawn_pruner(&self, every: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let pruned = store.prune_idle().await;
                if pruned > 0 {
                    tracing::info!(pruned, "pruned idle sessions");
                }
            }
        })
    }
}
