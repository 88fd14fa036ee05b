use std::{sync::Arc, time::Duration};

use tokio::{sync::Mutex, time::Instant};
use uuid::Uuid;

use super::flash::Flash;
use crate::store::TodoSlot;

#[derive(Debug)]
struct SessionState {
    username: Option<String>,
    signed_in: bool,
    flashes: Vec<Flash>,
    last_seen: Instant,
}

/// Handle to one browser session. Clones share the same state.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    state: Arc<Mutex<SessionState>>,
    todos: TodoSlot,
}

impl Session {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            state: Arc::new(Mutex::new(SessionState {
                username: None,
                signed_in: false,
                flashes: Vec::new(),
                last_seen: Instant::now(),
            })),
            todos: Arc::new(Mutex::new(None)),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Lists owned by this session when the in-memory store is active.
    pub fn todo_slot(&self) -> TodoSlot {
        Arc::clone(&self.todos)
    }

    pub async fn username(&self) -> Option<String> {
        self.state.lock().await.username.clone()
    }

    pub async fn is_signed_in(&self) -> bool {
        self.state.lock().await.signed_in
    }

    pub async fn sign_in(&self, username: &str) {
        let mut state = self.state.lock().await;
        state.username = Some(username.to_string());
        state.signed_in = true;
    }

    pub async fn sign_out(&self) {
        let mut state = self.state.lock().await;
        state.username = None;
        state.signed_in = false;
    }

    pub async fn flash(&self, flash: Flash) {
        self.state.lock().await.flashes.push(flash);
    }

    /// Drains pending flashes; each message is shown once.
    pub async fn take_flashes(&self) -> Vec<Flash> {
        std::mem::take(&mut self.state.lock().await.flashes)
    }

    pub async fn touch(&self) {
        self.state.lock().await.last_seen = Instant::now();
    }

    pub async fn idle_for(&self) -> Duration {
        self.state.lock().await.last_seen.elapsed()
    }
}
