use serde::{Deserialize, Serialize};

/// Hands out ids for new lists and todos within one in-memory collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdGenerator {
    next: i32,
}

impl IdGenerator {
    /// Starts above every id in `existing`.
    pub fn after(existing: impl IntoIterator<Item = i32>) -> Self {
        let max = existing.into_iter().max().unwrap_or(0).max(0);
        Self { next: max + 1 }
    }

    pub fn next_id(&mut self) -> i32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self { next: 1 }
    }
}
