use std::collections::HashMap;

use crate::auth::password::{PasswordError, hash_password, verify_password};

/// Username to password-hash table backing sign-in for the in-memory store.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    users: HashMap<String, String>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, username: &str, password: &str) -> Result<Self, PasswordError> {
        let hash = hash_password(password)?;
        self.users.insert(username.to_string(), hash);
        Ok(self)
    }

    pub fn verify(&self, username: &str, password: &str) -> bool {
        let Some(hash) = self.users.get(username) else {
            return false;
        };
        match verify_password(password, hash) {
            Ok(matched) => matched,
            Err(err) => {
                tracing::warn!(username, error = %err, "unusable password hash");
                false
            }
        }
    }
}
