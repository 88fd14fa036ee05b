use argon2::{
    Argon2,
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand::thread_rng;
use thiserror::Error;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("password must be at least 8 characters")]
    TooShort,
    #[error("password hashing failed: {0}")]
    Hash(password_hash::Error),
    #[error("stored password hash is unusable: {0}")]
    MalformedHash(password_hash::Error),
}

/// Produces a salted argon2 PHC string.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(PasswordError::TooShort);
    }

    let salt = SaltString::generate(&mut thread_rng());
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(PasswordError::Hash)?
        .to_string();
    Ok(hash)
}

/// `Ok(false)` on mismatch; `Err` when `hash` is not an argon2 hash this
/// build can check.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(hash).map_err(PasswordError::MalformedHash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(err) => Err(PasswordError::MalformedHash(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::{PasswordError, hash_password, verify_password};

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("correct horse").expect("hash should succeed");
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("correct horse", &hash).expect("hash should parse"));
        assert!(!verify_password("wrong horse", &hash).expect("hash should parse"));
    }

    #[test]
    fn rejects_short_passwords() {
        assert!(matches!(hash_password("short"), Err(PasswordError::TooShort)));
    }

    #[test]
    fn hashes_from_other_schemes_are_errors_not_mismatches() {
        let pbkdf2 = "$pbkdf2-sha256$i=1000$c2FsdHNhbHQ$aGFzaGhhc2hoYXNoaGFzaA";
        let err = verify_password("anything", pbkdf2).expect_err("should fail");
        assert!(matches!(err, PasswordError::MalformedHash(_)));
    }

    #[test]
    fn malformed_hash_is_an_error() {
        let err = verify_password("anything", "not-a-phc-string").expect_err("should fail");
        assert!(matches!(err, PasswordError::MalformedHash(_)));
    }
}
