use anyhow::{Result, bail};

use crate::store::StoreKind;

use super::AppConfig;

const MIN_PASSWORD_LEN: usize = 8;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    if let Some(database) = cfg.database.as_ref() {
        if database.url.trim().is_empty() {
            errors.push("database.url must not be empty".to_string());
        }

        if database.min_idle > database.max_connections {
            errors.push(format!(
                "database.min_idle ({}) must be <= database.max_connections ({})",
                database.min_idle, database.max_connections
            ));
        }
    }

    match cfg.store.kind {
        StoreKind::Postgres if cfg.database.is_none() => {
            errors.push("database section is required when store.kind is postgres".to_string());
        }
        StoreKind::Memory if cfg.auth.is_none() => {
            errors.push("auth section is required when store.kind is memory".to_string());
        }
        _ => {}
    }

    if let Some(auth) = cfg.auth.as_ref() {
        if auth.username.trim().is_empty() {
            errors.push("auth.username must not be empty".to_string());
        }

        if auth.password.len() < MIN_PASSWORD_LEN {
            errors.push(format!(
                "auth.password must be at least {MIN_PASSWORD_LEN} characters"
            ));
        }
    }

    if cfg.session.cookie_name.trim().is_empty() {
        errors.push("session.cookie_name must not be empty".to_string());
    }

    if cfg.session.max_age_days == 0 {
        errors.push("session.max_age_days must be > 0".to_string());
    }

    if cfg.session.prune_interval_secs == 0 {
        errors.push("session.prune_interval_secs must be > 0".to_string());
    }

    if cfg.session.idle_timeout_secs < cfg.session.prune_interval_secs {
        errors.push(
            "session.idle_timeout_secs must be >= session.prune_interval_secs".to_string(),
        );
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::{
        config::{AppConfig, AuthConfig, DatabaseConfig, SchemaMode},
        store::StoreKind,
    };

    fn memory_config() -> AppConfig {
        AppConfig {
            auth: Some(AuthConfig {
                username: "admin".to_string(),
                password: "adminpassword".to_string(),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_memory_store_with_seeded_user() {
        validate(&memory_config()).expect("config should be valid");
    }

    #[test]
    fn postgres_store_requires_database_section() {
        let mut cfg = memory_config();
        cfg.store.kind = StoreKind::Postgres;

        let err = validate(&cfg).expect_err("missing database should fail");
        assert!(err.to_string().contains("database section is required"));
    }

    #[test]
    fn memory_store_requires_auth_section() {
        let cfg = AppConfig::default();

        let err = validate(&cfg).expect_err("missing auth should fail");
        assert!(err.to_string().contains("auth section is required"));
    }

    #[test]
    fn reports_every_problem_at_once() {
        let mut cfg = memory_config();
        cfg.general.host = " ".to_string();
        cfg.database = Some(DatabaseConfig {
            url: String::new(),
            max_connections: 1,
            min_idle: 4,
            schema: SchemaMode::Sync,
        });
        cfg.auth = Some(AuthConfig {
            username: "admin".to_string(),
            password: "short".to_string(),
        });

        let message = validate(&cfg).expect_err("config should fail").to_string();
        assert!(message.contains("general.host"));
        assert!(message.contains("database.url"));
        assert!(message.contains("database.min_idle"));
        assert!(message.contains("auth.password"));
    }
}
