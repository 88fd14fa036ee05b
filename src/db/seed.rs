use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::{
    auth::password::hash_password,
    config::AuthConfig,
    db::entities::{prelude::User, user},
};

/// Ensures the configured user can sign in against the relational store.
pub async fn seed_user(db: &DatabaseConnection, cfg: &AuthConfig) -> anyhow::Result<()> {
    if let Some(existing) = User::find_by_id(cfg.username.clone()).one(db).await? {
        tracing::info!("user already present: {}", existing.username);
        return Ok(());
    }

    let hash =
        hash_password(&cfg.password).map_err(|e| anyhow::anyhow!("user seed hash error: {e}"))?;
    let created = user::ActiveModel {
        username: Set(cfg.username.clone()),
        password: Set(hash),
        ..Default::default()
    }
    .insert(db)
    .await?;
    tracing::info!("seeded user {}", created.username);
    Ok(())
}
