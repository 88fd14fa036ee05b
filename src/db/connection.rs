use std::time::Duration;

use anyhow::{Context, bail};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement,
};

use crate::config::{DatabaseConfig, SchemaMode};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

const TABLES_PRESENT: &str = "\
    SELECT to_regclass('users') IS NOT NULL \
       AND to_regclass('todolists') IS NOT NULL \
       AND to_regclass('todos') IS NOT NULL AS ready";

/// Opens the pool and makes sure the three tables the store queries exist.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(connect_options(cfg))
        .await
        .context("failed to connect to postgres")?;
    prepare_schema(&db, cfg.schema).await?;
    Ok(db)
}

fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut options = ConnectOptions::new(cfg.url.clone());
    // statements are logged by QueryExecutor with their parameters
    options
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_idle)
        .connect_timeout(CONNECT_TIMEOUT)
        .sqlx_logging(false);
    options
}

pub async fn prepare_schema(db: &DatabaseConnection, mode: SchemaMode) -> anyhow::Result<()> {
    match mode {
        SchemaMode::Sync => {
            tracing::info!("syncing users, todolists and todos from entities");
            db.get_schema_registry("todo_lists::db::entities::*")
                .sync(db)
                .await
                .context("schema sync failed")?;
        }
        SchemaMode::External => {
            let row = db
                .query_one_raw(Statement::from_string(DbBackend::Postgres, TABLES_PRESENT))
                .await
                .context("failed to inspect database schema")?;
            let ready = match row {
                Some(row) => row.try_get::<bool>("", "ready")?,
                None => false,
            };
            if !ready {
                bail!("database schema is missing; apply schema.sql or set database.schema=sync");
            }
            tracing::info!("using externally managed schema");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sea_orm::{DatabaseBackend, MockDatabase, Value};

    use super::{connect_options, prepare_schema};
    use crate::config::{DatabaseConfig, SchemaMode};

    fn tables_row(ready: bool) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("ready", Value::from(ready))])
    }

    #[test]
    fn pool_limits_come_from_config() {
        let cfg = DatabaseConfig {
            url: "postgres://localhost/todo_lists".to_string(),
            max_connections: 7,
            min_idle: 3,
            schema: SchemaMode::External,
        };
        let options = connect_options(&cfg);

        assert_eq!(options.get_url(), "postgres://localhost/todo_lists");
        assert_eq!(options.get_max_connections(), Some(7));
        assert_eq!(options.get_min_connections(), Some(3));
    }

    #[tokio::test]
    async fn external_schema_is_accepted_when_tables_exist() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[tables_row(true)]])
            .into_connection();

        prepare_schema(&db, SchemaMode::External)
            .await
            .expect("tables present");
    }

    #[tokio::test]
    async fn external_schema_reports_missing_tables() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[tables_row(false)]])
            .into_connection();

        let err = prepare_schema(&db, SchemaMode::External)
            .await
            .expect_err("tables missing");
        assert!(err.to_string().contains("schema.sql"));
    }
}
