use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbBackend, DbErr, QueryResult, Statement, Value,
};

/// Runs parameterized SQL against the pool, logging every statement.
#[derive(Clone)]
pub struct QueryExecutor {
    db: DatabaseConnection,
}

impl QueryExecutor {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    fn statement(sql: &str, values: Vec<Value>) -> Statement {
        tracing::debug!(statement = sql, parameters = ?values, "executing sql");
        Statement::from_sql_and_values(DbBackend::Postgres, sql, values)
    }

    pub async fn query_all(
        &self,
        sql: &str,
        values: Vec<Value>,
    ) -> Result<Vec<QueryResult>, DbErr> {
        let stmt = Self::statement(sql, values);
        self.db.query_all_raw(stmt).await
    }

    pub async fn query_one(
        &self,
        sql: &str,
        values: Vec<Value>,
    ) -> Result<Option<QueryResult>, DbErr> {
        let stmt = Self::statement(sql, values);
        self.db.query_one_raw(stmt).await
    }

    /// Returns the number of rows the statement touched.
    pub async fn execute(
        &self,
        sql: &str,
        values: Vec<Value>,
    ) -> Result<u64, DbErr> {
        let stmt = Self::statement(sql, values);
        Ok(self.db.execute_raw(stmt).await?.rows_affected())
    }
}
