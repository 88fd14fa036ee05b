pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: i64 = 3000;
pub const DEFAULT_RUST_LOG: &str = "info,tower_http=info,todo_lists::db=debug";
pub const DEFAULT_DB_MAX_CONNECTIONS: i64 = 10;
pub const DEFAULT_DB_MIN_IDLE: i64 = 2;
pub const DEFAULT_SESSION_COOKIE: &str = "todos-session-id";
pub const DEFAULT_SESSION_MAX_AGE_DAYS: i64 = 31;
pub const DEFAULT_SESSION_IDLE_TIMEOUT_SECS: i64 = 31 * 24 * 60 * 60;
pub const DEFAULT_SESSION_PRUNE_INTERVAL_SECS: i64 = 10 * 60;
