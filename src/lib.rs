pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod state;
pub mod store;
pub mod test_helpers;
