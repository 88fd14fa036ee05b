use std::{path::PathBuf, sync::Arc};

use axum::{Router, response::Redirect, routing::get};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route_service("/{*file}", ServeDir::new(resolve_public_dir()))
}

async fn index() -> Redirect {
    Redirect::to("/lists")
}

fn resolve_public_dir() -> PathBuf {
    if let Ok(current_dir) = std::env::current_dir() {
        let candidate = current_dir.join("public");
        if candidate.exists() {
            return candidate;
        }
    }

    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public")
}
