use std::sync::Arc;

use axum::{Router, middleware};

use crate::{
    middleware::{require_signin, session_layer},
    state::AppState,
};

pub mod forms;
pub mod guards;
mod lists;
mod public;
mod todos;
mod users;
pub mod views;

pub use guards::CurrentStore;

pub fn router(state: Arc<AppState>) -> Router {
    let signed_in = Router::new()
        .merge(lists::router())
        .merge(todos::router())
        .route_layer(middleware::from_fn(require_signin));

    Router::new()
        .merge(signed_in)
        .merge(users::router())
        .merge(public::router())
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            session_layer,
        ))
        .with_state(state)
}
