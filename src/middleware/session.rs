use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use uuid::Uuid;

use crate::{config::SessionConfig, error::AppError, session::Session, state::AppState};

/// Attaches the caller's [`Session`] to the request, issuing a cookie for new
/// sessions.
pub async fn session_layer(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let cfg = &state.config.session;
    let presented = jar
        .get(&cfg.cookie_name)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());

    let (session, created) = state.sessions.resolve(presented).await;
    req.extensions_mut().insert(session.clone());

    let response = next.run(req).await;
    if created {
        (jar.add(session_cookie(cfg, session.id())), response).into_response()
    } else {
        response
    }
}

fn session_cookie(cfg: &SessionConfig, id: Uuid) -> Cookie<'static> {
    Cookie::build((cfg.cookie_name.clone(), id.to_string()))
        .path("/")
        .http_only(true)
        .secure(false)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::days(i64::from(cfg.max_age_days)))
        .build()
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::internal("session layer is not installed"))
    }
}
