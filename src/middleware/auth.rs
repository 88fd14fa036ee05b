use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::session::Session;

pub const SIGNIN_PATH: &str = "/users/signin";

/// Sends signed-out visitors to the sign-in page.
pub async fn require_signin(session: Session, req: Request, next: Next) -> Response {
    if session.is_signed_in().await {
        return next.run(req).await;
    }
    tracing::debug!(path = %req.uri().path(), "redirecting signed-out request");
    Redirect::to(SIGNIN_PATH).into_response()
}
