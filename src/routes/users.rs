use std::sync::Arc;

use axum::{
    Form, Router,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};

use super::{
    forms::SigninForm,
    guards::CurrentStore,
    views::{PageContext, SigninTemplate, render},
};
use crate::{
    error::AppError,
    middleware::SIGNIN_PATH,
    session::{Flash, Session},
    state::AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(SIGNIN_PATH, get(signin_form).post(signin))
        .route("/users/signout", post(signout))
}

async fn signin_form(session: Session) -> Result<Html<String>, AppError> {
    session.flash(Flash::info("Please sign in")).await;
    render_signin(&session, String::new()).await
}

async fn signin(
    session: Session,
    store: CurrentStore,
    Form(form): Form<SigninForm>,
) -> Result<Response, AppError> {
    let username = form.username.trim().to_string();

    if !store.authenticate(&username, &form.password).await? {
        tracing::info!(username = %username, "rejected sign-in");
        session.flash(Flash::error("Invalid Credentials")).await;
        return Ok(render_signin(&session, username).await?.into_response());
    }

    session.sign_in(&username).await;
    session.flash(Flash::success("Welcome!")).await;
    tracing::info!(username = %username, "signed in");
    Ok(Redirect::to("/lists").into_response())
}

async fn signout(session: Session) -> Redirect {
    session.sign_out().await;
    Redirect::to(SIGNIN_PATH)
}

async fn render_signin(session: &Session, username: String) -> Result<Html<String>, AppError> {
    render(&SigninTemplate {
        page: PageContext::take(session).await,
        username,
    })
}
