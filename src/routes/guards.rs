use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{error::AppError, session::Session, state::AppState, store::TodoStore};

/// The store bound to the signed-in user of this request.
pub struct CurrentStore(pub Box<dyn TodoStore>);

impl FromRequestParts<Arc<AppState>> for CurrentStore {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        Ok(Self(state.backend.open(&session).await))
    }
}

impl std::ops::Deref for CurrentStore {
    type Target = dyn TodoStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Path ids are parsed by hand so malformed ids answer 404 like unknown ones.
pub fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>().map_err(|_| AppError::not_found())
}
