#![allow(dead_code)]

use axum::{
    Router,
    body::{self, Body},
    http::{Request, Response, header},
};
use tower::ServiceExt; // for `oneshot`

use todo_lists::test_helpers::{TEST_PASSWORD, TEST_USERNAME, test_router};

/// Replays the session cookie across requests like a browser would.
pub struct Browser {
    app: Router,
    cookie: Option<String>,
}

impl Browser {
    pub fn new() -> Self {
        Self::with_router(test_router())
    }

    pub fn with_router(app: Router) -> Self {
        Self { app, cookie: None }
    }

    pub async fn sign_in(&mut self) {
        let res = self
            .post_form(
                "/users/signin",
                &format!("username={TEST_USERNAME}&password={TEST_PASSWORD}"),
            )
            .await;
        assert_eq!(location(&res), "/lists", "sign-in should succeed");
    }

    pub async fn send(&mut self, mut req: Request<Body>) -> Response<Body> {
        if let Some(cookie) = &self.cookie {
            req.headers_mut()
                .insert(header::COOKIE, cookie.parse().unwrap());
        }
        let res = self.app.clone().oneshot(req).await.unwrap();
        if let Some(set_cookie) = res.headers().get(header::SET_COOKIE) {
            let pair = set_cookie.to_str().unwrap().split(';').next().unwrap();
            self.cookie = Some(pair.to_string());
        }
        res
    }

    pub async fn get(&mut self, uri: &str) -> Response<Body> {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_form(&mut self, uri: &str, form: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
    }
}

pub async fn body_text(res: Response<Body>) -> String {
    let bytes = body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(res: &Response<Body>) -> &str {
    res.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
}

