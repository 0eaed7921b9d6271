//! Shared helpers for the integration tests.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
    response::{IntoResponse, Response},
    Router,
};
use holocron::server::{model::app::AppState, router::routes};
use holocron_test_utils::TestContext;
use serde_json::Value;
use tower::ServiceExt;

/// Collect a response body and parse it as JSON
pub async fn body_json(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

/// Turn a handler result into a response, treating errors the way axum would
pub fn into_response<T: IntoResponse, E: IntoResponse>(result: Result<T, E>) -> Response {
    match result {
        Ok(resp) => resp.into_response(),
        Err(err) => err.into_response(),
    }
}

pub trait TestContextExt {
    /// The full application router backed by this context's database
    fn app(&self) -> Router;
}

impl TestContextExt for TestContext {
    fn app(&self) -> Router {
        routes().with_state(self.to_app_state::<AppState>())
    }
}

/// Send a single request through the router, with an optional JSON body
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let request = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    app.clone().oneshot(request).await.unwrap()
}
