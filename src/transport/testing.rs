//! Test doubles for transports.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Mutex;

use axum::Json;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Redirect};
use axum::routing::get;

use super::{Response, Transport};
use crate::error::Result;

/// Returns canned responses keyed by URL and records every requested URL.
///
/// Unknown URLs are answered with `404 Not Found`.
#[derive(Debug, Default)]
pub(crate) struct RecordingTransport {
    responses: HashMap<String, Response>,
    requests: Mutex<Vec<String>>,
}

impl RecordingTransport {
    pub(crate) fn with_response(mut self, url: &str, response: Response) -> Self {
        self.responses.insert(url.to_owned(), response);
        self
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for RecordingTransport {
    async fn get(&self, url: &str) -> Result<Response> {
        self.requests.lock().unwrap().push(url.to_owned());
        Ok(self.responses.get(url).cloned().unwrap_or_else(|| {
            Response::new(reqwest::StatusCode::NOT_FOUND, Vec::new())
        }))
    }
}

/// Serves a minimal cAdvisor look-alike on an ephemeral local port.
pub(crate) async fn spawn_fake_cadvisor() -> SocketAddr {
    let router = axum::Router::new()
        .route(
            "/v1.3/machine",
            get(|| async { Json(serde_json::json!({"num_cores": 4, "memory_capacity": 8192})) }),
        )
        .route(
            "/v1.3/spec/{id}",
            get(|axum::extract::Path(id): axum::extract::Path<String>| async move {
                Json(serde_json::json!({"id": id, "has_cpu": true}))
            }),
        )
        .route(
            "/v1.3/stats/",
            get(|| async { Json(serde_json::json!({"/": [], "/docker": []})) }),
        )
        .route(
            "/v1.3/stats/{id}",
            get(|axum::extract::Path(id): axum::extract::Path<String>| async move {
                if id == "missing" {
                    return (StatusCode::NOT_FOUND, "unknown container").into_response();
                }
                Json(serde_json::json!({"id": id, "stats": []})).into_response()
            }),
        )
        .route(
            "/v1.3/old-machine",
            get(|| async { Redirect::permanent("/v1.3/machine") }),
        )
        .route(
            "/v1.3/host",
            get(|headers: HeaderMap| async move {
                let host = headers
                    .get(header::HOST)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or_default()
                    .to_owned();
                Json(serde_json::json!({"host": host}))
            }),
        )
        .route("/v1.3/garbage", get(|| async { "not json" }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake cAdvisor listener");
    let addr = listener.local_addr().expect("fake cAdvisor local address");
    tokio::spawn(async move {
        axum::serve(listener, router.into_make_service())
            .await
            .unwrap()
    });
    addr
}
