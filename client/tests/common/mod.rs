//! In-process stand-in for the remote move endpoint.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use reqwest::Url;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Clone, Debug)]
pub enum Reply {
    Column(usize),
    Status(u16),
    Delayed { delay: Duration, column: usize },
}

#[derive(Clone)]
struct EngineState {
    reply: Reply,
    seen: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

pub struct FakeEngine {
    pub url: Url,
    seen: Arc<Mutex<Vec<HashMap<String, String>>>>,
    server: JoinHandle<()>,
}

impl FakeEngine {
    pub async fn start(reply: Reply) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let state = EngineState {
            reply,
            seen: Arc::clone(&seen),
        };
        let app = Router::new().route("/", get(handle_move)).with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self {
            url: Url::parse(&format!("http://{addr}/")).unwrap(),
            seen,
            server,
        }
    }

    /// Query parameters of every request received so far.
    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.seen.lock().unwrap().clone()
    }
}

impl Drop for FakeEngine {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn handle_move(
    State(state): State<EngineState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.seen.lock().unwrap().push(params);
    match state.reply {
        Reply::Column(column) => Json(serde_json::json!({ "action": column })).into_response(),
        Reply::Status(code) => {
            let status = StatusCode::from_u16(code).unwrap();
            (status, "engine exploded").into_response()
        }
        Reply::Delayed { delay, column } => {
            tokio::time::sleep(delay).await;
            Json(serde_json::json!({ "action": column })).into_response()
        }
    }
}

/// An address nothing listens on.
pub async fn dead_endpoint() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}/")).unwrap()
}
