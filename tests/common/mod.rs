//! Shared utilities for integration testing.

use axum::extract::Json;
use axum::http::{StatusCode, Uri};
use axum::Router;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// A running mock backend and every request it received.
#[derive(Clone)]
pub struct MockServer {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<(String, Value)>>>,
}

impl MockServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// `(path, json body)` pairs in arrival order.
    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|(path, _)| path).collect()
    }

    /// JSON-RPC method names in arrival order.
    #[allow(dead_code)]
    pub fn rpc_methods(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter_map(|(_, body)| body["method"].as_str().map(str::to_string))
            .collect()
    }
}

/// Start a programmable JSON backend on an ephemeral port.
///
/// `f` receives the request path and JSON body and returns a status and JSON body.
pub async fn start_programmable_backend<F>(f: F) -> MockServer
where
    F: Fn(&str, &Value) -> (u16, Value) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let f = Arc::new(f);

    let recorded = requests.clone();
    let app = Router::new().fallback(move |uri: Uri, Json(body): Json<Value>| {
        let f = f.clone();
        let recorded = recorded.clone();
        async move {
            let path = uri.path().to_string();
            recorded.lock().unwrap().push((path.clone(), body.clone()));
            let (status, reply) = f(&path, &body);
            (
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                Json(reply),
            )
        }
    });

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockServer { addr, requests }
}

/// Wrap a JSON-RPC result for the request `body`.
#[allow(dead_code)]
pub fn rpc_result(body: &Value, result: Value) -> (u16, Value) {
    (
        200,
        serde_json::json!({"jsonrpc": "2.0", "id": body["id"], "result": result}),
    )
}

/// Wrap a JSON-RPC error for the request `body`.
#[allow(dead_code)]
pub fn rpc_error(body: &Value, code: i64, message: &str) -> (u16, Value) {
    (
        200,
        serde_json::json!({"jsonrpc": "2.0", "id": body["id"], "error": {"code": code, "message": message}}),
    )
}

/// Ordered record of hook invocations.
#[derive(Clone, Default)]
pub struct HookLog(Arc<Mutex<Vec<String>>>);

impl HookLog {
    pub fn push(&self, event: String) {
        self.0.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}
