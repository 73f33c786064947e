//! Mock Artemis gateway
//!
//! Axum server on an ephemeral port that records every request and answers
//! with canned envelopes keyed by path. Unknown paths get a 404 with a plain
//! text body, which the client must treat as a transport error.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Request as seen by the mock
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }
}

#[derive(Clone, Default)]
struct MockState {
    responses: Arc<HashMap<String, (StatusCode, String)>>,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Canned responses, configured before spawning
#[derive(Default)]
pub struct MockArtemis {
    responses: HashMap<String, (StatusCode, String)>,
}

impl MockArtemis {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `path` with `status` and a JSON body
    pub fn respond_json(self, path: &str, status: StatusCode, body: Value) -> Self {
        self.respond_raw(path, status, body.to_string())
    }

    pub fn respond_raw(mut self, path: &str, status: StatusCode, body: impl Into<String>) -> Self {
        self.responses.insert(path.to_string(), (status, body.into()));
        self
    }

    /// Start serving; returns the base URL and the request log
    pub async fn spawn(self) -> (String, Arc<Mutex<Vec<CapturedRequest>>>) {
        let state = MockState {
            responses: Arc::new(self.responses),
            captured: Arc::new(Mutex::new(Vec::new())),
        };
        let captured = state.captured.clone();

        let app = Router::new().fallback(handle).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock Artemis listener");
        let addr = listener.local_addr().expect("listener has no local address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock Artemis server failed");
        });

        (format!("http://{}", addr), captured)
    }
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let path = uri.path().to_string();

    state.captured.lock().unwrap().push(CapturedRequest {
        method: method.to_string(),
        path: path.clone(),
        headers: headers
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect(),
        body: body.to_vec(),
    });

    state
        .responses
        .get(&path)
        .cloned()
        .unwrap_or((StatusCode::NOT_FOUND, "not found".to_string()))
}

/// Shorthand: mock answering both importer endpoints successfully
pub async fn spawn_mock_artemis(person_id: &str) -> (String, Arc<Mutex<Vec<CapturedRequest>>>) {
    use dimp_import::artemis::client::{FACE_ADD_PATH, PERSON_ADD_PATH};

    MockArtemis::new()
        .respond_json(
            PERSON_ADD_PATH,
            StatusCode::OK,
            serde_json::json!({"code": "0", "msg": "Success", "data": person_id}),
        )
        .respond_json(
            FACE_ADD_PATH,
            StatusCode::OK,
            serde_json::json!({"code": "0", "msg": "Success", "data": {"faceIndexCode": "f-1"}}),
        )
        .spawn()
        .await
}
