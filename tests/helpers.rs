// Shared test helpers: a scriptable SIEM backend mock and JSON builders.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Router};
use tokio::net::TcpListener;

/// One scripted response for an endpoint.
#[derive(Clone)]
pub struct ScriptedResponse {
    pub status: StatusCode,
    pub body: String,
    pub delay: Duration,
}

impl ScriptedResponse {
    /// A 200 response with the given body.
    #[allow(dead_code)] // Used by other test files
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    /// A failure response with the given status.
    #[allow(dead_code)] // Used by other test files
    pub fn error(status: StatusCode) -> Self {
        Self {
            status,
            body: "backend error".into(),
            delay: Duration::ZERO,
        }
    }

    /// Delays the response by `delay` before sending it.
    #[allow(dead_code)] // Used by other test files
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Clone)]
struct BackendState {
    system_info: Arc<Mutex<ScriptedResponse>>,
    system_info_hits: Arc<AtomicUsize>,
    top_ips_scripts: Arc<Mutex<VecDeque<ScriptedResponse>>>,
    top_ips_fallback: Arc<Mutex<ScriptedResponse>>,
    top_ips_hits: Arc<AtomicUsize>,
}

/// In-process SIEM backend with scriptable per-request responses.
///
/// The top IPs endpoint consumes scripted responses in push order; once the
/// queue is empty it serves the fallback (an empty list by default). The
/// system info endpoint serves one configurable response.
pub struct MockSiemBackend {
    url: String,
    state: BackendState,
}

impl MockSiemBackend {
    /// Starts the mock backend on an ephemeral local port.
    #[allow(dead_code)] // Used by other test files
    pub async fn start() -> Self {
        let state = BackendState {
            system_info: Arc::new(Mutex::new(ScriptedResponse::ok(
                r#"{"hostname": "mock-siem", "internal_ip": "10.0.0.42"}"#,
            ))),
            system_info_hits: Arc::new(AtomicUsize::new(0)),
            top_ips_scripts: Arc::new(Mutex::new(VecDeque::new())),
            top_ips_fallback: Arc::new(Mutex::new(ScriptedResponse::ok("[]"))),
            top_ips_hits: Arc::new(AtomicUsize::new(0)),
        };

        let app = Router::new()
            .route("/api/system_info", get(system_info_handler))
            .route("/api/top_ips", get(top_ips_handler))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get address");
        let url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Server failed to start");
        });

        // Give server time to start
        tokio::time::sleep(Duration::from_millis(100)).await;

        Self { url, state }
    }

    /// Base URL of the running mock.
    #[allow(dead_code)] // Used by other test files
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Queues the next top IPs response.
    #[allow(dead_code)] // Used by other test files
    pub fn push_top_ips(&self, response: ScriptedResponse) {
        self.state
            .top_ips_scripts
            .lock()
            .expect("script queue lock poisoned")
            .push_back(response);
    }

    /// Sets the response served once the script queue is exhausted.
    #[allow(dead_code)] // Used by other test files
    pub fn set_top_ips_fallback(&self, response: ScriptedResponse) {
        *self
            .state
            .top_ips_fallback
            .lock()
            .expect("fallback lock poisoned") = response;
    }

    /// Sets the system info response.
    #[allow(dead_code)] // Used by other test files
    pub fn set_system_info(&self, response: ScriptedResponse) {
        *self
            .state
            .system_info
            .lock()
            .expect("system info lock poisoned") = response;
    }

    /// Number of requests the top IPs endpoint has served.
    #[allow(dead_code)] // Used by other test files
    pub fn top_ips_hits(&self) -> usize {
        self.state.top_ips_hits.load(Ordering::SeqCst)
    }

    /// Number of requests the system info endpoint has served.
    #[allow(dead_code)] // Used by other test files
    pub fn system_info_hits(&self) -> usize {
        self.state.system_info_hits.load(Ordering::SeqCst)
    }
}

async fn system_info_handler(State(state): State<BackendState>) -> (StatusCode, String) {
    state.system_info_hits.fetch_add(1, Ordering::SeqCst);
    let response = state
        .system_info
        .lock()
        .expect("system info lock poisoned")
        .clone();
    if response.delay > Duration::ZERO {
        tokio::time::sleep(response.delay).await;
    }
    (response.status, response.body)
}

async fn top_ips_handler(State(state): State<BackendState>) -> (StatusCode, String) {
    state.top_ips_hits.fetch_add(1, Ordering::SeqCst);
    // Pop before any await so the lock is not held across it
    let response = {
        let mut scripts = state
            .top_ips_scripts
            .lock()
            .expect("script queue lock poisoned");
        scripts.pop_front()
    }
    .unwrap_or_else(|| {
        state
            .top_ips_fallback
            .lock()
            .expect("fallback lock poisoned")
            .clone()
    });
    if response.delay > Duration::ZERO {
        tokio::time::sleep(response.delay).await;
    }
    (response.status, response.body)
}

/// Builds one record in the top IPs wire format.
#[allow(dead_code)] // Used by other test files
pub fn ip_record_json(ip: &str, count: u64) -> serde_json::Value {
    serde_json::json!({
        "ip": ip,
        "count": count,
        "city": "Springfield",
        "region": "IL",
        "country": "US",
        "isp": "ExampleNet",
        "latitude": 39.78,
        "longitude": -89.65
    })
}

/// Serializes records into a top IPs response body.
#[allow(dead_code)] // Used by other test files
pub fn top_ips_body(records: &[serde_json::Value]) -> String {
    serde_json::Value::Array(records.to_vec()).to_string()
}

/// Polls `condition` every 10ms until it holds or `deadline` elapses.
///
/// Timing-sensitive tests use this instead of fixed sleeps so they settle
/// quickly on fast machines without flaking on slow CI.
#[allow(dead_code)] // Used by other test files
pub async fn wait_until<F: FnMut() -> bool>(mut condition: F, deadline: Duration) -> bool {
    let start = tokio::time::Instant::now();
    loop {
        if condition() {
            return true;
        }
        if start.elapsed() >= deadline {
            return false;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
