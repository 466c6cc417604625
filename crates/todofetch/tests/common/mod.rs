//! Common test utilities and helpers

use std::collections::VecDeque;
use std::error::Error;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use serde_json::{Value, json};
use todofetch::{
    HttpRequest, HttpResponse, RetryObserver, Transport, TransportError, async_trait,
};

/// JSON body with `count` todos shaped like the JSONPlaceholder API.
#[allow(dead_code)]
pub fn todos_json(count: u64) -> Value {
    Value::Array(
        (1..=count)
            .map(|id| {
                json!({
                    "userId": (id - 1) / 20 + 1,
                    "id": id,
                    "title": format!("todo number {id}"),
                    "completed": id % 3 == 0,
                })
            })
            .collect(),
    )
}

/// 200 response carrying `body`.
#[allow(dead_code)]
pub fn ok(body: Value) -> Result<HttpResponse, TransportError> {
    Ok(HttpResponse::new(200, body.to_string().into_bytes()))
}

/// Response with `status` and an empty body.
#[allow(dead_code)]
pub fn status(status: u16) -> Result<HttpResponse, TransportError> {
    Ok(HttpResponse::new(status, Vec::new()))
}

/// Transport that replays a fixed script of results, one per request.
#[allow(dead_code)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: AtomicU32,
    urls: Mutex<Vec<String>>,
    latency: Duration,
}

#[allow(dead_code)]
impl ScriptedTransport {
    pub fn new(script: Vec<Result<HttpResponse, TransportError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: AtomicU32::new(0),
            urls: Mutex::new(Vec::new()),
            latency: Duration::ZERO,
        }
    }

    /// Make every request take `latency` before it answers.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn requests(&self) -> u32 {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(request.url);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .expect("transport called more often than scripted")
    }
}

/// Observer that keeps every event for later assertions.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingObserver {
    pub attempts: Mutex<Vec<u32>>,
    pub failures: Mutex<Vec<String>>,
    pub delays: Mutex<Vec<Duration>>,
}

#[allow(dead_code)]
impl RecordingObserver {
    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().unwrap().clone()
    }

    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

impl RetryObserver for RecordingObserver {
    fn on_attempt(&self, attempt: u32, _max_attempts: u32) {
        self.attempts.lock().unwrap().push(attempt);
    }

    fn on_failure(&self, _attempt: u32, error: &(dyn Error + 'static)) {
        self.failures.lock().unwrap().push(error.to_string());
    }

    fn on_backoff(&self, _attempt: u32, delay: Duration) {
        self.delays.lock().unwrap().push(delay);
    }
}
