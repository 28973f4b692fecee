#![allow(dead_code)]

use article_relay::application::services::{ArticleService, BackoffSchedule, RetryingDeliverer};
use article_relay::domain::delivery::{AttemptError, Sleeper, WebhookTransport};
use article_relay::domain::entities::DeliveryPayload;
use article_relay::infrastructure::webhook::HttpWebhookTransport;
use article_relay::state::AppState;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use url::Url;

/// Transport that fails the first `failures` attempts with HTTP 500, then
/// accepts. Records every payload it sees.
pub struct ScriptedTransport {
    failures: u32,
    calls: AtomicU32,
    payloads: Mutex<Vec<DeliveryPayload>>,
}

impl ScriptedTransport {
    pub fn failing(failures: u32) -> Self {
        Self {
            failures,
            calls: AtomicU32::new(0),
            payloads: Mutex::new(Vec::new()),
        }
    }

    pub fn accepting() -> Self {
        Self::failing(0)
    }

    pub fn always_failing() -> Self {
        Self::failing(u32::MAX)
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn payloads(&self) -> Vec<DeliveryPayload> {
        self.payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebhookTransport for ScriptedTransport {
    async fn send(&self, payload: &DeliveryPayload) -> Result<(), AttemptError> {
        self.payloads.lock().unwrap().push(payload.clone());
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        if n < self.failures {
            Err(AttemptError::Status(500))
        } else {
            Ok(())
        }
    }
}

/// Sleeper that returns immediately and remembers what it was asked to wait.
#[derive(Default)]
pub struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}

pub fn secs(values: &[u64]) -> Vec<Duration> {
    values.iter().map(|s| Duration::from_secs(*s)).collect()
}

fn state_with<T: WebhookTransport + 'static>(
    transport: Arc<T>,
) -> (AppState, Arc<RecordingSleeper>) {
    let sleeper = Arc::new(RecordingSleeper::default());
    let deliverer = RetryingDeliverer::new(transport, sleeper.clone(), BackoffSchedule::default());
    let service = ArticleService::new(Arc::new(deliverer));

    (AppState::new(Arc::new(service)), sleeper)
}

/// State backed by an in-memory transport double.
pub fn create_test_state(
    transport: Arc<ScriptedTransport>,
) -> (AppState, Arc<RecordingSleeper>) {
    state_with(transport)
}

/// State backed by the real HTTP transport pointed at `webhook_url`.
pub fn create_http_state(webhook_url: &str) -> (AppState, Arc<RecordingSleeper>) {
    let url = Url::parse(webhook_url).unwrap();
    let transport = HttpWebhookTransport::new(url, Duration::from_secs(10)).unwrap();
    state_with(Arc::new(transport))
}
