use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, StatusCode, Uri};
use rtm::{Client, Config, Context, ParameterSet, StaticEnv};
use rtm_core::{Error, HttpSend, Result};
use tokio::sync::oneshot;

pub const API_KEY: &str = "key";
pub const SHARED_SECRET: &str = "secret";

/// A request seen by [`MockHttpSend`].
#[derive(Debug, Clone)]
pub struct Recorded {
    pub uri: Uri,
    pub headers: HeaderMap,
}

impl Recorded {
    pub fn query(&self) -> ParameterSet {
        ParameterSet::from_query(self.uri.query().unwrap_or_default())
    }
}

/// HttpSend that records requests and replays queued responses in order.
#[derive(Debug, Clone, Default)]
pub struct MockHttpSend {
    responses: Arc<Mutex<VecDeque<Result<http::Response<Bytes>>>>>,
    recorded: Arc<Mutex<Vec<Recorded>>>,
    on_send: Arc<Mutex<Option<oneshot::Sender<()>>>>,
    delay: Option<Duration>,
}

impl MockHttpSend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn respond(&self, status: StatusCode, body: impl Into<Bytes>) -> &Self {
        let resp = http::Response::builder()
            .status(status)
            .body(body.into())
            .expect("response must be valid");
        self.push(Ok(resp))
    }

    pub fn respond_ok(&self, body: &'static str) -> &Self {
        self.respond(StatusCode::OK, body)
    }

    pub fn fail_with(&self, err: Error) -> &Self {
        self.push(Err(err))
    }

    /// Resolves once the next request reached the transport.
    pub fn notify_on_send(&self) -> oneshot::Receiver<()> {
        let (tx, rx) = oneshot::channel();
        *self.on_send.lock().unwrap() = Some(tx);
        rx
    }

    pub fn recorded(&self) -> Vec<Recorded> {
        self.recorded.lock().unwrap().clone()
    }

    pub fn last(&self) -> Recorded {
        self.recorded()
            .pop()
            .expect("at least one request must be sent")
    }

    fn push(&self, resp: Result<http::Response<Bytes>>) -> &Self {
        self.responses.lock().unwrap().push_back(resp);
        self
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.recorded.lock().unwrap().push(Recorded {
            uri: req.uri().clone(),
            headers: req.headers().clone(),
        });
        if let Some(tx) = self.on_send.lock().unwrap().take() {
            let _ = tx.send(());
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::unexpected("no response queued")))
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Context without any environment variable.
pub fn context(mock: &MockHttpSend) -> Context {
    Context::new()
        .with_http_send(mock.clone())
        .with_env(StaticEnv::default())
}

pub fn config() -> Config {
    Config::default()
        .with_api_key(API_KEY)
        .with_shared_secret(SHARED_SECRET)
}

pub fn client(mock: &MockHttpSend) -> Client {
    init_logger();
    Client::new(context(mock), config()).expect("client must build")
}
