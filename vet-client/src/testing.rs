//! Recording `HttpClient` double for unit tests

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http::HttpClient;
use crate::{ClientError, ClientResult};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Get { path: String },
    Post { path: String, body: Value },
    Put { path: String, body: Value },
}

/// Scripted reply for one request
#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status { status: u16, message: Option<String> },
}

impl Reply {
    fn into_result(self) -> ClientResult<Value> {
        match self {
            Reply::Json(value) => Ok(value),
            Reply::Status { status, message } => Err(ClientError::Api { status, message }),
        }
    }
}

/// Records every request; GETs answer from `gets`, writes pop `writes`
/// (defaulting to success once the queue is empty).
#[derive(Debug, Default)]
pub struct MockHttpClient {
    calls: Mutex<Vec<Call>>,
    gets: Mutex<HashMap<String, Reply>>,
    writes: Mutex<VecDeque<Reply>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_get(self, path: &str, body: Value) -> Self {
        self.set_get(path, Reply::Json(body));
        self
    }

    pub fn set_get(&self, path: &str, reply: Reply) {
        self.gets.lock().unwrap().insert(path.to_string(), reply);
    }

    pub fn push_write(&self, reply: Reply) {
        self.writes.lock().unwrap().push_back(reply);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn writes_made(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| !matches!(call, Call::Get { .. }))
            .collect()
    }

    fn next_write(&self) -> ClientResult<()> {
        match self.writes.lock().unwrap().pop_front() {
            Some(reply) => reply.into_result().map(|_| ()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        self.calls.lock().unwrap().push(Call::Get {
            path: path.to_string(),
        });
        let reply = self.gets.lock().unwrap().get(path).cloned().unwrap_or(Reply::Status {
            status: 404,
            message: None,
        });
        Ok(serde_json::from_value(reply.into_result()?)?)
    }

    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<()> {
        self.calls.lock().unwrap().push(Call::Post {
            path: path.to_string(),
            body: serde_json::to_value(body)?,
        });
        self.next_write()
    }

    async fn put<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<()> {
        self.calls.lock().unwrap().push(Call::Put {
            path: path.to_string(),
            body: serde_json::to_value(body)?,
        });
        self.next_write()
    }
}
