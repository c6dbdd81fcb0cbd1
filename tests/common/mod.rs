//! Recording stub transport shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use google_translate_api::{Params, Result, Transport, TranslationError};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub path: String,
    pub params: Params,
}

type Responder = Box<dyn Fn(&str, &Params) -> Result<Value> + Send + Sync>;

pub struct StubTransport {
    calls: Arc<Mutex<Vec<Call>>>,
    responder: Responder,
}

impl StubTransport {
    pub fn new<F>(responder: F) -> (Self, Arc<Mutex<Vec<Call>>>)
    where
        F: Fn(&str, &Params) -> Result<Value> + Send + Sync + 'static,
    {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let stub = Self {
            calls: Arc::clone(&calls),
            responder: Box::new(responder),
        };
        (stub, calls)
    }

    /// Always answers with the same body.
    pub fn fixed(body: Value) -> (Self, Arc<Mutex<Vec<Call>>>) {
        Self::new(move |_, _| Ok(body.clone()))
    }

    /// Returns every `q` entry unchanged as its own translation.
    pub fn identity() -> (Self, Arc<Mutex<Vec<Call>>>) {
        Self::new(|_, params| Ok(echo_translations(params, |text| text.to_string())))
    }

    /// Simulates a connection failure.
    pub fn failing() -> (Self, Arc<Mutex<Vec<Call>>>) {
        Self::new(|_, _| Err(TranslationError::service(None, "connection refused")))
    }

    fn record(&self, method: &'static str, path: &str, params: &Params) -> Result<Value> {
        self.calls.lock().unwrap().push(Call {
            method,
            path: path.to_string(),
            params: params.clone(),
        });
        (self.responder)(path, params)
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, path: &str, query: &Params) -> Result<Value> {
        self.record("GET", path, query)
    }

    async fn post(&self, path: &str, body: &Params) -> Result<Value> {
        self.record("POST", path, body)
    }
}

/// Builds a `data.translations` payload from the request's `q` list.
pub fn echo_translations(params: &Params, translate: impl Fn(&str) -> String) -> Value {
    let translations: Vec<Value> = params
        .get("q")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|q| json!({"translatedText": translate(q.as_str().unwrap_or_default())}))
                .collect()
        })
        .unwrap_or_default();
    json!({"data": {"translations": translations}})
}
