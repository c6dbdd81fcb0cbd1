//! 传输层模块
//!
//! 负责发起一次带API密钥的HTTP请求并解析JSON响应。所有传输层失败
//! （连接失败、超时、非2xx状态码、无法解析的响应体）统一转换为
//! [`TranslationError::Service`]。不做任何重试。

use crate::config::TranslatorConfig;
use crate::error::{Result, TranslationError};
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, warn};

/// 请求参数：字符串键到标量、列表或null的映射
pub type Params = Map<String, Value>;

/// 传输层接口
///
/// `path` 相对于服务根地址，例如 `""`、`"detect"`、`"languages"`。
/// 实现可以替换（例如测试中的桩实现），翻译器本身不受影响。
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str, query: &Params) -> Result<Value>;

    async fn post(&self, path: &str, body: &Params) -> Result<Value>;
}

/// 基于 reqwest 的传输层实现
#[derive(Clone)]
pub struct HttpTransport {
    /// HTTP客户端
    client: Client,
    /// 服务根地址，以 `/` 结尾
    base_url: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(config: &TranslatorConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_idle_timeout(Duration::from_secs(30))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| {
                TranslationError::configuration(format!("cannot build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: normalize_base_url(&config.base_url),
            api_key: config.api_key.clone(),
        })
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &Params,
        body: Option<&Params>,
    ) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path.trim_start_matches('/'));
        debug!("{} {}", method, url);

        let mut pairs = query_pairs(query);
        pairs.push(("key".to_string(), self.api_key.clone()));

        let mut builder = self.client.request(method, &url).query(&pairs);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!("Request to {} failed: {}", url, e);
            TranslationError::from(e)
        })?;

        let status = response.status();
        let response_text = response.text().await?;
        debug!("Response status: {}", status);

        if !status.is_success() {
            let message = error_message(&response_text);
            warn!("Translation API returned {}: {}", status, message);
            return Err(TranslationError::service(Some(status.as_u16()), message));
        }

        Ok(serde_json::from_str(&response_text)?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &Params) -> Result<Value> {
        self.request(Method::GET, path, query, None).await
    }

    async fn post(&self, path: &str, body: &Params) -> Result<Value> {
        self.request(Method::POST, path, &Params::new(), Some(body)).await
    }
}

fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    }
}

/// 把参数映射转换为查询参数对
///
/// null 被省略，列表按元素重复键名，调用方传入的 `key` 被丢弃（API密钥不可覆盖）。
fn query_pairs(params: &Params) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (name, value) in params {
        if name == "key" {
            continue;
        }
        match value {
            Value::Array(items) => {
                for item in items {
                    if let Some(v) = scalar_to_string(item) {
                        pairs.push((name.clone(), v));
                    }
                }
            }
            other => {
                if let Some(v) = scalar_to_string(other) {
                    pairs.push((name.clone(), v));
                }
            }
        }
    }
    pairs
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// 从错误响应体中取出服务给出的消息，例如 `{"error":{"code":400,"message":"..."}}`
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "empty error response".to_string()
            } else {
                trimmed.to_string()
            }
        })
}
