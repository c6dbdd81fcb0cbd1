//! 错误处理模块
//!
//! 定义翻译库中使用的错误类型。只有两类错误：调用方参数错误（可在发起网络请求前发现）
//! 和远程服务错误（网络、HTTP状态码、响应解析等）。

use thiserror::Error;

/// 翻译错误类型
///
/// # 变体说明
///
/// * `Configuration` - 调用参数或配置无效，在任何网络请求之前抛出，重试没有意义
/// * `Service` - 来自传输层的失败，保留原始消息和HTTP状态码，可能是暂时性的
#[derive(Error, Debug)]
pub enum TranslationError {
    /// 配置错误
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// 远程服务错误
    #[error("Service error{}: {message}", status_suffix(.status))]
    Service {
        /// HTTP状态码（连接失败等情况下没有）
        status: Option<u16>,
        /// 错误消息
        message: String,
    },
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" ({})", s)).unwrap_or_default()
}

impl TranslationError {
    pub fn configuration(message: impl Into<String>) -> Self {
        TranslationError::Configuration(message.into())
    }

    pub fn service(status: Option<u16>, message: impl Into<String>) -> Self {
        TranslationError::Service {
            status,
            message: message.into(),
        }
    }

    /// 是否为调用方需要修正的错误
    pub fn is_configuration(&self) -> bool {
        matches!(self, TranslationError::Configuration(_))
    }

    /// 是否为远程服务错误（调用方可自行决定是否重试）
    pub fn is_service(&self) -> bool {
        matches!(self, TranslationError::Service { .. })
    }

    /// 远程服务返回的HTTP状态码
    pub fn status(&self) -> Option<u16> {
        match self {
            TranslationError::Service { status, .. } => *status,
            TranslationError::Configuration(_) => None,
        }
    }
}

impl From<reqwest::Error> for TranslationError {
    fn from(error: reqwest::Error) -> Self {
        TranslationError::Service {
            status: error.status().map(|s| s.as_u16()),
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for TranslationError {
    fn from(error: serde_json::Error) -> Self {
        TranslationError::Service {
            status: None,
            message: format!("Invalid response body: {}", error),
        }
    }
}

/// 翻译结果类型别名
///
/// 简化返回类型，使用 `TranslationError` 作为错误类型。
///
/// # 示例
///
/// ```rust
/// use google_translate_api::{Result, TranslationError};
///
/// fn check(format: &str) -> Result<()> {
///     if format.is_empty() {
///         return Err(TranslationError::configuration("empty format"));
///     }
///     Ok(())
/// }
///
/// assert!(check("").unwrap_err().is_configuration());
/// ```
pub type Result<T> = std::result::Result<T, TranslationError>;
