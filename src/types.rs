//! 类型定义模块
//!
//! 定义翻译库中使用的请求和响应数据结构。所有类型都是一次请求内的临时值对象。

use crate::error::{Result, TranslationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 待翻译文本的格式
///
/// 远程服务只认识 `html` 和 `text` 两种取值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// HTML格式，标签会被保留
    #[default]
    Html,
    /// 纯文本
    Text,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Text => "text",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "html" => Ok(Format::Html),
            "text" => Ok(Format::Text),
            other => Err(TranslationError::configuration(format!(
                "format must be \"html\" or \"text\", got \"{}\"",
                other
            ))),
        }
    }
}

/// 翻译请求
///
/// # 字段说明
///
/// * `texts` - 待翻译文本，远程服务按相同顺序返回结果
/// * `target_language` - 目标语言代码
/// * `format` - 文本格式，`None` 表示使用翻译器的默认格式
/// * `source_language` - 源语言代码，`None` 表示由服务自动检测
/// * `model` - 翻译模型（如 `nmt`、`base`）
///
/// # 示例
///
/// ```rust
/// use google_translate_api::{Format, TranslationRequest};
///
/// let request = TranslationRequest::new("Hello, world", "es")
///     .format(Format::Text)
///     .source("en");
/// assert_eq!(request.texts, vec!["Hello, world".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationRequest {
    pub texts: Vec<String>,
    pub target_language: String,
    pub format: Option<Format>,
    pub source_language: Option<String>,
    pub model: Option<String>,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self::batch(vec![text.into()], target_language)
    }

    /// 一次请求翻译多段文本
    pub fn batch<I, S>(texts: I, target_language: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            texts: texts.into_iter().map(Into::into).collect(),
            target_language: target_language.into(),
            format: None,
            source_language: None,
            model: None,
        }
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn source(mut self, source_language: impl Into<String>) -> Self {
        self.source_language = Some(source_language.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// 发送给 `translate` 接口的请求体
#[derive(Debug, Serialize)]
pub(crate) struct TranslateBody<'a> {
    pub q: &'a [String],
    pub target: &'a str,
    pub format: Format,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DetectBody<'a> {
    pub q: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct LanguagesQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<&'a str>,
}

/// 单段文本的翻译结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub translated_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_source_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// 语言检测结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    pub language: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub is_reliable: bool,
}

/// `data.detections` 的元素，服务通常返回嵌套列表（每段输入一组）
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum DetectionGroup {
    Many(Vec<Detection>),
    One(Detection),
}

impl DetectionGroup {
    pub fn flatten(groups: Vec<DetectionGroup>) -> Vec<Detection> {
        groups
            .into_iter()
            .flat_map(|group| match group {
                DetectionGroup::Many(detections) => detections,
                DetectionGroup::One(detection) => vec![detection],
            })
            .collect()
    }
}

/// 支持的语言
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    #[serde(rename = "language")]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
