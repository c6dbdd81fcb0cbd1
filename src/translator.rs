//! 翻译服务核心模块
//!
//! 对外提供翻译、带保留的翻译、语言检测和支持语言列表四个操作。
//! 每个操作最多发起一次网络请求，失败时直接返回错误，不做重试。

use crate::config::TranslatorConfig;
use crate::error::{Result, TranslationError};
use crate::preserve::{compile_pattern, PreservationMarker};
use crate::transport::{HttpTransport, Params, Transport};
use crate::types::{
    DetectBody, Detection, DetectionGroup, Format, Language, LanguagesQuery, TranslateBody,
    Translation, TranslationRequest,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// 翻译器
///
/// # 示例
///
/// ```no_run
/// use google_translate_api::{Translator, TranslationRequest};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let translator = Translator::new("YOUR_API_KEY")?;
///
///     let translations = translator
///         .translate(&TranslationRequest::new("Hello, world", "es"))
///         .await?;
///     println!("{}", translations[0].translated_text);
///
///     // "Jane" 和 "HQ" 原样保留
///     let preserved = translator
///         .translate_with_preservation(
///             &TranslationRequest::new("Contact Jane at HQ", "fr"),
///             "Jane|HQ",
///         )
///         .await?;
///     println!("{}", preserved[0].translated_text);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Translator {
    /// 传输层
    transport: Arc<dyn Transport>,
    /// 请求未指定格式时使用
    default_format: Format,
    /// 请求未指定模型时使用
    default_model: Option<String>,
}

impl Translator {
    /// 使用API密钥和默认配置创建翻译器
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(&TranslatorConfig::with_api_key(api_key))
    }

    /// 从配置创建翻译器，配置无效时返回 `Configuration` 错误
    pub fn from_config(config: &TranslatorConfig) -> Result<Self> {
        let default_format = config.validate()?;
        let transport = HttpTransport::new(config)?;

        Ok(Self {
            transport: Arc::new(transport),
            default_format,
            default_model: config.default_model.clone(),
        })
    }

    /// 使用自定义传输层创建翻译器
    pub fn with_transport<T: Transport + 'static>(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
            default_format: Format::Html,
            default_model: None,
        }
    }

    pub fn with_default_format(mut self, format: Format) -> Self {
        self.default_format = format;
        self
    }

    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = Some(model.into());
        self
    }

    /// 翻译文本
    ///
    /// 结果与 `request.texts` 一一对应、顺序相同。响应中没有 `data.translations`
    /// 时返回空列表。
    pub async fn translate(&self, request: &TranslationRequest) -> Result<Vec<Translation>> {
        let format = request.format.unwrap_or(self.default_format);
        let body = TranslateBody {
            q: &request.texts,
            target: &request.target_language,
            format,
            source: request.source_language.as_deref(),
            model: request.model.as_deref().or(self.default_model.as_deref()),
        };

        debug!(
            "Translating {} text(s) to {} as {}",
            request.texts.len(),
            request.target_language,
            format
        );

        let response = self.transport.post("", &to_params(&body)?).await?;
        data_field(response, "translations")
    }

    /// 翻译文本并原样保留所有匹配 `preserve_pattern` 的子串
    ///
    /// 请求格式总是强制为HTML。模式无效时在发起请求前返回 `Configuration` 错误。
    /// 模式不能匹配 `<`、`>`、`'`、`=` 等标记字符。
    pub async fn translate_with_preservation(
        &self,
        request: &TranslationRequest,
        preserve_pattern: &str,
    ) -> Result<Vec<Translation>> {
        let pattern = compile_pattern(preserve_pattern)?;
        let marker = PreservationMarker::new()?;

        let mut marked = request.clone();
        marked.texts = request
            .texts
            .iter()
            .map(|text| marker.mark(&pattern, text).into_owned())
            .collect();
        marked.format = Some(Format::Html);

        debug!("Preserving /{}/ with marker {}", preserve_pattern, marker.id());

        let mut translations = self.translate(&marked).await?;
        for translation in &mut translations {
            translation.translated_text = marker.unmark(&translation.translated_text).into_owned();
        }

        Ok(translations)
    }

    /// 检测文本语言
    pub async fn detect(&self, text: &str) -> Result<Vec<Detection>> {
        debug!("Detecting language of {} characters", text.chars().count());

        let response = self
            .transport
            .post("detect", &to_params(&DetectBody { q: text })?)
            .await?;
        let groups: Vec<DetectionGroup> = data_field(response, "detections")?;
        Ok(DetectionGroup::flatten(groups))
    }

    /// 列出支持的语言
    ///
    /// 指定 `target_language` 时，语言名称以该语言返回。
    pub async fn languages(
        &self,
        target_language: Option<&str>,
        model: Option<&str>,
    ) -> Result<Vec<Language>> {
        let query = LanguagesQuery {
            target: target_language,
            model: model.or(self.default_model.as_deref()),
        };

        let response = self.transport.get("languages", &to_params(&query)?).await?;
        data_field(response, "languages")
    }
}

fn to_params<T: Serialize>(value: &T) -> Result<Params> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(TranslationError::configuration(format!(
            "request parameters must be an object, got {}",
            other
        ))),
        Err(e) => Err(TranslationError::configuration(format!(
            "cannot encode request parameters: {}",
            e
        ))),
    }
}

/// 取出 `data.<field>`，字段缺失时返回空列表，字段存在但格式错误时返回 `Service` 错误
fn data_field<T: DeserializeOwned>(mut response: Value, field: &str) -> Result<Vec<T>> {
    let value = match response.get_mut("data").and_then(|data| data.get_mut(field)) {
        Some(value) if !value.is_null() => value.take(),
        _ => {
            debug!("Response has no data.{}, returning empty result", field);
            return Ok(Vec::new());
        }
    };

    serde_json::from_value(value).map_err(|e| {
        warn!("Malformed data.{} in response: {}", field, e);
        TranslationError::service(None, format!("malformed data.{}: {}", field, e))
    })
}
