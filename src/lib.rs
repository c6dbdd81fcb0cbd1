//! # Google Translate API
//!
//! Google Cloud Translation (v2) 的Rust客户端，使用API密钥认证。
//!
//! ## 主要特性
//!
//! - **文本翻译**: 支持HTML和纯文本格式，可一次翻译多段文本，结果顺序与输入一致
//! - **保留翻译**: 匹配指定正则的子串（人名、占位符等）在译文中原样保留
//! - **语言检测**: 检测文本语言及置信度
//! - **语言列表**: 列出服务支持的语言
//! - **可替换传输层**: 通过 [`Transport`] trait 注入自定义HTTP实现
//! - **配置灵活**: 支持TOML配置文件和程序化配置
//!
//! ## 快速开始
//!
//! ```no_run
//! use google_translate_api::{Translator, TranslationRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let translator = Translator::new("YOUR_API_KEY")?;
//!
//!     let request = TranslationRequest::new("Hello {name}!", "de");
//!     let result = translator
//!         .translate_with_preservation(&request, r"\{\w+\}")
//!         .await?;
//!     println!("Translation: {}", result[0].translated_text);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## 配置文件支持
//!
//! ```toml
//! [translator]
//! api_key = "YOUR_API_KEY"
//! base_url = "https://translation.googleapis.com/language/translate/v2/"
//! timeout_secs = 30
//! default_format = "html"
//! default_model = "nmt"
//! ```
//!
//! ## 错误处理
//!
//! 所有操作返回 [`TranslationError`]：`Configuration` 表示调用参数需要修正，
//! 在发起网络请求前抛出；`Service` 表示远程调用失败，可由调用方决定是否重试。

pub mod config;
pub mod error;
pub mod preserve;
pub mod transport;
pub mod types;
pub mod translator;

pub use config::{TranslatorConfig, TranslatorLibConfig, DEFAULT_BASE_URL, DEFAULT_CONFIG_FILES};
pub use error::{Result, TranslationError};
pub use preserve::PreservationMarker;
pub use transport::{HttpTransport, Params, Transport};
pub use types::{Detection, Format, Language, Translation, TranslationRequest};
pub use translator::Translator;
