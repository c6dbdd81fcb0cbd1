//! 配置管理模块
//!
//! 提供TOML配置文件的读取、写入和自动发现功能。配置文件是可选的，
//! 只有API密钥时也可以直接使用 [`crate::Translator::new`]。

use crate::error::{Result, TranslationError};
use crate::types::Format;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// 远程翻译服务的默认地址
pub const DEFAULT_BASE_URL: &str = "https://translation.googleapis.com/language/translate/v2/";

/// `load_from_default_locations` 按顺序查找的文件名
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["translate-config.toml", ".translate-config.toml"];

/// 翻译器配置
///
/// # 字段说明
///
/// * `api_key` - API密钥，每次请求都作为 `key` 查询参数发送
/// * `base_url` - 服务地址，路径会拼接在其后
/// * `timeout_secs` - 单次HTTP请求超时时间（秒）
/// * `user_agent` - HTTP User-Agent
/// * `default_format` - 请求未指定格式时使用的格式，`html` 或 `text`
/// * `default_model` - 请求未指定模型时使用的模型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub default_format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_model: Option<String>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: concat!("google-translate-api/", env!("CARGO_PKG_VERSION")).to_string(),
            default_format: Format::Html.to_string(),
            default_model: None,
        }
    }
}

impl TranslatorConfig {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// 检查配置，返回解析后的默认格式
    pub fn validate(&self) -> Result<Format> {
        if self.api_key.trim().is_empty() {
            return Err(TranslationError::configuration("api_key must not be empty"));
        }
        if self.base_url.trim().is_empty() {
            return Err(TranslationError::configuration("base_url must not be empty"));
        }
        self.default_format.parse()
    }
}

/// 配置文件结构
///
/// 对应配置文件中的 `[translator]` 表。
///
/// # 示例
///
/// ```rust
/// use google_translate_api::TranslatorLibConfig;
///
/// let config = TranslatorLibConfig::from_toml_str(r#"
/// [translator]
/// api_key = "secret"
/// default_format = "text"
/// "#).unwrap();
/// assert_eq!(config.translator.api_key, "secret");
/// assert_eq!(config.translator.timeout_secs, 30);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslatorLibConfig {
    /// 翻译器配置
    #[serde(default)]
    pub translator: TranslatorConfig,
}

impl TranslatorLibConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| TranslationError::configuration(format!("invalid TOML: {}", e)))
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TranslationError::configuration(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| TranslationError::configuration(format!("cannot encode TOML: {}", e)))?;
        fs::write(path, content).map_err(|e| {
            TranslationError::configuration(format!("cannot write {}: {}", path.display(), e))
        })
    }

    /// Load configuration from the current directory, if present
    ///
    /// Only called explicitly; constructing a translator never reads files.
    pub fn load_from_default_locations() -> Self {
        for path in &DEFAULT_CONFIG_FILES {
            if Path::new(path).exists() {
                match Self::from_file(path) {
                    Ok(config) => {
                        info!("Loaded configuration from: {}", path);
                        return config;
                    }
                    Err(e) => {
                        warn!("Failed to load config from {}: {}", path, e);
                    }
                }
            }
        }

        info!("No configuration file found, using defaults");
        Self::default()
    }

    /// Generate example configuration file
    pub fn generate_example_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let example_config = Self {
            translator: TranslatorConfig::with_api_key("YOUR_API_KEY"),
        };
        example_config.save_to_file(path)
    }
}
