//! 保留文本标记模块
//!
//! 远程服务本身没有"原样保留某些子串"的功能。做法是在翻译前把匹配的子串包进
//! `<span id='...' translate='no'>` 元素，以HTML格式翻译，翻译完成后再去掉这层包装。
//!
//! 调用方需要保证保留模式不会匹配包装本身用到的字符（`<`、`>`、`'`、`=`），
//! 否则标记结果不确定。远程服务若不遵守 `translate='no'`，被保留的文本仍可能被改动。
//!
//! 去标记能识别服务对开始标签的改写：单双引号互换、空白变化、`id` 与 `translate`
//! 属性顺序互换。包装内部若被服务插入了另一个 `<span>`，匹配会止于内层的 `</span>`，
//! 结果仍是成对的标签，但译文中会残留那段内层标记。

use crate::error::{Result, TranslationError};
use regex::{Captures, Regex};
use std::borrow::Cow;
use uuid::Uuid;

/// 编译保留模式（大小写不敏感）
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(&format!("(?i)(?:{})", pattern)).map_err(|e| {
        TranslationError::configuration(format!("invalid preserve pattern: {}", e))
    })
}

/// 单次调用范围内的标记
///
/// 每次 `translate_with_preservation` 都生成新的id，去标记时只识别同一个id，
/// 因此不会误删输入里原有的span或其他调用留下的标记。
#[derive(Debug, Clone)]
pub struct PreservationMarker {
    id: String,
    wrapper: Regex,
}

impl PreservationMarker {
    pub fn new() -> Result<Self> {
        Self::with_id(format!("gtp-{}", Uuid::new_v4().simple()))
    }

    /// 使用指定id，id只能包含字母、数字、`-` 和 `_`
    pub fn with_id(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty()
            || !id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(TranslationError::configuration(format!(
                "invalid marker id: {:?}",
                id
            )));
        }

        let id_attr = format!(r#"id\s*=\s*["']{}["']"#, regex::escape(&id));
        let no_attr = r#"translate\s*=\s*["']no["']"#;
        // Either attribute order, either quote style, extra whitespace.
        let wrapper = Regex::new(&format!(
            r"(?is)<span\s+(?:{id}\s+{no}|{no}\s+{id})\s*>(.*?)</span\s*>",
            id = id_attr,
            no = no_attr
        ))
        .map_err(|e| TranslationError::configuration(format!("invalid marker id: {}", e)))?;

        Ok(Self { id, wrapper })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// 把每个匹配包进不翻译的span
    pub fn mark<'t>(&self, pattern: &Regex, text: &'t str) -> Cow<'t, str> {
        pattern.replace_all(text, |caps: &Captures| {
            format!("<span id='{}' translate='no'>{}</span>", self.id, &caps[0])
        })
    }

    /// 去掉本标记的span，保留其中的文本
    pub fn unmark<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.wrapper
            .replace_all(text, |caps: &Captures| caps[1].to_string())
    }
}
