//! 国际化（i18n）模块
//!
//! 使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。
//! 语言由调用方显式传入（见 [`ViewConfig`](crate::config::ViewConfig)），
//! 不依赖全局状态。

use serde::{Deserialize, Serialize};

mod en_us;
pub mod keys;
mod zh_cn;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    /// 英语（美国）
    #[default]
    #[serde(rename = "en-US", alias = "en")]
    EnUs,
    /// 简体中文（中国）
    #[serde(rename = "zh-CN", alias = "zh")]
    ZhCn,
}

impl Language {
    /// 获取该语言的翻译表
    pub fn translations(self) -> &'static Translations {
        match self {
            Language::EnUs => &en_us::TRANSLATIONS,
            Language::ZhCn => &zh_cn::TRANSLATIONS,
        }
    }
}

/// 按点分隔的键查找翻译文本，例如 `"errors.names"`
pub fn lookup(lang: Language, key: &str) -> Option<&'static str> {
    let t = lang.translations();
    let text = match key {
        "addressDetails" => t.address.address_details,
        "noProfile" => t.address.no_profile,
        "viewProfile" => t.address.view_profile,
        "errors.names" => t.errors.names,
        _ => return None,
    };
    Some(text)
}
