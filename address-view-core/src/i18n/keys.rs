//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//! 结构与 `address` 命名空间一一对应。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 地址页面文本
    pub address: AddressTexts,
    /// 错误提示
    pub errors: ErrorTexts,
}

/// 地址页面文本
pub struct AddressTexts {
    /// 副标题
    pub address_details: &'static str,
    /// 未设置主名称时的占位提示
    pub no_profile: &'static str,
    /// 资料卡片按钮
    pub view_profile: &'static str,
}

/// 错误提示文本
pub struct ErrorTexts {
    /// 名称列表加载失败
    pub names: &'static str,
}
