//! 简体中文翻译 (zh-CN)

use super::keys::{AddressTexts, ErrorTexts, Translations};

pub const TRANSLATIONS: Translations = Translations {
    address: AddressTexts {
        address_details: "地址详情",
        no_profile: "未设置主名称",
        view_profile: "查看资料",
    },
    errors: ErrorTexts {
        names: "加载该地址的名称时出错",
    },
};
