//! 业务逻辑服务层

mod address_view_service;

pub use address_view_service::AddressViewService;

use std::sync::Arc;

use crate::traits::{NameListingProvider, PrimaryIdentityProvider};

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入具体的数据源实现。
pub struct ServiceContext {
    /// 名称列表数据源
    pub name_listing_provider: Arc<dyn NameListingProvider>,
    /// 主身份数据源
    pub primary_identity_provider: Arc<dyn PrimaryIdentityProvider>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        name_listing_provider: Arc<dyn NameListingProvider>,
        primary_identity_provider: Arc<dyn PrimaryIdentityProvider>,
    ) -> Self {
        Self {
            name_listing_provider,
            primary_identity_provider,
        }
    }
}
