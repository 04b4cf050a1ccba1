//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use address_view_core::traits::{InMemoryNameListingProvider, InMemoryPrimaryIdentityProvider};
use address_view_core::types::{Identity, NameKind, NameRecord, RenderModel, RouteParams};
use address_view_core::{AddressViewService, ServiceContext, ViewConfig};
use chrono::DateTime;
use tokio::sync::watch;

pub const OWNER: &str = "0x983110309620D911731Ac0932219af06091b6744";

/// 等待渲染模型满足条件（超时则测试失败）
pub async fn wait_for(
    rx: &mut watch::Receiver<RenderModel>,
    f: impl FnMut(&RenderModel) -> bool,
) -> RenderModel {
    let result = tokio::time::timeout(Duration::from_secs(5), rx.wait_for(f)).await;
    let Ok(Ok(model)) = result else {
        panic!("render model condition not reached");
    };
    model.clone()
}

pub fn name(name: &str, kind: NameKind, expiry_secs: Option<i64>) -> NameRecord {
    NameRecord {
        id: format!("0x{name}"),
        name: name.to_string(),
        label_name: name.split('.').next().map(str::to_string),
        kind,
        expiry_date: expiry_secs.and_then(|s| DateTime::from_timestamp(s, 0)),
        created_at: None,
        is_controller: true,
        is_registrant: kind == NameKind::Registration,
    }
}

/// 15 registrations plus 5 plain domains, and a primary identity
pub async fn seeded_service(route: RouteParams) -> AddressViewService {
    let names = InMemoryNameListingProvider::new();
    names
        .insert_names(
            OWNER,
            (1..=15).map(|i| name(&format!("reg{i:02}.eth"), NameKind::Registration, Some(i))),
        )
        .await;
    names
        .insert_names(
            OWNER,
            (1..=5).map(|i| name(&format!("sub{i}.reg01.eth"), NameKind::Domain, None)),
        )
        .await;

    let identities = InMemoryPrimaryIdentityProvider::new();
    identities
        .set_identity(
            OWNER,
            Identity::named("reg01.eth")
                .with_text("description", "hi")
                .with_text("name", "Reg One"),
        )
        .await;

    let ctx = Arc::new(ServiceContext::new(Arc::new(names), Arc::new(identities)));
    let Ok(svc) = AddressViewService::new(ctx, ViewConfig::default(), route) else {
        panic!("default config must be valid");
    };
    svc
}
