//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use tokio::sync::{Notify, RwLock};

use crate::error::{ViewError, ViewResult};
use crate::services::ServiceContext;
use crate::traits::{
    InMemoryNameListingProvider, InMemoryPrimaryIdentityProvider, NameListingProvider,
    PrimaryIdentityProvider,
};
use crate::types::{Identity, ListingQuery, NameKind, NamePage, NameRecord};

pub const TEST_ADDRESS: &str = "0xb6E040C9ECAaE172a89bD561c5F73e1C48d28cd9";

// ===== Fixtures =====

/// Registration with an expiry `expiry_secs` seconds after the epoch
pub fn registration(name: &str, expiry_secs: i64) -> NameRecord {
    NameRecord {
        id: format!("0x{name}"),
        name: name.to_string(),
        label_name: name.split('.').next().map(str::to_string),
        kind: NameKind::Registration,
        expiry_date: DateTime::from_timestamp(expiry_secs, 0),
        created_at: DateTime::from_timestamp(expiry_secs - 1, 0),
        is_controller: true,
        is_registrant: true,
    }
}

/// Plain registry-owned name without expiry
pub fn domain(name: &str) -> NameRecord {
    NameRecord {
        id: format!("0x{name}"),
        name: name.to_string(),
        label_name: None,
        kind: NameKind::Domain,
        expiry_date: None,
        created_at: None,
        is_controller: true,
        is_registrant: false,
    }
}

/// Context backed by in-memory providers; the returned providers share
/// storage with the context.
pub fn create_test_context() -> (
    Arc<ServiceContext>,
    InMemoryNameListingProvider,
    InMemoryPrimaryIdentityProvider,
) {
    let names = InMemoryNameListingProvider::new();
    let identities = InMemoryPrimaryIdentityProvider::new();
    let ctx = Arc::new(ServiceContext::new(
        Arc::new(names.clone()),
        Arc::new(identities.clone()),
    ));
    (ctx, names, identities)
}

// ===== GatedListingProvider =====

/// Listing provider that records every query and can hold pages back
/// until released, or fail the next request.
pub struct GatedListingProvider {
    inner: InMemoryNameListingProvider,
    calls: RwLock<Vec<ListingQuery>>,
    gates: RwLock<HashMap<u32, Arc<Notify>>>,
    fail_next: AtomicBool,
}

impl GatedListingProvider {
    pub fn new(inner: InMemoryNameListingProvider) -> Self {
        Self {
            inner,
            calls: RwLock::new(Vec::new()),
            gates: RwLock::new(HashMap::new()),
            fail_next: AtomicBool::new(false),
        }
    }

    /// Requests for `page` block until [`release_page`](Self::release_page)
    pub async fn hold_page(&self, page: u32) {
        self.gates
            .write()
            .await
            .insert(page, Arc::new(Notify::new()));
    }

    pub async fn release_page(&self, page: u32) {
        if let Some(gate) = self.gates.write().await.remove(&page) {
            gate.notify_one();
        }
    }

    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub async fn calls(&self) -> Vec<ListingQuery> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl NameListingProvider for GatedListingProvider {
    async fn fetch_page(&self, query: &ListingQuery) -> ViewResult<NamePage> {
        self.calls.write().await.push(query.clone());

        let gate = self.gates.read().await.get(&query.page.get()).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(ViewError::ListingFetch {
                address: query.address.clone(),
                message: "indexer unavailable".to_string(),
            });
        }
        self.inner.fetch_page(query).await
    }
}

// ===== FailingIdentityProvider =====

pub struct FailingIdentityProvider;

#[async_trait]
impl PrimaryIdentityProvider for FailingIdentityProvider {
    async fn fetch_identity(&self, address: &str) -> ViewResult<Option<Identity>> {
        Err(ViewError::IdentityFetch {
            address: address.to_string(),
            message: "resolver unavailable".to_string(),
        })
    }
}

// ===== DelayedIdentityProvider =====

/// Identity provider that answers after a fixed delay and counts lookups
pub struct DelayedIdentityProvider {
    inner: InMemoryPrimaryIdentityProvider,
    delay: Duration,
    calls: AtomicUsize,
}

impl DelayedIdentityProvider {
    pub fn new(inner: InMemoryPrimaryIdentityProvider, delay: Duration) -> Self {
        Self {
            inner,
            delay,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PrimaryIdentityProvider for DelayedIdentityProvider {
    async fn fetch_identity(&self, address: &str) -> ViewResult<Option<Identity>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.inner.fetch_identity(address).await
    }
}
