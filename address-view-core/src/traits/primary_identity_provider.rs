//! Primary identity provider abstract Trait

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ViewResult;
use crate::types::Identity;

/// Primary Identity Provider Trait
///
/// Resolves an address to its primary profile. Independent of the name
/// listing lifecycle.
#[async_trait]
pub trait PrimaryIdentityProvider: Send + Sync {
    /// Fetch the primary identity of `address`
    ///
    /// Returns `Ok(None)` when the address has no primary identity.
    async fn fetch_identity(&self, address: &str) -> ViewResult<Option<Identity>>;
}

/// In-memory primary identity provider
///
/// Addresses are matched case-insensitively.
#[derive(Clone, Default)]
pub struct InMemoryPrimaryIdentityProvider {
    identities: Arc<RwLock<HashMap<String, Identity>>>,
}

impl InMemoryPrimaryIdentityProvider {
    /// Create an empty provider
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the primary identity of `address`
    pub async fn set_identity(&self, address: &str, identity: Identity) {
        self.identities
            .write()
            .await
            .insert(address.to_lowercase(), identity);
    }
}

#[async_trait]
impl PrimaryIdentityProvider for InMemoryPrimaryIdentityProvider {
    async fn fetch_identity(&self, address: &str) -> ViewResult<Option<Identity>> {
        Ok(self
            .identities
            .read()
            .await
            .get(&address.to_lowercase())
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lookup_is_case_insensitive() {
        let provider = InMemoryPrimaryIdentityProvider::new();
        provider
            .set_identity("0xABC", Identity::named("alice.eth"))
            .await;

        let found = provider.fetch_identity("0xabc").await.unwrap();
        assert_eq!(found.unwrap().display_name(), Some("alice.eth"));
        assert!(provider.fetch_identity("0xdef").await.unwrap().is_none());
    }
}
