//! Name listing provider abstract Trait

use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ViewResult;
use crate::types::{ListingQuery, NamePage, NameRecord, SortDirection, SortSelection, SortType};

/// Name Listing Provider Trait
///
/// Resolves an owner address to one page of owned names.
/// Provides a default memory implementation of `InMemoryNameListingProvider`.
#[async_trait]
pub trait NameListingProvider: Send + Sync {
    /// Fetch one page of names
    ///
    /// # Arguments
    /// * `query` - Address, sort, page, page size and optional kind filter.
    ///   An absent filter means no filtering. Pages past the end yield an
    ///   empty `items` list with the real `page_count`/`total_count`.
    async fn fetch_page(&self, query: &ListingQuery) -> ViewResult<NamePage>;
}

/// In-memory name listing provider
///
/// Holds every name per owner and applies filter, sort and pagination on
/// each request. Addresses are matched case-insensitively.
#[derive(Clone, Default)]
pub struct InMemoryNameListingProvider {
    names: Arc<RwLock<HashMap<String, Vec<NameRecord>>>>,
}

impl InMemoryNameListingProvider {
    /// Create an empty provider
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add names owned by `address`
    pub async fn insert_names(&self, address: &str, names: impl IntoIterator<Item = NameRecord>) {
        self.names
            .write()
            .await
            .entry(address.to_lowercase())
            .or_default()
            .extend(names);
    }
}

#[async_trait]
impl NameListingProvider for InMemoryNameListingProvider {
    async fn fetch_page(&self, query: &ListingQuery) -> ViewResult<NamePage> {
        let store = self.names.read().await;
        let mut matching: Vec<&NameRecord> = store
            .get(&query.address.to_lowercase())
            .map(|names| {
                names
                    .iter()
                    .filter(|n| query.filter.is_none_or(|kind| n.kind == kind))
                    .collect()
            })
            .unwrap_or_default();

        matching.sort_by(|a, b| compare_names(a, b, query.sort));

        let total_count = u32::try_from(matching.len()).unwrap_or(u32::MAX);
        let items = matching
            .into_iter()
            .skip(query.offset())
            .take(query.page_size as usize)
            .cloned()
            .collect();

        Ok(NamePage::new(items, total_count, query.page_size))
    }
}

/// Order two names by the selected key, breaking ties by full name.
fn compare_names(a: &NameRecord, b: &NameRecord, sort: SortSelection) -> Ordering {
    let primary = match sort.sort_type {
        SortType::ExpiryDate => compare_optional(a.expiry_date, b.expiry_date, sort.direction),
        SortType::CreationDate => compare_optional(a.created_at, b.created_at, sort.direction),
        SortType::LabelName => directed(a.sort_label().cmp(b.sort_label()), sort.direction),
    };
    primary.then_with(|| a.name.cmp(&b.name))
}

/// Missing values go last in either direction.
fn compare_optional<T: Ord>(a: Option<T>, b: Option<T>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => directed(a.cmp(&b), direction),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}
