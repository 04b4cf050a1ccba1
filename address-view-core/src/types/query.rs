//! Listing query and route input types

use serde::{Deserialize, Serialize};

use super::selection::{NameKind, SortSelection};
use crate::error::{ViewError, ViewResult};

/// Current page index (1-based, always `>= 1`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageState(u32);

impl PageState {
    /// First page
    pub const FIRST: Self = Self(1);

    /// Create a page index, clamping `0` to the first page.
    #[must_use]
    pub fn new(page: u32) -> Self {
        Self(page.max(1))
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<u32> for PageState {
    fn from(page: u32) -> Self {
        Self::new(page)
    }
}

/// Parameters sent to the name listing provider.
///
/// Derived from view state on demand, never stored. Two equal queries
/// identify the same in-flight request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingQuery {
    /// Owner address
    pub address: String,
    /// Sort selection
    pub sort: SortSelection,
    /// Page number (1-indexed)
    pub page: PageState,
    /// Number of items per page
    pub page_size: u32,
    /// Optional kind filter, absent when no filter is selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<NameKind>,
}

impl ListingQuery {
    /// Zero-based index of the first item on this page
    #[must_use]
    pub fn offset(&self) -> usize {
        (self.page.get() as usize - 1) * self.page_size as usize
    }
}

/// Route input of the view: the address parameter and whether the router
/// has finished resolving it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteParams {
    /// Address parameter, possibly empty while the route is resolving
    pub address: String,
    /// Whether route parameters are ready
    pub ready: bool,
}

impl RouteParams {
    #[must_use]
    pub fn new(address: impl Into<String>, ready: bool) -> Self {
        Self {
            address: address.into(),
            ready,
        }
    }

    /// Route that is still resolving
    #[must_use]
    pub fn pending() -> Self {
        Self::default()
    }

    /// The resolved address, or `InvalidRouteParameter` while the route is
    /// not ready or the address is empty.
    pub fn resolved_address(&self) -> ViewResult<&str> {
        if !self.ready {
            return Err(ViewError::InvalidRouteParameter(
                "route not ready".to_string(),
            ));
        }
        let address = self.address.trim();
        if address.is_empty() {
            return Err(ViewError::InvalidRouteParameter(
                "address is empty".to_string(),
            ));
        }
        Ok(address)
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved_address().is_ok()
    }
}
