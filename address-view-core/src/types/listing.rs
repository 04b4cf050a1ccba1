//! Owned name listing types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::selection::NameKind;

/// A name owned by the viewed address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRecord {
    /// Name ID (namehash or token ID)
    pub id: String,
    /// Full name, e.g. `alice.eth`
    pub name: String,
    /// First label, e.g. `alice`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_name: Option<String>,
    /// Registration or plain domain ownership
    #[serde(rename = "type")]
    pub kind: NameKind,
    /// Registration expiry (domains without a registration have none)
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::utils::datetime"
    )]
    pub expiry_date: Option<DateTime<Utc>>,
    /// Creation time
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::utils::datetime"
    )]
    pub created_at: Option<DateTime<Utc>>,
    /// Whether the address is the registry controller
    #[serde(default)]
    pub is_controller: bool,
    /// Whether the address is the registrant
    #[serde(default)]
    pub is_registrant: bool,
}

impl NameRecord {
    /// Label to sort by: the explicit label name, else the first label of `name`.
    pub fn sort_label(&self) -> &str {
        self.label_name
            .as_deref()
            .unwrap_or_else(|| self.name.split('.').next().unwrap_or(&self.name))
    }
}

/// One page as returned by a [`NameListingProvider`](crate::traits::NameListingProvider)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamePage {
    /// Items on the requested page
    pub items: Vec<NameRecord>,
    /// Total number of pages for the query
    pub page_count: u32,
    /// Total number of matching names across all pages
    pub total_count: u32,
}

impl NamePage {
    /// Build a page, computing `page_count = ceil(total_count / page_size)`.
    #[must_use]
    pub fn new(items: Vec<NameRecord>, total_count: u32, page_size: u32) -> Self {
        let page_count = if page_size == 0 {
            0
        } else {
            total_count.div_ceil(page_size)
        };
        Self {
            items,
            page_count,
            total_count,
        }
    }
}

/// Lifecycle of a listing fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    /// No fetch issued yet
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Held result of the name listing source
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResult {
    /// Items of the last successful page
    pub items: Vec<NameRecord>,
    /// Total number of pages
    pub page_count: u32,
    /// Total number of names
    pub total_count: u32,
    /// Whether a fetch is in flight
    pub loading: bool,
    /// Fetch status
    pub status: FetchStatus,
}

impl ListingResult {
    /// Mark a fetch as started. Previous items stay in place until replaced.
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.status = FetchStatus::Loading;
    }

    /// Apply a successful page
    pub fn apply_page(&mut self, page: NamePage) {
        self.items = page.items;
        self.page_count = page.page_count;
        self.total_count = page.total_count;
        self.loading = false;
        self.status = FetchStatus::Success;
    }

    /// Apply a failed fetch. Items from the last successful page are kept.
    pub fn apply_error(&mut self) {
        self.loading = false;
        self.status = FetchStatus::Error;
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.status == FetchStatus::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> NameRecord {
        NameRecord {
            id: name.to_string(),
            name: name.to_string(),
            label_name: None,
            kind: NameKind::Registration,
            expiry_date: None,
            created_at: None,
            is_controller: true,
            is_registrant: true,
        }
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(NamePage::new(vec![], 21, 10).page_count, 3);
        assert_eq!(NamePage::new(vec![], 20, 10).page_count, 2);
        assert_eq!(NamePage::new(vec![], 0, 10).page_count, 0);
    }

    #[test]
    fn status_transitions() {
        let mut result = ListingResult::default();
        assert_eq!(result.status, FetchStatus::Idle);

        result.begin_loading();
        assert!(result.loading);
        assert_eq!(result.status, FetchStatus::Loading);

        result.apply_page(NamePage::new(vec![record("alice.eth")], 1, 10));
        assert!(!result.loading);
        assert_eq!(result.status, FetchStatus::Success);
        assert_eq!(result.page_count, 1);
    }

    #[test]
    fn error_keeps_previous_items() {
        let mut result = ListingResult::default();
        result.apply_page(NamePage::new(vec![record("alice.eth")], 1, 10));

        result.begin_loading();
        result.apply_error();

        assert!(result.is_error());
        assert!(!result.loading);
        assert_eq!(result.items.len(), 1);
    }

    #[test]
    fn sort_label_falls_back_to_first_label() {
        let mut r = record("bob.alice.eth");
        assert_eq!(r.sort_label(), "bob");
        r.label_name = Some("zed".to_string());
        assert_eq!(r.sort_label(), "zed");
    }

    #[test]
    fn deserializes_subgraph_shape() {
        let json = r#"{
            "id": "0x01",
            "name": "alice.eth",
            "labelName": "alice",
            "type": "registration",
            "expiryDate": "1700000000",
            "isController": true
        }"#;
        let r: NameRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.kind, NameKind::Registration);
        assert_eq!(r.expiry_date.unwrap().timestamp(), 1_700_000_000);
        assert!(r.created_at.is_none());
        assert!(!r.is_registrant);
    }
}
