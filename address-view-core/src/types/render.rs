//! Presentation-ready render model

use serde::{Deserialize, Serialize};

use super::listing::NameRecord;
use super::query::PageState;
use super::selection::{FilterSelection, SortSelection};

/// Severity of the page banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningType {
    Warning,
}

/// Page-level banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    #[serde(rename = "type")]
    pub warning_type: WarningType,
    pub message: String,
}

/// Header slot: current selections plus the result count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderSlot {
    pub sort: SortSelection,
    pub filter: FilterSelection,
    pub results_count: u32,
}

/// Action button on the identity snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SnippetButton {
    ViewProfile,
}

/// Props of the identity snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentitySnippet {
    /// Primary name
    pub name: String,
    /// Chain ID
    pub network: u64,
    pub button: SnippetButton,
    /// Localized label for `button`
    pub button_label: String,
    /// `description` text record
    pub description: Option<String>,
    /// `name` text record
    pub record_name: Option<String>,
    /// `url` text record
    pub url: Option<String>,
}

/// Leading slot content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LeadingSlot {
    /// Address has a usable primary identity
    IdentitySnippet(IdentitySnippet),
    /// No identity (or it failed to load, or its name is empty)
    NoIdentity {
        /// Localized placeholder text
        message: String,
    },
}

/// Page button parameters handed to the pager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageButtons {
    pub current: PageState,
    pub total: u32,
    pub max: u32,
    pub always_show_first: bool,
    pub always_show_last: bool,
}

impl PageButtons {
    /// Page numbers to render, with `None` standing for an ellipsis gap.
    ///
    /// At most `max` numbered buttons are shown in a window centred on the
    /// current page; the first and last pages are added on top of the window
    /// when `always_show_first` / `always_show_last` are set.
    pub fn visible_pages(&self) -> Vec<Option<u32>> {
        if self.total == 0 {
            return Vec::new();
        }
        let current = self.current.get().min(self.total);
        let max = self.max.max(1).min(self.total);

        let mut start = current.saturating_sub(max / 2).max(1);
        let end = start.saturating_add(max - 1).min(self.total);
        start = end - (max - 1);

        let mut pages = Vec::new();
        if self.always_show_first && start > 1 {
            pages.push(Some(1));
            if start > 2 {
                pages.push(None);
            }
        }
        pages.extend((start..=end).map(Some));
        if self.always_show_last && end < self.total {
            if end < self.total - 1 {
                pages.push(None);
            }
            pages.push(Some(self.total));
        }
        pages
    }
}

/// Trailing slot: current page of names plus pager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailingSlot {
    pub items: Vec<NameRecord>,
    /// Chain ID for the name rows
    pub network: u64,
    pub page_buttons: PageButtons,
}

/// Fully merged, presentation-ready view state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderModel {
    /// Shortened address
    pub title: String,
    pub subtitle: String,
    pub always_show_subtitle: bool,
    pub loading: bool,
    pub has_error: bool,
    /// Localized listing error, present only when `has_error`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<Warning>,
    pub header: HeaderSlot,
    pub leading: LeadingSlot,
    pub trailing: TrailingSlot,
}

impl RenderModel {
    /// Whether the identity snippet (rather than the placeholder) is selected
    pub fn shows_identity_snippet(&self) -> bool {
        matches!(self.leading, LeadingSlot::IdentitySnippet(_))
    }
}
