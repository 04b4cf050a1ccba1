//! View configuration

use serde::{Deserialize, Serialize};

use crate::error::{ViewError, ViewResult};
use crate::i18n::Language;

/// Names shown per page
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Page buttons shown at once
pub const DEFAULT_MAX_PAGE_BUTTONS: u32 = 5;
/// Ethereum mainnet
pub const DEFAULT_NETWORK: u64 = 1;

/// Address view configuration
///
/// # Default
///
/// `page_size = 10, max_page_buttons = 5, language = en-US, network = 1`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewConfig {
    /// Number of names per listing page
    pub page_size: u32,
    /// Maximum number of page buttons rendered
    pub max_page_buttons: u32,
    /// Language of localized strings
    pub language: Language,
    /// Chain ID passed through to the identity snippet and name rows
    pub network: u64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_page_buttons: DEFAULT_MAX_PAGE_BUTTONS,
            language: Language::default(),
            network: DEFAULT_NETWORK,
        }
    }
}

impl ViewConfig {
    /// Parse a JSON config, filling missing fields with defaults, then validate it.
    pub fn from_json(json: &str) -> ViewResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the view cannot work with.
    pub fn validate(&self) -> ViewResult<()> {
        if self.page_size == 0 {
            return Err(ViewError::InvalidConfig(
                "pageSize must be at least 1".to_string(),
            ));
        }
        if self.max_page_buttons == 0 {
            return Err(ViewError::InvalidConfig(
                "maxPageButtons must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
