//! Primary identity types

use serde::{Deserialize, Serialize};

/// A key/value text record attached to an identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    pub key: String,
    pub value: String,
}

impl TextRecord {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Records of an identity
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IdentityRecords {
    /// Text records, in resolver order
    #[serde(default)]
    pub texts: Vec<TextRecord>,
}

/// Primary profile associated with an address
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Identity {
    /// Primary name, e.g. `alice.eth`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records: Option<IdentityRecords>,
}

impl Identity {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            records: None,
        }
    }

    /// Attach a text record
    #[must_use]
    pub fn with_text(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.records
            .get_or_insert_with(IdentityRecords::default)
            .texts
            .push(TextRecord::new(key, value));
        self
    }

    /// Value of the first text record with `key`
    pub fn text_record(&self, key: &str) -> Option<&str> {
        self.records
            .as_ref()?
            .texts
            .iter()
            .find(|r| r.key == key)
            .map(|r| r.value.as_str())
    }

    /// The primary name, if present and non-empty
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

/// Held result of the primary identity source
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,
    pub loading: bool,
}

impl IdentityResult {
    /// Lookup in flight, nothing known yet
    #[must_use]
    pub fn loading() -> Self {
        Self {
            identity: None,
            loading: true,
        }
    }

    /// Lookup finished
    #[must_use]
    pub fn resolved(identity: Option<Identity>) -> Self {
        Self {
            identity,
            loading: false,
        }
    }
}
