//! Sort and filter selection types

use serde::{Deserialize, Serialize};

/// Key the name listing is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortType {
    /// Registration expiry
    #[default]
    ExpiryDate,
    /// Alphabetical by label
    LabelName,
    /// Creation / registration time
    CreationDate,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

/// Sort selection, replaced wholesale on change.
///
/// # Default
///
/// `{ ExpiryDate, Descending }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSelection {
    /// Sort key
    #[serde(rename = "type")]
    pub sort_type: SortType,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortSelection {
    #[must_use]
    pub fn new(sort_type: SortType, direction: SortDirection) -> Self {
        Self {
            sort_type,
            direction,
        }
    }
}

/// Kind of an owned name, also the value a listing can be filtered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameKind {
    /// Second-level name held through a registrar registration
    Registration,
    /// Name held through registry ownership only (subnames, wrapped names, ...)
    Domain,
}

/// Filter selection as chosen in the header controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterSelection {
    Registration,
    Domain,
    /// No filter applied
    #[default]
    None,
}

impl FilterSelection {
    /// Filter to pass down to the listing provider.
    ///
    /// `None` maps to no filter at all rather than a "filter by nothing" value.
    #[must_use]
    pub fn as_query_filter(self) -> Option<NameKind> {
        match self {
            Self::Registration => Some(NameKind::Registration),
            Self::Domain => Some(NameKind::Domain),
            Self::None => None,
        }
    }
}
