//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// View layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ViewError {
    /// Name listing lookup failed
    #[error("Failed to fetch names for {address}: {message}")]
    ListingFetch { address: String, message: String },

    /// Primary identity lookup failed
    #[error("Failed to fetch primary identity for {address}: {message}")]
    IdentityFetch { address: String, message: String },

    /// Route parameter not yet resolved (address missing or router not ready)
    #[error("Invalid route parameter: {0}")]
    InvalidRouteParameter(String),

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl ViewError {
    /// Whether it is expected behavior (route still resolving, bad user config, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidRouteParameter(_)
            | Self::InvalidConfig(_)
            | Self::IdentityFetch { .. } => true,
            Self::ListingFetch { .. } | Self::SerializationError(_) => false,
        }
    }
}

impl From<serde_json::Error> for ViewError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

/// View layer Result type alias
pub type ViewResult<T> = std::result::Result<T, ViewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_failures_are_unexpected() {
        let listing = ViewError::ListingFetch {
            address: "0xabc".to_string(),
            message: "timeout".to_string(),
        };
        let identity = ViewError::IdentityFetch {
            address: "0xabc".to_string(),
            message: "timeout".to_string(),
        };
        let route = ViewError::InvalidRouteParameter("address".to_string());

        assert!(!listing.is_expected());
        assert!(identity.is_expected());
        assert!(route.is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let err = ViewError::InvalidRouteParameter("address".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "InvalidRouteParameter");
        assert_eq!(json["details"], "address");
    }
}
