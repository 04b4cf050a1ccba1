//! Address View Core Library
//!
//! View-state coordination for an address page that shows the primary
//! identity of an address next to a paginated, sortable, filterable list of
//! the names it owns:
//! - Listing view controller (sort / filter / page state, query derivation, render model)
//! - Address view service (drives both lookups, drops superseded responses)
//! - Data source traits with in-memory implementations
//!
//! Network access, presentation and routing stay outside this crate; the
//! data sources are injected through traits.

pub mod config;
pub mod controller;
pub mod error;
pub mod i18n;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::ViewConfig;
pub use controller::ListingViewController;
pub use error::{ViewError, ViewResult};
pub use services::{AddressViewService, ServiceContext};
pub use traits::{NameListingProvider, PrimaryIdentityProvider};
