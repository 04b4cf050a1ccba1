//! Data source abstraction trait definition

mod name_listing_provider;
mod primary_identity_provider;

pub use name_listing_provider::{InMemoryNameListingProvider, NameListingProvider};
pub use primary_identity_provider::{InMemoryPrimaryIdentityProvider, PrimaryIdentityProvider};
