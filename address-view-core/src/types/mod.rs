//! 类型定义模块

mod identity;
mod listing;
mod query;
mod render;
mod selection;

pub use identity::{Identity, IdentityRecords, IdentityResult, TextRecord};
pub use listing::{FetchStatus, ListingResult, NamePage, NameRecord};
pub use query::{ListingQuery, PageState, RouteParams};
pub use render::{
    HeaderSlot, IdentitySnippet, LeadingSlot, PageButtons, RenderModel, SnippetButton,
    TrailingSlot, Warning, WarningType,
};
pub use selection::{FilterSelection, NameKind, SortDirection, SortSelection, SortType};
