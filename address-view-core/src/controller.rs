//! Listing view controller
//!
//! Single source of truth for the sort, filter and page selections of the
//! address view. Derives the listing query from them and merges the two
//! asynchronously loaded sources into one [`RenderModel`].
//!
//! The controller is synchronous and owns no I/O; fetching is driven by
//! [`AddressViewService`](crate::services::AddressViewService).

use crate::config::ViewConfig;
use crate::i18n::Translations;
use crate::types::{
    FilterSelection, HeaderSlot, IdentityResult, IdentitySnippet, LeadingSlot, ListingQuery,
    ListingResult, PageButtons, PageState, RenderModel, RouteParams, SnippetButton, SortSelection,
    TrailingSlot, Warning, WarningType,
};
use crate::utils::shorten_address;

/// Text record keys read into the identity snippet
const DESCRIPTION_KEY: &str = "description";
const NAME_KEY: &str = "name";
const URL_KEY: &str = "url";

/// View state for one mounted address view
#[derive(Debug, Clone)]
pub struct ListingViewController {
    route: RouteParams,
    config: ViewConfig,
    sort: SortSelection,
    filter: FilterSelection,
    page: PageState,
}

impl ListingViewController {
    /// Create a controller with mount defaults:
    /// `sort = {ExpiryDate, Descending}`, `filter = None`, `page = 1`.
    #[must_use]
    pub fn new(route: RouteParams, config: ViewConfig) -> Self {
        Self {
            route,
            config,
            sort: SortSelection::default(),
            filter: FilterSelection::default(),
            page: PageState::FIRST,
        }
    }

    pub fn route(&self) -> &RouteParams {
        &self.route
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn sort(&self) -> SortSelection {
        self.sort
    }

    pub fn filter(&self) -> FilterSelection {
        self.filter
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    /// Replace the route input. Selections are kept.
    pub fn set_route(&mut self, route: RouteParams) {
        self.route = route;
    }

    /// Apply a sort/filter pair coming from the header controls.
    ///
    /// Each field is compared independently; if either differs it is replaced
    /// and the page goes back to 1. Returns whether anything changed. When
    /// nothing differs no state is touched.
    pub fn apply_selection_change(
        &mut self,
        sort: SortSelection,
        filter: FilterSelection,
    ) -> bool {
        let mut changed = false;
        if sort.sort_type != self.sort.sort_type || sort.direction != self.sort.direction {
            self.sort = sort;
            changed = true;
        }
        if filter != self.filter {
            self.filter = filter;
            changed = true;
        }
        if changed {
            self.page = PageState::FIRST;
        }
        changed
    }

    /// Jump to `page`. Not validated against the page count; a page past the
    /// end is requested as-is and comes back empty.
    pub fn set_page(&mut self, page: u32) {
        self.page = PageState::new(page);
    }

    /// Query for the current state. The filter is left out entirely when no
    /// filter is selected.
    pub fn derive_query(&self) -> ListingQuery {
        ListingQuery {
            address: self.route.address.clone(),
            sort: self.sort,
            page: self.page,
            page_size: self.config.page_size,
            filter: self.filter.as_query_filter(),
        }
    }

    fn translations(&self) -> &'static Translations {
        self.config.language.translations()
    }

    /// Merge both sources into the render model.
    ///
    /// Identity failures never surface here: the service stores them as
    /// "no identity". An unresolved route renders as loading.
    pub fn build_render_model(
        &self,
        identity: &IdentityResult,
        listing: &ListingResult,
    ) -> RenderModel {
        let t = self.translations();

        let loading = identity.loading || listing.loading || !self.route.is_resolved();
        let has_error = listing.is_error();
        let error_message = has_error.then(|| t.errors.names.to_string());
        let warning = error_message.as_ref().map(|message| Warning {
            warning_type: WarningType::Warning,
            message: message.clone(),
        });

        RenderModel {
            title: shorten_address(&self.route.address),
            subtitle: t.address.address_details.to_string(),
            always_show_subtitle: true,
            loading,
            has_error,
            error_message,
            warning,
            header: HeaderSlot {
                sort: self.sort,
                filter: self.filter,
                results_count: listing.total_count,
            },
            leading: self.leading_slot(identity),
            trailing: TrailingSlot {
                items: listing.items.clone(),
                network: self.config.network,
                page_buttons: PageButtons {
                    current: self.page,
                    total: listing.page_count,
                    max: self.config.max_page_buttons,
                    always_show_first: true,
                    always_show_last: true,
                },
            },
        }
    }

    fn leading_slot(&self, identity: &IdentityResult) -> LeadingSlot {
        let t = self.translations();
        let usable = identity
            .identity
            .as_ref()
            .and_then(|profile| profile.display_name().map(|name| (profile, name)));
        let Some((profile, name)) = usable else {
            return LeadingSlot::NoIdentity {
                message: t.address.no_profile.to_string(),
            };
        };

        LeadingSlot::IdentitySnippet(IdentitySnippet {
            name: name.to_string(),
            network: self.config.network,
            button: SnippetButton::ViewProfile,
            button_label: t.address.view_profile.to_string(),
            description: profile.text_record(DESCRIPTION_KEY).map(str::to_string),
            record_name: profile.text_record(NAME_KEY).map(str::to_string),
            url: profile.text_record(URL_KEY).map(str::to_string),
        })
    }
}
