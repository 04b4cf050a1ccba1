//! 地址视图服务
//!
//! Drives the two asynchronous sources of the address view and publishes a
//! fresh [`RenderModel`] after every state change.

use std::sync::{Arc, PoisonError};

use tokio::sync::{watch, Mutex};
use tokio::task::{AbortHandle, JoinHandle};

use crate::config::ViewConfig;
use crate::controller::ListingViewController;
use crate::error::{ViewError, ViewResult};
use crate::services::ServiceContext;
use crate::types::{
    FilterSelection, Identity, IdentityResult, ListingQuery, ListingResult, NamePage, PageState,
    RenderModel, RouteParams, SortSelection,
};

/// A fetch that has been issued, keyed by what it was issued for
struct IssuedFetch<K> {
    key: K,
    task: Option<JoinHandle<()>>,
}

impl<K> IssuedFetch<K> {
    fn abort(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Everything the view owns between mount and unmount
struct ViewState {
    controller: ListingViewController,
    identity: IdentityResult,
    listing: ListingResult,
    /// Last issued listing fetch (in flight or settled)
    listing_fetch: Option<IssuedFetch<ListingQuery>>,
    /// Last issued identity fetch (in flight or settled)
    identity_fetch: Option<IssuedFetch<String>>,
}

impl ViewState {
    fn new(controller: ListingViewController) -> Self {
        Self {
            controller,
            identity: IdentityResult::default(),
            listing: ListingResult::default(),
            listing_fetch: None,
            identity_fetch: None,
        }
    }

    fn render(&self) -> RenderModel {
        self.controller
            .build_render_model(&self.identity, &self.listing)
    }

    /// Apply a listing response if it still belongs to the current query.
    ///
    /// Returns `false` for a superseded query. The held result is left
    /// untouched; if the response was for the last issued fetch, that record
    /// is cleared so the query is fetched again once it is current.
    fn accept_listing(&mut self, query: &ListingQuery, outcome: ViewResult<NamePage>) -> bool {
        if *query != self.controller.derive_query() {
            if self.listing_fetch.as_ref().is_some_and(|f| f.key == *query) {
                self.listing_fetch = None;
            }
            return false;
        }
        if let Some(fetch) = self.listing_fetch.as_mut().filter(|f| f.key == *query) {
            fetch.task = None;
        }

        match outcome {
            Ok(page) => self.listing.apply_page(page),
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Name listing fetch failed: {e}");
                } else {
                    log::error!("Name listing fetch failed: {e}");
                }
                self.listing.apply_error();
            }
        }
        true
    }

    /// Apply an identity response if it still belongs to the routed address.
    ///
    /// Lookup failures are stored as "no identity".
    fn accept_identity(&mut self, address: &str, outcome: ViewResult<Option<Identity>>) -> bool {
        if self.controller.route().resolved_address().ok() != Some(address) {
            if self.identity_fetch.as_ref().is_some_and(|f| f.key == address) {
                self.identity_fetch = None;
            }
            return false;
        }
        if let Some(fetch) = self.identity_fetch.as_mut().filter(|f| f.key == address) {
            fetch.task = None;
        }

        let identity = outcome.unwrap_or_else(|e| {
            log::warn!("Primary identity lookup failed, showing no identity: {e}");
            None
        });
        self.identity = IdentityResult::resolved(identity);
        true
    }
}

/// Abort handles of the latest spawned fetches.
///
/// Kept outside the state lock so that dropping the service can always reach
/// them, even while a finishing task holds the state.
#[derive(Default)]
struct FetchTasks {
    listing: Option<AbortHandle>,
    identity: Option<AbortHandle>,
}

impl FetchTasks {
    fn abort_all(&mut self) {
        for handle in [self.listing.take(), self.identity.take()].into_iter().flatten() {
            handle.abort();
        }
    }
}

struct Inner {
    ctx: Arc<ServiceContext>,
    state: Mutex<ViewState>,
    tasks: std::sync::Mutex<FetchTasks>,
    render_tx: watch::Sender<RenderModel>,
}

impl Inner {
    fn tasks(&self) -> std::sync::MutexGuard<'_, FetchTasks> {
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: &ViewState) {
        self.render_tx.send_replace(state.render());
    }

    /// Issue a listing fetch for the current query unless one was already
    /// issued for it. A fetch for an older query is aborted.
    fn refresh_listing(self: &Arc<Self>, state: &mut ViewState) {
        if let Err(e) = state.controller.route().resolved_address() {
            log::debug!("Skipping name listing fetch: {e}");
            return;
        }

        let query = state.controller.derive_query();
        if let Some(previous) = state.listing_fetch.as_mut() {
            if previous.key == query {
                return;
            }
            if previous.task.is_some() {
                log::debug!("Superseding name listing fetch for page {}", previous.key.page.get());
            }
            previous.abort();
        }

        state.listing.begin_loading();

        let inner = Arc::clone(self);
        let key = query.clone();
        let task = tokio::spawn(async move {
            let outcome = inner.ctx.name_listing_provider.fetch_page(&key).await;
            inner.finish_listing(&key, outcome).await;
        });

        self.tasks().listing = Some(task.abort_handle());
        state.listing_fetch = Some(IssuedFetch {
            key: query,
            task: Some(task),
        });
    }

    async fn finish_listing(&self, query: &ListingQuery, outcome: ViewResult<NamePage>) {
        let mut state = self.state.lock().await;
        if state.accept_listing(query, outcome) {
            self.publish(&state);
        } else {
            log::debug!(
                "Discarding stale name listing response for page {}",
                query.page.get()
            );
        }
    }

    /// Issue an identity lookup for the routed address unless one was
    /// already issued for it.
    fn refresh_identity(self: &Arc<Self>, state: &mut ViewState) {
        let address = match state.controller.route().resolved_address() {
            Ok(address) => address.to_string(),
            Err(e) => {
                log::debug!("Skipping primary identity lookup: {e}");
                return;
            }
        };

        if let Some(previous) = state.identity_fetch.as_mut() {
            if previous.key == address {
                return;
            }
            previous.abort();
        }

        state.identity = IdentityResult::loading();

        let inner = Arc::clone(self);
        let key = address.clone();
        let task = tokio::spawn(async move {
            let outcome = inner
                .ctx
                .primary_identity_provider
                .fetch_identity(&key)
                .await
                .map_err(|e| match e {
                    ViewError::IdentityFetch { .. } => e,
                    other => ViewError::IdentityFetch {
                        address: key.clone(),
                        message: other.to_string(),
                    },
                });
            inner.finish_identity(&key, outcome).await;
        });

        self.tasks().identity = Some(task.abort_handle());
        state.identity_fetch = Some(IssuedFetch {
            key: address,
            task: Some(task),
        });
    }

    async fn finish_identity(&self, address: &str, outcome: ViewResult<Option<Identity>>) {
        let mut state = self.state.lock().await;
        if state.accept_identity(address, outcome) {
            self.publish(&state);
        } else {
            log::debug!("Discarding primary identity response for {address}");
        }
    }
}

/// Address view service
///
/// Owns one [`ListingViewController`] plus the held results of both data
/// sources. Every user action mutates the controller synchronously; when the
/// derived query changes a new listing fetch is issued and any older one is
/// aborted. Responses for a query that is no longer current are dropped.
///
/// Dropping the service aborts in-flight fetches.
pub struct AddressViewService {
    inner: Arc<Inner>,
}

impl AddressViewService {
    /// Create the view with mount defaults. Nothing is fetched until [`mount`](Self::mount).
    pub fn new(
        ctx: Arc<ServiceContext>,
        config: ViewConfig,
        route: RouteParams,
    ) -> ViewResult<Self> {
        config.validate()?;

        let state = ViewState::new(ListingViewController::new(route, config));
        let (render_tx, _) = watch::channel(state.render());

        Ok(Self {
            inner: Arc::new(Inner {
                ctx,
                state: Mutex::new(state),
                tasks: std::sync::Mutex::new(FetchTasks::default()),
                render_tx,
            }),
        })
    }

    /// Receive every published render model
    pub fn subscribe(&self) -> watch::Receiver<RenderModel> {
        self.inner.render_tx.subscribe()
    }

    /// Start both lookups for the routed address
    pub async fn mount(&self) {
        let mut state = self.inner.state.lock().await;
        self.inner.refresh_identity(&mut state);
        self.inner.refresh_listing(&mut state);
        self.inner.publish(&state);
    }

    /// Update route input (e.g. once the router is ready or the address
    /// parameter changes). Selections are kept.
    pub async fn resolve_route(&self, route: RouteParams) {
        let mut state = self.inner.state.lock().await;
        if *state.controller.route() == route {
            return;
        }
        state.controller.set_route(route);
        self.inner.refresh_identity(&mut state);
        self.inner.refresh_listing(&mut state);
        self.inner.publish(&state);
    }

    /// Apply a sort/filter pair from the header controls.
    ///
    /// Returns whether the selection changed. An unchanged selection neither
    /// resets the page nor refetches.
    pub async fn apply_selection_change(
        &self,
        sort: SortSelection,
        filter: FilterSelection,
    ) -> bool {
        let mut state = self.inner.state.lock().await;
        if !state.controller.apply_selection_change(sort, filter) {
            return false;
        }
        self.inner.refresh_listing(&mut state);
        self.inner.publish(&state);
        true
    }

    /// Jump to a page
    pub async fn set_page(&self, page: u32) {
        let mut state = self.inner.state.lock().await;
        if state.controller.page() == PageState::new(page) {
            return;
        }
        state.controller.set_page(page);
        self.inner.refresh_listing(&mut state);
        self.inner.publish(&state);
    }

    /// Query for the current state
    pub async fn listing_query(&self) -> ListingQuery {
        self.inner.state.lock().await.controller.derive_query()
    }

    /// Held listing result
    pub async fn listing_result(&self) -> ListingResult {
        self.inner.state.lock().await.listing.clone()
    }

    /// Held identity result
    pub async fn identity_result(&self) -> IdentityResult {
        self.inner.state.lock().await.identity.clone()
    }

    /// Render model for the current state
    pub async fn render_model(&self) -> RenderModel {
        self.inner.state.lock().await.render()
    }
}

impl Drop for AddressViewService {
    fn drop(&mut self) {
        self.inner.tasks().abort_all();
    }
}
