// src/explorer/mod.rs
// View-state controller: owns the mutually-exclusive browse/search/filter
// modes and decides which aggregator calls fire on each transition. The
// whole view state is one value, replaced atomically per transition.

use std::sync::Arc;

use futures::future::try_join_all;
use tracing::{info, warn};

use crate::api::types::{id_from_url, NamedRef, Pokemon};
use crate::api::CatalogApi;
use crate::catalog::Catalog;
use crate::config::{INDEX_LIMIT, MAX_VISIBLE_PAGES, PAGE_SIZE};

/// The three mutually-exclusive display modes. Entering a search clears any
/// filter and vice versa; pagination exists only while browsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    Browsing { page: usize },
    Searching { query: String },
    FilteringByType { type_name: String },
}

/// Everything the presentation layer reads, replaced wholesale on each
/// transition so no in-flight fetch ever mutates it in place.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub mode: ViewMode,
    pub displayed: Vec<Pokemon>,
    pub error: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            mode: ViewMode::Browsing { page: 1 },
            displayed: Vec::new(),
            error: None,
        }
    }
}

pub struct Explorer<A: CatalogApi> {
    api: Arc<A>,
    catalog: Catalog<A>,
    /// Session-wide reference index, fetched once; pagination slices this
    /// locally instead of re-paging upstream.
    index: Vec<NamedRef>,
    total_count: usize,
    /// Last successfully browsed page and its entries, kept so clearing a
    /// search restores the unfiltered set without a re-fetch.
    browse_page: usize,
    browse_cache: Vec<Pokemon>,
    state: ViewState,
}

impl<A: CatalogApi> Explorer<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            catalog: Catalog::new(Arc::clone(&api)),
            api,
            index: Vec::new(),
            total_count: 0,
            browse_page: 1,
            browse_cache: Vec::new(),
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog<A> {
        &self.catalog
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_count)
    }

    /// Pagination controls are shown only while browsing.
    pub fn pagination_visible(&self) -> bool {
        matches!(self.state.mode, ViewMode::Browsing { .. })
    }

    /// Visible page buttons: a window of up to `MAX_VISIBLE_PAGES` numbers
    /// centered on the current page. Empty outside browse mode.
    pub fn page_window(&self) -> Vec<usize> {
        match self.state.mode {
            ViewMode::Browsing { page } => page_window(page, self.total_pages()),
            _ => Vec::new(),
        }
    }

    /// Fetch the session index (one large page used purely locally), then
    /// load the first browse page. An index failure is a page-level banner.
    pub async fn load_index(&mut self) {
        match self.api.entry_index(INDEX_LIMIT, 0).await {
            Ok(page) => {
                info!(count = page.count, resident = page.results.len(), "reference index loaded");
                self.index = page.results;
                self.total_count = page.count;
                self.load_page(1).await;
            }
            Err(err) => {
                warn!(%err, "failed to load reference index");
                self.state = ViewState {
                    mode: ViewMode::Browsing { page: 1 },
                    displayed: Vec::new(),
                    error: Some("Failed to load Pokemon list".to_string()),
                };
            }
        }
    }

    /// Honored only while browsing; out-of-range pages are ignored.
    pub async fn go_to_page(&mut self, page: usize) {
        if !matches!(self.state.mode, ViewMode::Browsing { .. }) {
            return;
        }
        if page == 0 || page > self.total_pages() {
            return;
        }
        self.load_page(page).await;
    }

    /// Enter or clear the free-text query.
    ///
    /// A non-empty query clears any active type filter and resets the page
    /// to 1. Clearing the query restores the resident browse set without a
    /// re-fetch. Empty input while not searching changes nothing.
    pub async fn set_query(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            if matches!(self.state.mode, ViewMode::Searching { .. }) {
                self.state = ViewState {
                    mode: ViewMode::Browsing { page: self.browse_page },
                    displayed: self.browse_cache.clone(),
                    error: None,
                };
            }
            return;
        }

        self.browse_page = 1;
        let results = self.catalog.search_exact(query).await;
        self.state = ViewState {
            mode: ViewMode::Searching { query: query.to_string() },
            displayed: results,
            error: None,
        };
    }

    /// Select a type filter, or `None` to drop it and return to browsing.
    /// Selecting a type clears any active query and resets the page to 1; a
    /// load failure clears the displayed set and surfaces a banner.
    pub async fn select_type(&mut self, type_name: Option<&str>) {
        let Some(name) = type_name else {
            self.state = ViewState {
                mode: ViewMode::Browsing { page: self.browse_page },
                displayed: self.browse_cache.clone(),
                error: None,
            };
            return;
        };

        self.browse_page = 1;
        match self.catalog.members_of_type(name).await {
            Ok(members) => {
                self.state = ViewState {
                    mode: ViewMode::FilteringByType { type_name: name.to_string() },
                    displayed: members,
                    error: None,
                };
            }
            Err(err) => {
                warn!(type_name = name, %err, "type filter load failed");
                self.state = ViewState {
                    mode: ViewMode::FilteringByType { type_name: name.to_string() },
                    displayed: Vec::new(),
                    error: Some(format!("Failed to load {name} type Pokemon")),
                };
            }
        }
    }

    /// Resolve the local slice for `page` concurrently. All-or-nothing: one
    /// failed entry fails the page, surfacing a banner and leaving the
    /// previously displayed set untouched.
    async fn load_page(&mut self, page: usize) {
        let start = ((page - 1) * PAGE_SIZE).min(self.index.len());
        let end = (start + PAGE_SIZE).min(self.index.len());
        let api = &self.api;
        let fetches = self.index[start..end].iter().map(|entry| {
            let key = id_from_url(&entry.url)
                .map(|id| id.to_string())
                .unwrap_or_else(|| entry.name.clone());
            async move { api.entry(&key).await }
        });

        match try_join_all(fetches).await {
            Ok(entries) => {
                self.browse_page = page;
                self.browse_cache = entries.clone();
                self.state = ViewState {
                    mode: ViewMode::Browsing { page },
                    displayed: entries,
                    error: None,
                };
            }
            Err(err) => {
                warn!(page, %err, "page load failed");
                self.state = ViewState {
                    mode: ViewMode::Browsing { page },
                    displayed: std::mem::take(&mut self.state.displayed),
                    error: Some("Failed to load Pokemon".to_string()),
                };
            }
        }
    }
}

fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

fn page_window(current: usize, total: usize) -> Vec<usize> {
    if total == 0 {
        return Vec::new();
    }
    let mut start = current.saturating_sub(MAX_VISIBLE_PAGES / 2).clamp(1, total);
    let end = (start + MAX_VISIBLE_PAGES - 1).min(total);
    if (end + 1).saturating_sub(start) < MAX_VISIBLE_PAGES {
        start = (end + 1).saturating_sub(MAX_VISIBLE_PAGES).max(1);
    }
    (start..=end).collect()
}
