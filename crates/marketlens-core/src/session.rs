use marketlens_store::{Clock, KeyValueStore, StoreError, SystemClock};

use crate::catalog::Catalog;
use crate::domain::Item;
use crate::page::{page_count, paginate, PageView, PAGE_SIZE};
use crate::search::SearchEngine;

/// Per-session search state: current term, 1-based page, and the ranked
/// results for the term.
///
/// The session re-runs the engine whenever one of its inputs changes (the
/// term or the catalog reference) and only repages when the page changes.
#[derive(Debug)]
pub struct SearchSession<S, C = SystemClock> {
    engine: SearchEngine<S, C>,
    catalog: Catalog,
    term: String,
    page: usize,
    results: Vec<Item>,
}

impl<S: KeyValueStore, C: Clock> SearchSession<S, C> {
    pub fn new(catalog: Catalog, engine: SearchEngine<S, C>) -> Self {
        Self {
            engine,
            catalog,
            term: String::new(),
            page: 1,
            results: Vec::new(),
        }
    }

    /// The term changed: recompute results and reset to the first page.
    /// A term under the minimum length clears the results.
    pub fn on_term_change(&mut self, term: &str) -> Result<PageView, StoreError> {
        self.term = term.to_owned();
        self.page = 1;
        self.results = self.engine.search(term, self.catalog.items())?;
        Ok(self.page_view())
    }

    /// The page changed: repage only, never re-search.
    pub fn on_page_change(&mut self, page: usize) -> PageView {
        self.page = page;
        self.page_view()
    }

    /// The catalog reference changed (e.g. the snapshot cache resolved):
    /// re-run the current term through the engine. A term whose results are
    /// still cached is served from cache.
    pub fn on_catalog_change(&mut self, catalog: Catalog) -> Result<PageView, StoreError> {
        self.catalog = catalog;
        self.results = self.engine.search(&self.term, self.catalog.items())?;
        Ok(self.page_view())
    }

    /// Snapshot of the current page for the presentation boundary.
    pub fn page_view(&self) -> PageView {
        PageView {
            page_items: paginate(&self.results, PAGE_SIZE, self.page).to_vec(),
            current_page: self.page,
            page_count: page_count(self.results.len(), PAGE_SIZE),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn results(&self) -> &[Item] {
        &self.results
    }

    pub fn engine(&self) -> &SearchEngine<S, C> {
        &self.engine
    }
}
