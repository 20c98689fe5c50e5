//! # Marketlens Core
//!
//! Search-and-rank engine over a fixed catalog of tradable items, with
//! per-term memoization in an expiring cache.
//!
//! ## Overview
//!
//! - **Canonical domain models** for items, prices, venues, and markets
//! - **Dataset snapshot cache** seeding the catalog from its static source
//! - **Search engine** filtering on name/venue and ranking by market code
//!   then price deviation, memoized per distinct term
//! - **Pagination** into fixed 15-item pages
//! - **Price-trend classification** for presentation color coding
//! - **Search session** translating term/page/catalog events into page views
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`catalog`] | Static catalog source and snapshot cache |
//! | [`domain`] | Domain models (Item, PriceRange, Venue, Market, LotSize) |
//! | [`error`] | Validation and catalog error types |
//! | [`page`] | Page slicing and counts |
//! | [`pricing`] | Effective price and trend classification |
//! | [`search`] | Filter, rank, and per-term memoization |
//! | [`session`] | Per-session search state |
//!
//! ## Quick Start
//!
//! ```rust
//! use marketlens_core::{Catalog, SearchEngine, SearchSession};
//! use marketlens_store::{ExpiringCache, MemoryStore};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut cache = ExpiringCache::new(MemoryStore::new());
//! let (catalog, _origin) = Catalog::load_or_cached(&mut cache)?;
//!
//! let mut session = SearchSession::new(catalog, SearchEngine::new(cache));
//! let view = session.on_term_change("gold")?;
//! assert_eq!(view.current_page, 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Cache read problems (absent, expired, corrupt) never surface as errors;
//! they degrade to recomputation from the catalog. Catalog load failures are
//! fatal and propagate as [`CatalogError`]. Store write failures propagate
//! as [`marketlens_store::StoreError`].

pub mod catalog;
pub mod domain;
pub mod error;
pub mod page;
pub mod pricing;
pub mod search;
pub mod session;

// Re-export commonly used types at crate root for convenience

pub use catalog::{Catalog, SnapshotOrigin, DATASET_CACHE_KEY};
pub use domain::{Item, LotSize, Market, PriceRange, Venue};
pub use error::{CatalogError, ValidationError};
pub use page::{page_count, paginate, PageView, PAGE_SIZE};
pub use pricing::{classify, effective_price, PriceTrend};
pub use search::{results_cache_key, SearchEngine, MIN_TERM_LEN, RESULTS_CACHE_PREFIX};
pub use session::SearchSession;

// Storage layer (re-exported from marketlens-store)
pub use marketlens_store::{
    CacheEntry, Clock, ExpiringCache, JsonFileStore, KeyValueStore, ManualClock, MemoryStore,
    StoreError, SystemClock, CACHE_TTL,
};
