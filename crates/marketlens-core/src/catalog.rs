use std::collections::HashSet;

use serde::Serialize;

use marketlens_store::{Clock, ExpiringCache, KeyValueStore};

use crate::domain::Item;
use crate::error::CatalogError;

/// Cache key of the singleton dataset snapshot.
pub const DATASET_CACHE_KEY: &str = "searchCache";

/// Bundled static catalog source.
const CATALOG_SOURCE: &str = include_str!("../assets/catalog.json");

/// Where a catalog instance came from, reported to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotOrigin {
    /// Served from a fresh snapshot entry in the expiring cache.
    Cache,
    /// Loaded from the static source and written back to the cache.
    Seeded,
}

/// The full, read-only collection of searchable items.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Parse and validate the bundled static source.
    ///
    /// Failure here is fatal to initialization: there is no fallback dataset,
    /// and an empty catalog would mask a broken asset.
    pub fn load() -> Result<Self, CatalogError> {
        let items: Vec<Item> = serde_json::from_str(CATALOG_SOURCE)?;
        Self::from_items(items)
    }

    /// Validate an already-deserialized item collection.
    pub fn from_items(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            item.validate()
                .map_err(|source| CatalogError::InvalidItem {
                    id: item.id,
                    source,
                })?;
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId { id: item.id });
            }
        }

        Ok(Self { items })
    }

    /// Resolve the dataset snapshot: a fresh cache entry wins, otherwise the
    /// static source is loaded and written back so the next session within
    /// the TTL window skips the load. Either way the returned catalog is the
    /// working copy the search engine operates on.
    pub fn load_or_cached<S: KeyValueStore, C: Clock>(
        cache: &mut ExpiringCache<S, C>,
    ) -> Result<(Self, SnapshotOrigin), CatalogError> {
        if let Some(items) = cache.get::<Vec<Item>>(DATASET_CACHE_KEY) {
            return Ok((Self { items }, SnapshotOrigin::Cache));
        }

        let catalog = Self::load()?;
        cache.set(DATASET_CACHE_KEY, &catalog.items)?;
        Ok((catalog, SnapshotOrigin::Seeded))
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
