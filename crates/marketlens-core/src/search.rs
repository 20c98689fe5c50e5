use marketlens_store::{Clock, ExpiringCache, KeyValueStore, StoreError, SystemClock};

use crate::domain::Item;

/// Terms shorter than this yield no results and touch no cache. Noise
/// reduction, not an error.
pub const MIN_TERM_LEN: usize = 2;

/// Prefix of the per-term result cache keys.
pub const RESULTS_CACHE_PREFIX: &str = "searchResultsCache_";

/// Cache key for one search term.
///
/// The key keeps the term's original casing even though matching is
/// case-insensitive, so case-variant terms populate distinct entries.
pub fn results_cache_key(term: &str) -> String {
    format!("{RESULTS_CACHE_PREFIX}{term}")
}

/// Filters and ranks the catalog for a term, memoizing ranked result sets
/// per distinct term in the expiring cache.
#[derive(Debug)]
pub struct SearchEngine<S, C = SystemClock> {
    cache: ExpiringCache<S, C>,
}

impl<S: KeyValueStore, C: Clock> SearchEngine<S, C> {
    pub fn new(cache: ExpiringCache<S, C>) -> Self {
        Self { cache }
    }

    /// Search the catalog for `term`.
    ///
    /// Terms under [`MIN_TERM_LEN`] short-circuit to an empty sequence. A
    /// fresh cache entry for the term is returned unchanged; otherwise the
    /// catalog is filtered (case-insensitive substring on name or venue
    /// code), ranked, stored under the term's key, and returned. Cache read
    /// problems degrade to recomputation; only store write failures surface.
    pub fn search(&mut self, term: &str, catalog: &[Item]) -> Result<Vec<Item>, StoreError> {
        if term.chars().count() < MIN_TERM_LEN {
            return Ok(Vec::new());
        }

        let key = results_cache_key(term);
        if let Some(cached) = self.cache.get::<Vec<Item>>(&key) {
            return Ok(cached);
        }

        let needle = term.to_lowercase();
        let mut results: Vec<Item> = catalog
            .iter()
            .filter(|item| matches_term(item, &needle))
            .cloned()
            .collect();
        rank(&mut results);

        self.cache.set(&key, &results)?;
        Ok(results)
    }

    /// Whether a fresh result set exists for `term`. Read-only probe.
    pub fn is_cached(&self, term: &str) -> bool {
        term.chars().count() >= MIN_TERM_LEN
            && self
                .cache
                .get::<Vec<Item>>(&results_cache_key(term))
                .is_some()
    }

    pub fn cache(&self) -> &ExpiringCache<S, C> {
        &self.cache
    }
}

fn matches_term(item: &Item, needle_lower: &str) -> bool {
    item.name.to_lowercase().contains(needle_lower)
        || item.venue.as_str().to_lowercase().contains(needle_lower)
}

/// Stable rank: market code string ordering first, then ascending deviation
/// of the previous traded price from the high.
fn rank(items: &mut [Item]) {
    items.sort_by(|a, b| {
        a.market
            .as_str()
            .cmp(b.market.as_str())
            .then_with(|| deviation(a).total_cmp(&deviation(b)))
    });
}

fn deviation(item: &Item) -> f64 {
    (item.price.last_traded_previous - item.price.high).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LotSize, Market, PriceRange, Venue};
    use marketlens_store::{ManualClock, MemoryStore};

    fn item(id: u64, name: &str, venue: Venue, market: Market, prev: f64, high: f64) -> Item {
        Item::new(
            id,
            venue,
            PriceRange::new(high, 0.0, prev, prev).expect("price"),
            LotSize::One,
            "USD",
            name,
            market,
        )
        .expect("item")
    }

    fn engine() -> SearchEngine<MemoryStore, ManualClock> {
        SearchEngine::new(ExpiringCache::with_clock(
            MemoryStore::new(),
            ManualClock::new(0),
        ))
    }

    #[test]
    fn short_term_returns_empty_without_caching() {
        let mut engine = engine();
        let catalog = vec![item(1, "Gold", Venue::Onchain, Market::Us, 95.0, 100.0)];

        assert!(engine.search("a", &catalog).expect("search").is_empty());
        assert!(!engine.is_cached("a"));
    }

    #[test]
    fn matches_name_and_venue_case_insensitively() {
        let mut engine = engine();
        let catalog = vec![
            item(1, "Gold", Venue::Onchain, Market::Us, 95.0, 100.0),
            item(2, "Silver", Venue::Offchain, Market::Ch, 95.0, 100.0),
        ];

        let by_name = engine.search("gOLd", &catalog).expect("search");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, 1);

        let by_venue = engine.search("chain", &catalog).expect("search");
        assert_eq!(by_venue.len(), 2);
    }

    #[test]
    fn ranks_by_market_then_price_deviation() {
        let mut engine = engine();
        let catalog = vec![
            item(1, "Metal A", Venue::Onchain, Market::Us, 95.0, 100.0),
            item(2, "Metal B", Venue::Onchain, Market::Ch, 95.0, 100.0),
            item(3, "Metal C", Venue::Onchain, Market::Ch, 99.0, 100.0),
        ];

        let ranked = engine.search("metal", &catalog).expect("search");
        let ids: Vec<u64> = ranked.iter().map(|item| item.id).collect();
        // CH before US; within CH the deviation-1 item before deviation-5.
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn case_variant_terms_use_distinct_cache_keys() {
        let mut engine = engine();
        let catalog = vec![item(1, "Gold", Venue::Onchain, Market::Us, 95.0, 100.0)];

        engine.search("Gold", &catalog).expect("search");
        assert!(engine.is_cached("Gold"));
        assert!(!engine.is_cached("gold"));

        let lower = engine.search("gold", &catalog).expect("search");
        assert!(engine.is_cached("gold"));
        assert_eq!(lower[0].id, 1);
    }
}
