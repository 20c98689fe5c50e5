use serde::de::DeserializeOwned;
use serde::Serialize;
use time::Duration;

use crate::clock::{Clock, SystemClock};
use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Shared time-to-live for every cached entry kind.
pub const CACHE_TTL: Duration = Duration::days(14);

/// Suffix of the companion key holding an entry's write timestamp.
pub const TIMESTAMP_KEY_SUFFIX: &str = "_timestamp";

/// A cached value paired with its write timestamp (epoch milliseconds).
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<T> {
    pub value: T,
    pub created_at: i64,
}

impl<T> CacheEntry<T> {
    /// An entry is fresh iff `now < created_at + ttl`; the exact expiry
    /// instant counts as expired. Saturating so a foreign timestamp near
    /// `i64::MAX` cannot overflow.
    pub fn is_fresh(&self, now_ms: i64, ttl: Duration) -> bool {
        now_ms < self.created_at.saturating_add(ttl.whole_milliseconds() as i64)
    }
}

/// Expiring layer over a [`KeyValueStore`].
///
/// Each entry occupies two keys: the JSON-serialized payload under `key` and
/// a decimal epoch-millisecond timestamp under `key + "_timestamp"`. Reads
/// treat an absent key, an unparseable timestamp, a corrupt payload, and an
/// expired entry identically: all are a miss. Expired entries are not purged;
/// a later `set` silently overwrites them.
#[derive(Debug)]
pub struct ExpiringCache<S, C = SystemClock> {
    store: S,
    clock: C,
    ttl: Duration,
}

impl<S: KeyValueStore> ExpiringCache<S> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> ExpiringCache<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            ttl: CACHE_TTL,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the cached value for `key` if present and fresh. No side
    /// effects.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let entry = self.entry(key)?;
        entry
            .is_fresh(self.clock.now_ms(), self.ttl)
            .then_some(entry.value)
    }

    /// Serializes `value` under `key` and stamps the companion timestamp key.
    /// Always overwrites.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let payload = serde_json::to_string(value)?;
        self.store.set(key, &payload)?;
        self.store
            .set(&timestamp_key(key), &self.clock.now_ms().to_string())
    }

    fn entry<T: DeserializeOwned>(&self, key: &str) -> Option<CacheEntry<T>> {
        let payload = self.store.get(key)?;
        let stamp = self.store.get(&timestamp_key(key))?;
        let created_at = stamp.parse().ok()?;
        let value = serde_json::from_str(&payload).ok()?;
        Some(CacheEntry { value, created_at })
    }
}

fn timestamp_key(key: &str) -> String {
    format!("{key}{TIMESTAMP_KEY_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::kv::MemoryStore;

    fn test_cache(now_ms: i64) -> ExpiringCache<MemoryStore, ManualClock> {
        ExpiringCache::with_clock(MemoryStore::new(), ManualClock::new(now_ms))
    }

    #[test]
    fn miss_on_absent_key() {
        let cache = test_cache(0);
        assert_eq!(cache.get::<Vec<u32>>("absent"), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut cache = test_cache(1_000);
        cache.set("numbers", &vec![1u32, 2, 3]).expect("set");

        assert_eq!(cache.get::<Vec<u32>>("numbers"), Some(vec![1, 2, 3]));
    }

    #[test]
    fn entry_expires_at_ttl_boundary() {
        let clock = ManualClock::new(0);
        let mut cache = ExpiringCache::with_clock(MemoryStore::new(), clock);
        cache.set("key", &42u32).expect("set");

        let ttl_ms = CACHE_TTL.whole_milliseconds() as i64;

        cache.clock.set_ms(ttl_ms - 1);
        assert_eq!(cache.get::<u32>("key"), Some(42));

        cache.clock.set_ms(ttl_ms);
        assert_eq!(cache.get::<u32>("key"), None);

        cache.clock.set_ms(ttl_ms + 1);
        assert_eq!(cache.get::<u32>("key"), None);
    }

    #[test]
    fn corrupt_payload_is_a_miss() {
        let clock = ManualClock::new(0);
        let mut store = MemoryStore::new();
        store.set("key", "not json {").expect("set");
        store.set("key_timestamp", "0").expect("set");

        let cache = ExpiringCache::with_clock(store, clock);
        assert_eq!(cache.get::<u32>("key"), None);
    }

    #[test]
    fn corrupt_timestamp_is_a_miss() {
        let clock = ManualClock::new(0);
        let mut store = MemoryStore::new();
        store.set("key", "42").expect("set");
        store.set("key_timestamp", "last tuesday").expect("set");

        let cache = ExpiringCache::with_clock(store, clock);
        assert_eq!(cache.get::<u32>("key"), None);
    }

    #[test]
    fn set_overwrites_expired_entry() {
        let mut cache = test_cache(0);
        cache.set("key", &1u32).expect("set");

        let ttl_ms = CACHE_TTL.whole_milliseconds() as i64;
        cache.clock.set_ms(ttl_ms + 5);
        assert_eq!(cache.get::<u32>("key"), None);

        cache.set("key", &2u32).expect("set");
        assert_eq!(cache.get::<u32>("key"), Some(2));
    }

    #[test]
    fn timestamps_are_decimal_millisecond_strings() {
        let mut cache =
            ExpiringCache::with_clock(MemoryStore::new(), ManualClock::new(1_234_567));
        cache.set("key", &"value").expect("set");

        assert_eq!(
            cache.store.get("key_timestamp"),
            Some(String::from("1234567"))
        );
    }
}
