//! # Marketlens Store
//!
//! Persistent key-value storage and the expiring cache layer for marketlens.
//!
//! ## Overview
//!
//! This crate provides the storage foundation for the search stack:
//!
//! - **[`KeyValueStore`]**: string-keyed, string-valued store contract,
//!   injected so callers can swap the durable file store for an in-memory
//!   fake under test
//! - **[`ExpiringCache`]**: timestamp-stamped entries with a shared 14-day
//!   TTL; expired, absent, and corrupt entries all degrade to a miss
//! - **[`Clock`]**: epoch-millisecond time source, injectable for
//!   deterministic expiration tests
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | Expiring cache over any key-value store |
//! | [`clock`] | Time sources (system and manual) |
//! | [`error`] | Store error types |
//! | [`kv`] | Store trait and implementations |
//!
//! ## Concurrency
//!
//! Single-writer by construction: mutation requires `&mut self`. If several
//! processes share one file store, writes to the same key are
//! last-writer-wins with no merge.

pub mod cache;
pub mod clock;
pub mod error;
pub mod kv;

pub use cache::{CacheEntry, ExpiringCache, CACHE_TTL, TIMESTAMP_KEY_SUFFIX};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::StoreError;
pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};
