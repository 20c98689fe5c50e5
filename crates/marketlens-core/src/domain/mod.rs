//! Canonical domain types for the marketlens catalog.
//!
//! All models are serde-round-trippable in the catalog wire format (camelCase
//! fields, closed string enums) and validate their invariants at construction
//! or at catalog load.

mod item;

pub use item::{Item, LotSize, Market, PriceRange, Venue};
