use thiserror::Error;

use marketlens_store::StoreError;

/// Validation errors for catalog items.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },
    #[error("price low must be <= high")]
    InvalidPriceRange,
    #[error("item name cannot be empty")]
    EmptyName,
}

/// Failures while loading the static catalog.
///
/// A catalog that cannot be loaded is fatal to initialization; there is no
/// fallback dataset, and silently producing an empty catalog would mask a
/// broken asset.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog source is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog item {id} failed validation: {source}")]
    InvalidItem {
        id: u64,
        #[source]
        source: ValidationError,
    },

    #[error("duplicate item id {id} in catalog")]
    DuplicateId { id: u64 },

    #[error(transparent)]
    Store(#[from] StoreError),
}
