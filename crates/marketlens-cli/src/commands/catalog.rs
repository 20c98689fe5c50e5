use std::collections::BTreeMap;

use serde::Serialize;

use marketlens_core::{Catalog, ExpiringCache, Item, JsonFileStore, SnapshotOrigin};

use crate::cli::CatalogArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogResponseData {
    total_items: usize,
    origin: SnapshotOrigin,
    markets: BTreeMap<&'static str, usize>,
    venues: BTreeMap<&'static str, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<Vec<Item>>,
}

pub fn run(args: &CatalogArgs, store: JsonFileStore) -> Result<CommandResult, CliError> {
    let mut cache = ExpiringCache::new(store);
    let (catalog, origin) = Catalog::load_or_cached(&mut cache)?;

    let mut markets = BTreeMap::new();
    let mut venues = BTreeMap::new();
    for item in catalog.items() {
        *markets.entry(item.market.as_str()).or_insert(0) += 1;
        *venues.entry(item.venue.as_str()).or_insert(0) += 1;
    }

    let data = serde_json::to_value(CatalogResponseData {
        total_items: catalog.len(),
        origin,
        markets,
        venues,
        items: args.verbose.then(|| catalog.items().to_vec()),
    })?;

    Ok(CommandResult::ok(data).with_cache_hit(origin == SnapshotOrigin::Cache))
}
