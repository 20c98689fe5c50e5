use serde::Serialize;

use marketlens_core::{
    classify, effective_price, Catalog, ExpiringCache, Item, JsonFileStore, PriceTrend,
    SearchEngine, SearchSession, SnapshotOrigin, MIN_TERM_LEN,
};

use crate::cli::SearchArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponseData {
    term: String,
    catalog_origin: SnapshotOrigin,
    total_results: usize,
    current_page: usize,
    page_count: usize,
    items: Vec<SearchRow>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRow {
    #[serde(flatten)]
    item: Item,
    effective_price: f64,
    trend: PriceTrend,
}

impl SearchRow {
    fn new(item: &Item) -> Self {
        let effective = effective_price(item);
        Self {
            effective_price: effective,
            trend: classify(effective, item.price.high),
            item: item.clone(),
        }
    }
}

pub fn run(args: &SearchArgs, store: JsonFileStore) -> Result<CommandResult, CliError> {
    if args.page == 0 {
        return Err(CliError::Command(String::from(
            "--page is 1-based and must be greater than zero",
        )));
    }

    let mut cache = ExpiringCache::new(store);
    let (catalog, origin) = Catalog::load_or_cached(&mut cache)?;

    let engine = SearchEngine::new(cache);
    let term_was_cached = engine.is_cached(&args.term);

    let mut session = SearchSession::new(catalog, engine);
    let mut view = session.on_term_change(&args.term)?;
    if args.page > 1 {
        view = session.on_page_change(args.page);
    }

    let items = view.page_items.iter().map(SearchRow::new).collect();
    let data = serde_json::to_value(SearchResponseData {
        term: args.term.clone(),
        catalog_origin: origin,
        total_results: session.results().len(),
        current_page: view.current_page,
        page_count: view.page_count,
        items,
    })?;

    let mut result = CommandResult::ok(data).with_cache_hit(term_was_cached);

    if args.term.chars().count() < MIN_TERM_LEN {
        result = result.with_warning(format!(
            "term '{}' is shorter than {MIN_TERM_LEN} characters; no search was performed",
            args.term
        ));
    } else if args.page > 1 && args.page > view.page_count {
        result = result.with_warning(format!(
            "page {} is past the last page ({})",
            args.page, view.page_count
        ));
    }

    Ok(result)
}
