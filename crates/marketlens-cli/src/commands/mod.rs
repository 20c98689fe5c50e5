mod catalog;
mod search;

use std::time::Instant;

use serde_json::Value;

use marketlens_core::JsonFileStore;

use crate::cli::{Cli, Command};
use crate::envelope::{Envelope, EnvelopeMeta};
use crate::error::CliError;

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub cache_hit: bool,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            cache_hit: false,
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_cache_hit(mut self, cache_hit: bool) -> Self {
        self.cache_hit = cache_hit;
        self
    }
}

pub fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let started = Instant::now();
    let store = JsonFileStore::open(&cli.store_path);

    let command_result = match &cli.command {
        Command::Search(args) => search::run(args, store)?,
        Command::Catalog(args) => catalog::run(args, store)?,
    };

    let CommandResult {
        data,
        warnings,
        cache_hit,
    } = command_result;

    let mut meta = EnvelopeMeta::new(started.elapsed().as_millis() as u64, cache_hit);
    for warning in warnings {
        meta.push_warning(warning);
    }

    Ok(Envelope::new(meta, data))
}
