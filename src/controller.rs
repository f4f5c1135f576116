// src/controller.rs
use std::sync::Arc;

use crate::config::options::AppOptions;
use crate::error::{LoadError, LookupError};
use crate::loader;
use crate::resolver::{self, Hit};
use crate::status::StatusSink;
use crate::store::TableStore;
use crate::table::Table;

/// Owns the options and the table store. Both the GUI and the CLI drive
/// loads and lookups through here, so typed and scanned input share one path.
pub struct Controller {
    options: AppOptions,
    store: Arc<TableStore>,
}

impl Controller {
    pub fn new(options: AppOptions) -> Self {
        Self::with_store(options, Arc::new(TableStore::new()))
    }

    pub fn with_store(options: AppOptions, store: Arc<TableStore>) -> Self {
        Self { options, store }
    }

    pub fn options(&self) -> &AppOptions { &self.options }

    pub fn store(&self) -> Arc<TableStore> { self.store.clone() }

    pub fn table(&self) -> Arc<Table> { self.store.snapshot() }

    pub fn is_ready(&self) -> bool { self.store.is_ready() }

    /// (Re)load the configured source. Safe to repeat.
    pub fn load(&self, status: &mut dyn StatusSink) -> Result<usize, LoadError> {
        let src = &self.options.source;
        loader::load(&src.source(), src, &self.store, status)
    }

    /// Resolve typed or scanned text against the current table.
    pub fn submit(&self, raw: &str) -> Result<Hit, LookupError> {
        let outcome = resolver::resolve(&self.store.snapshot(), raw);
        match &outcome {
            Ok(hit) => logf!("Lookup: {} → {}", hit.id, hit.value),
            Err(e) => logd!("Lookup: {:?} → {:?}", raw, e),
        }
        outcome
    }
}
