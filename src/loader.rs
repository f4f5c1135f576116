// src/loader.rs
use crate::config::options::SourceOptions;
use crate::error::LoadError;
use crate::sheet::read_grid;
use crate::source::Source;
use crate::status::StatusSink;
use crate::store::TableStore;
use crate::table::Table;

/// Fetch and parse `source` into a table, without touching any store.
pub fn read_table(source: &Source, opts: &SourceOptions) -> Result<Table, LoadError> {
    let location = source.location();
    let bytes = source.fetch(opts)?;
    logd!("Load: fetched {} bytes from {}", bytes.len(), location);
    let grid = read_grid(&bytes, source.format(), &location)?;
    Ok(Table::from_grid(&grid))
}

/// Load `source` and publish it into `store`.
///
/// On success the store's table is replaced wholesale and the record count
/// returned. On failure the store is left exactly as it was.
pub fn load(
    source: &Source,
    opts: &SourceOptions,
    store: &TableStore,
    status: &mut dyn StatusSink,
) -> Result<usize, LoadError> {
    status.begin();
    logf!("Load: begin source={}", source);

    match read_table(source, opts) {
        Ok(table) => {
            let n = store.replace(table);
            logf!("Load: OK rows={} source={}", n, source);
            status.ready(n);
            Ok(n)
        }
        Err(e) => {
            loge!("Load: {} failed: {}", e.kind(), e);
            status.failed(&e);
            Err(e)
        }
    }
}
