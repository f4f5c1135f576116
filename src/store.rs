// src/store.rs
//
// The one place the loaded table lives. The loader is the only writer;
// lookups take a snapshot and never see a half-built table.

use std::sync::{Arc, PoisonError, RwLock};

use crate::table::Table;

#[derive(Debug, Default)]
pub struct TableStore {
    current: RwLock<Arc<Table>>,
}

impl TableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cheap read: clones the `Arc`, not the records.
    pub fn snapshot(&self) -> Arc<Table> {
        self.current.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Swap in a fully built table. Returns its record count.
    pub fn replace(&self, table: Table) -> usize {
        let n = table.len();
        let next = Arc::new(table);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = next;
        n
    }

    pub fn is_ready(&self) -> bool {
        !self.snapshot().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_is_wholesale() {
        let store = TableStore::new();
        assert!(!store.is_ready());

        store.replace(Table::from_pairs([("A", "1"), ("B", "2")]));
        let before = store.snapshot();

        assert_eq!(store.replace(Table::from_pairs([("C", "3")])), 1);
        assert_eq!(before.len(), 2, "old snapshot unaffected");
        assert!(store.snapshot().find("A").is_none());
        assert!(store.snapshot().find("C").is_some());
    }
}
