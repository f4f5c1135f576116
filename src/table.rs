// src/table.rs
use crate::config::consts::HEADER_MARKER;
use crate::core::cell::{Cell, cell_to_string};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// Trimmed + uppercased first column
    pub id: String,
    /// Trimmed second column
    pub value: String,
}

impl Record {
    pub fn new(id: &str, value: &str) -> Self {
        Self { id: id.trim().to_uppercase(), value: s!(value.trim()) }
    }

    fn from_row(row: &[Cell]) -> Self {
        Self::new(&cell_to_string(row.first()), &cell_to_string(row.get(1)))
    }
}

/// Records in source order. Duplicate and blank IDs are kept as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Build from `(id, value)` pairs, normalizing like a loaded sheet.
    pub fn from_pairs<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        Self::new(pairs.into_iter().map(|(a, b)| Record::new(a.as_ref(), b.as_ref())).collect())
    }

    /// Build from a parsed grid, skipping the first row when it is a header.
    pub fn from_grid(grid: &[Vec<Cell>]) -> Self {
        let skip = usize::from(grid.first().is_some_and(|row| is_header_row(row)));
        if skip == 1 {
            logd!("Table: header row detected, skipping");
        }
        Self::new(grid.iter().skip(skip).map(|row| Record::from_row(row)).collect())
    }

    /// First record whose ID equals `key` exactly. `key` must already be uppercased.
    pub fn find(&self, key: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == key)
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn records(&self) -> &[Record] { &self.records }
    pub fn iter(&self) -> std::slice::Iter<'_, Record> { self.records.iter() }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;
    fn into_iter(self) -> Self::IntoIter { self.records.iter() }
}

/// The header heuristic: first cell reads `ID` once trimmed and uppercased.
pub fn is_header_row(row: &[Cell]) -> bool {
    cell_to_string(row.first()).trim().to_uppercase() == HEADER_MARKER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_skipped() {
        let t = Table::from_grid(&[row!["ID", "VALUE"], row!["ABC123", "Bin 4"]]);
        assert_eq!(t.records(), &[Record { id: s!("ABC123"), value: s!("Bin 4") }]);
    }

    #[test]
    fn lowercase_padded_header_skipped() {
        let t = Table::from_grid(&[row!["  id ", "whatever"], row!["a", "b"]]);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn no_header_keeps_first_row() {
        let t = Table::from_grid(&[row!["ABC123", "Bin 4"], row!["IDX", "y"]]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.records()[0].id, "ABC123");
    }

    #[test]
    fn normalizes_cells() {
        let t = Table::from_grid(&[
            vec![Cell::from(" ab12 "), Cell::from("  Shelf 2  ")],
            vec![Cell::Float(1001.0), Cell::Int(7)],
            vec![Cell::from("solo")],
            vec![Cell::Empty, Cell::from("orphan")],
        ]);
        let got: Vec<(&str, &str)> = t.iter().map(|r| (r.id.as_str(), r.value.as_str())).collect();
        assert_eq!(got, vec![("AB12", "Shelf 2"), ("1001", "7"), ("SOLO", ""), ("", "orphan")]);
    }

    #[test]
    fn first_duplicate_wins() {
        let t = Table::from_pairs([("A1", "first"), ("A1", "second")]);
        assert_eq!(t.find("A1").map(|r| r.value.as_str()), Some("first"));
    }
}
