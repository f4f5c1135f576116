// src/sheet.rs
//
// Bytes → grid of cells. Only the first sheet of a workbook is read.

use std::io::Cursor;

use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};

use crate::core::cell::Cell;
use crate::csv::{Delim, parse_rows};
use crate::error::LoadError;

pub type Grid = Vec<Vec<Cell>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetFormat {
    /// xlsx / xlsm / xlsb / xls / ods, sniffed from the bytes
    Workbook,
    Csv,
    Tsv,
}

impl SheetFormat {
    /// Unknown or missing extensions are treated as workbooks.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => SheetFormat::Csv,
            "tsv" | "tab" => SheetFormat::Tsv,
            _ => SheetFormat::Workbook,
        }
    }
}

/// Parse `bytes` into rows, dropping rows whose cells are all empty.
/// An empty result is a parse error.
pub fn read_grid(bytes: &[u8], format: SheetFormat, location: &str) -> Result<Grid, LoadError> {
    let grid = match format {
        SheetFormat::Workbook => read_workbook(bytes, location)?,
        SheetFormat::Csv => read_delimited(bytes, Delim::Csv),
        SheetFormat::Tsv => read_delimited(bytes, Delim::Tsv),
    };

    let grid: Grid = grid
        .into_iter()
        .filter(|row| !row.iter().all(Cell::is_blank))
        .collect();

    if grid.is_empty() {
        return Err(LoadError::parse(location, "sheet is empty"));
    }
    logd!("Sheet: {} non-blank rows from {} ({:?})", grid.len(), location, format);
    Ok(grid)
}

fn read_delimited(bytes: &[u8], delim: Delim) -> Grid {
    let text = String::from_utf8_lossy(bytes);
    parse_rows(&text, delim.sep())
        .into_iter()
        .map(|row| row.into_iter().map(Cell::from).collect())
        .collect()
}

fn read_workbook(bytes: &[u8], location: &str) -> Result<Grid, LoadError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| LoadError::parse(location, e))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LoadError::parse(location, "workbook has no sheets"))?
        .map_err(|e| LoadError::parse(location, e))?;

    Ok(range_to_grid(&range))
}

/// Column 0 of the grid is always sheet column A, even when the used
/// range starts further right.
fn range_to_grid(range: &Range<Data>) -> Grid {
    let lead = range.start().map(|(_, col)| col as usize).unwrap_or(0);
    range
        .rows()
        .map(|row| {
            let mut out = Vec::with_capacity(lead + row.len());
            out.resize(lead, Cell::Empty);
            out.extend(row.iter().map(data_to_cell));
            out
        })
        .collect()
}

fn data_to_cell(d: &Data) -> Cell {
    match d {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::from(s.as_str()),
        Data::Int(n) => Cell::Int(*n),
        Data::Float(f) => Cell::Float(*f),
        Data::Bool(b) => Cell::Bool(*b),
        // Dates read as their serial number, the same as an unformatted cell.
        Data::DateTime(dt) => Cell::Float(dt.as_f64()),
        Data::Error(e) => Cell::Error(e.to_string()),
        other => Cell::from(other.to_string()),
    }
}
