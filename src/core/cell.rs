// src/core/cell.rs
//
// Format-independent cell value. Workbook and delimited readers both
// produce these; the table builder only ever sees strings via `cell_to_string`.

use std::fmt;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Spreadsheet error literal, e.g. `#N/A`.
    Error(String),
}

impl Cell {
    /// Only a truly empty cell is blank; whitespace text still counts as content.
    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        if s.is_empty() { Cell::Empty } else { Cell::Text(s!(s)) }
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        if s.is_empty() { Cell::Empty } else { Cell::Text(s) }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) | Cell::Error(s) => f.write_str(s),
            Cell::Int(n) => write!(f, "{n}"),
            Cell::Float(x) => f.write_str(&float_to_string(*x)),
            Cell::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Total conversion used for IDs and values.
pub fn cell_to_string(cell: Option<&Cell>) -> String {
    match cell {
        None | Some(Cell::Empty) => s!(),
        Some(Cell::Text(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Numbers as a spreadsheet user reads them: `12.0` → `12`, `0.5` → `0.5`.
fn float_to_string(x: f64) -> String {
    if x.is_nan() {
        s!("NaN")
    } else if x.is_infinite() {
        s!(if x > 0.0 { "Infinity" } else { "-Infinity" })
    } else if x == 0.0 {
        // -0.0 would otherwise print as "-0"
        s!("0")
    } else {
        x.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_empty_are_blank_strings() {
        assert_eq!(cell_to_string(None), "");
        assert_eq!(cell_to_string(Some(&Cell::Empty)), "");
    }

    #[test]
    fn integral_floats_drop_fraction() {
        assert_eq!(cell_to_string(Some(&Cell::Float(12345.0))), "12345");
        assert_eq!(cell_to_string(Some(&Cell::Float(-0.0))), "0");
        assert_eq!(cell_to_string(Some(&Cell::Float(2.5))), "2.5");
        assert_eq!(cell_to_string(Some(&Cell::Float(f64::INFINITY))), "Infinity");
        assert_eq!(cell_to_string(Some(&Cell::Float(f64::NAN))), "NaN");
    }

    #[test]
    fn other_variants() {
        assert_eq!(cell_to_string(Some(&Cell::Int(-7))), "-7");
        assert_eq!(cell_to_string(Some(&Cell::Bool(true))), "true");
        assert_eq!(cell_to_string(Some(&Cell::Error(s!("#N/A")))), "#N/A");
        assert_eq!(cell_to_string(Some(&Cell::Text(s!("  Bin 4 ")))), "  Bin 4 ");
    }

    #[test]
    fn blankness() {
        assert!(Cell::from("").is_blank());
        assert!(!Cell::from("   ").is_blank());
        assert!(!Cell::Int(0).is_blank());
    }
}
