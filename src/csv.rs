// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(self) -> char {
        match self { Delim::Csv => ',', Delim::Tsv => '\t' }
    }
}

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant).
/// Lines that are completely empty are skipped.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // doubled quote
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without a newline (also flushes unterminated quotes).
    row.push(field);
    if !(row.len() == 1 && row[0].is_empty()) {
        rows.push(row);
    }

    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_fields_and_crlf() {
        let rows = parse_rows("ID,Value\r\n\"A,1\",\"say \"\"hi\"\"\"\r\n\r\nB2,x", ',');
        assert_eq!(rows, vec![
            vec![s!("ID"), s!("Value")],
            vec![s!("A,1"), s!("say \"hi\"")],
            vec![s!("B2"), s!("x")],
        ]);
    }

    #[test]
    fn bom_is_ignored() {
        let rows = parse_rows("\u{FEFF}ID\tValue\n", '\t');
        assert_eq!(rows[0][0], "ID");
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn empty_text_has_no_rows() {
        assert!(parse_rows("", ',').is_empty());
        assert!(parse_rows("\n\r\n", ',').is_empty());
    }

    #[test]
    fn write_quotes_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["A1", "Bin, 4"], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "A1,\"Bin, 4\"\n");
    }
}
