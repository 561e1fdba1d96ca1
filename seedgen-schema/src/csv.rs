//! Minimal CSV reader for seed data
//!
//! Handles commas inside double-quoted fields and `""` escapes, trims every
//! cell and drops blank lines. Malformed quoting is never an error: the
//! offending cell is read as plain text up to the next comma.

use std::collections::HashMap;

/// Parsed CSV: row 0 is the header, the rest are data rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Header row, if any
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(|row| row.as_slice())
    }

    /// All rows after the header
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Total row count, header included
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header-to-cell mapping for the data row at `index` (0-based, header excluded)
    pub fn row_values(&self, index: usize) -> Option<RowValues> {
        let header = self.header()?;
        self.data_rows()
            .get(index)
            .map(|row| RowValues::from_row(header, row))
    }
}

/// Cell values of one data row keyed by trimmed header name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowValues {
    values: HashMap<String, String>,
}

impl RowValues {
    /// Zip a header with a row. Missing cells become empty strings, extra
    /// cells are ignored and duplicate headers keep the last cell.
    pub fn from_row(header: &[String], row: &[String]) -> Self {
        let values = header
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let cell = row.get(i).map(|c| c.trim()).unwrap_or("");
                (name.trim().to_string(), cell.to_string())
            })
            .collect();

        Self { values }
    }

    /// Raw value for a column, empty when the column is absent
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}

/// Parse CSV text into rows of cleaned cells, one row per non-blank line
pub fn parse_csv(text: &str) -> CsvTable {
    let rows = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect();

    CsvTable { rows }
}

/// Split one trimmed line into cells
pub fn parse_line(line: &str) -> Vec<String> {
    let bytes = line.as_bytes();
    let mut cells = Vec::new();
    let mut pos = 0;

    loop {
        let end = cell_end(bytes, pos);
        cells.push(clean_cell(&line[pos..end]));

        if end >= bytes.len() {
            break;
        }
        // bytes[end] is the separating comma
        pos = end + 1;
    }

    cells
}

/// Find where the cell starting at `start` ends (a comma or end of line)
fn cell_end(bytes: &[u8], start: usize) -> usize {
    quoted_end(bytes, start).unwrap_or_else(|| {
        bytes[start..]
            .iter()
            .position(|&b| b == b',')
            .map_or(bytes.len(), |offset| start + offset)
    })
}

/// End of a well-formed quoted cell, or `None` when the cell is not quoted or
/// the quoting is malformed
fn quoted_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = skip_whitespace(bytes, start);
    if bytes.get(i) != Some(&b'"') {
        return None;
    }
    i += 1;

    loop {
        match bytes.get(i)? {
            b'"' if bytes.get(i + 1) == Some(&b'"') => i += 2,
            b'"' => {
                i += 1;
                break;
            }
            _ => i += 1,
        }
    }

    let i = skip_whitespace(bytes, i);
    match bytes.get(i) {
        None | Some(b',') => Some(i),
        Some(_) => None,
    }
}

fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while bytes.get(i).is_some_and(|b| b.is_ascii_whitespace()) {
        i += 1;
    }
    i
}

/// Trim a raw cell and unwrap it when it is quoted
fn clean_cell(raw: &str) -> String {
    let cell = raw.trim();

    if cell.starts_with('"') && cell.ends_with('"') {
        let inner = cell.get(1..cell.len() - 1).unwrap_or("");
        inner.replace("\"\"", "\"")
    } else {
        cell.to_string()
    }
}
