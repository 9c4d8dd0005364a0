//! In-memory representation of a parsed table.

use serde::{Deserialize, Serialize};

/// Parsed tabular data.
///
/// Every row holds exactly `headers.len()` cells. Cells that were missing
/// from a short source row are stored as `None`, so downstream stages never
/// index past the end of a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedTable {
    /// Column headers.
    pub headers: Vec<String>,
    /// Row data (row-major order).
    pub rows: Vec<Vec<Option<String>>>,
    /// The delimiter used.
    pub delimiter: char,
}

impl ParsedTable {
    /// Create a new table.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>, delimiter: char) -> Self {
        Self {
            headers,
            rows,
            delimiter,
        }
    }

    /// Create a table with no headers and no rows.
    pub fn empty(delimiter: char) -> Self {
        Self::new(Vec::new(), Vec::new(), delimiter)
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when there is nothing to analyze.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() || self.rows.is_empty()
    }

    /// Get all cells for a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = Option<&str>> {
        self.rows
            .iter()
            .map(move |row| row.get(index).and_then(|cell| cell.as_deref()))
    }

    /// Get the non-missing values of a column, in row order.
    pub fn non_missing_values(&self, index: usize) -> Vec<&str> {
        self.column_values(index)
            .filter(|cell| !Self::is_missing(*cell))
            .flatten()
            .collect()
    }

    /// Get a column by name.
    pub fn column_by_name(&self, name: &str) -> Option<Vec<Option<&str>>> {
        let index = self.headers.iter().position(|h| h == name)?;
        Some(self.column_values(index).collect())
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .and_then(|cell| cell.as_deref())
    }

    /// Check if a cell counts as missing: absent, empty, or whitespace-only.
    pub fn is_missing(cell: Option<&str>) -> bool {
        cell.is_none_or(|value| value.trim().is_empty())
    }
}
