//! In-memory table
//!
//! A `Dataset` keeps the header order of the source CSV and stores every
//! row as a vector of typed cells. It is built once and never mutated.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

use super::error::{DataError, DataResult};

/// Fields read as missing, the same default set pandas uses
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Largest magnitude an f64 holds as an exact integer
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// A single typed table cell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Missing,
}

impl Cell {
    /// Type a raw CSV field
    ///
    /// NA markers and infinities are missing. Any other spelling of NaN
    /// (e.g. `Nan`) stays text.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if NA_VALUES.contains(&trimmed) {
            return Cell::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Cell::Number(n),
            Ok(n) if n.is_infinite() => Cell::Missing,
            _ => Cell::Text(trimmed.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    fn to_json(&self) -> Value {
        match self {
            Cell::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INT => {
                Value::from(*n as i64)
            }
            Cell::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Cell::Text(s) => Value::String(s.clone()),
            Cell::Missing => Value::Null,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Text(s) => f.write_str(s),
            Cell::Missing => Ok(()),
        }
    }
}

/// Immutable table with named columns
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Dataset {
    /// Build a dataset, checking every row against the header width
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> DataResult<Self> {
        if columns.is_empty() {
            return Err(DataError::Empty);
        }

        for (idx, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(DataError::RaggedRow {
                    row: idx + 1,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
        }

        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column in the header
    pub fn column_index(&self, name: &str) -> DataResult<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| DataError::UnknownColumn(name.to_string()))
    }

    /// Iterate over a single column
    pub fn column(&self, name: &str) -> DataResult<impl Iterator<Item = &Cell> + '_> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(move |row| &row[idx]))
    }

    /// One row as a JSON object keyed by column name
    pub fn record(&self, row: usize) -> Option<Map<String, Value>> {
        let cells = self.rows.get(row)?;
        Some(
            self.columns
                .iter()
                .zip(cells)
                .map(|(name, cell)| (name.clone(), cell.to_json()))
                .collect(),
        )
    }

    /// Rows `[start, start + len)` as records, truncated at the end of the table
    pub fn records(&self, start: usize, len: usize) -> Vec<Map<String, Value>> {
        (start..start.saturating_add(len).min(self.rows.len()))
            .filter_map(|row| self.record(row))
            .collect()
    }
}
