use std::collections::BTreeMap;

use crate::Dataset;

/// A single cell: trimmed text, or missing (null / empty in the source file).
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    /// Build a cell from a raw string, mapping empty/whitespace-only to `Missing`.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Self::Missing
        } else {
            Self::Text(raw.to_string())
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// One record of a raw or cleaned table.
///
/// `index` is the 0-based position of the record in the raw file and is the
/// row identity reported in the audit trail. It survives cleaning unchanged,
/// so audit entries stay correlated with the original input.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub index: usize,
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            cells: BTreeMap::new(),
        }
    }

    pub fn set(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.insert(column.into(), value);
    }

    /// The cell for `column`; absent columns read as `Missing`.
    pub fn cell(&self, column: &str) -> &CellValue {
        self.cells.get(column).unwrap_or(&CellValue::Missing)
    }

    pub fn text(&self, column: &str) -> Option<&str> {
        self.cell(column).as_text()
    }

    pub fn is_missing(&self, column: &str) -> bool {
        self.cell(column).is_missing()
    }
}

/// An ordered collection of rows sharing a column schema.
///
/// Row order is insertion-preserving; column order is the order of the
/// source file header and only matters for output rendering.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub dataset: Dataset,
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(dataset: Dataset, columns: Vec<String>) -> Self {
        Self {
            dataset,
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }

    /// Replace the row set, keeping dataset and schema.
    pub fn with_rows(&self, rows: Vec<Row>) -> Self {
        Self {
            dataset: self.dataset,
            columns: self.columns.clone(),
            rows,
        }
    }
}
