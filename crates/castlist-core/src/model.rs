//! Analysis data model.
//!
//! These types flow between the pipeline stages: extraction produces an
//! [`ExtractionResult`], aggregation reduces its mention sequence to
//! [`FrequencyStat`]s, and report building consumes both.

use serde::{Deserialize, Serialize};

/// Full row/cell text capture of one source table, used to losslessly
/// reconstruct it in the output document.
///
/// Rows are stored in table order with trimmed cell text. Row lengths may
/// differ within the same table; ragged tables are a normal input, not an
/// error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub rows: Vec<Vec<String>>,
}

impl TableSnapshot {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Width of the widest row. Zero for a table with no rows.
    pub fn max_width(&self) -> usize {
        self.rows.iter().map(|row| row.len()).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Everything captured by one extraction pass over a document.
///
/// Mentions are flattened in document traversal order (table order, then
/// row order). There is one snapshot per table, including tables that
/// contributed no mention. The extractor guarantees `mentions` is
/// non-empty; an extraction that finds nothing fails instead of returning
/// an empty result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub mentions: Vec<String>,
    pub tables: Vec<TableSnapshot>,
}

impl ExtractionResult {
    pub fn new(mentions: Vec<String>, tables: Vec<TableSnapshot>) -> Self {
        Self { mentions, tables }
    }
}

/// Number of times a single character was mentioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyStat {
    /// Display name. Under case-insensitive aggregation this is the
    /// first-encountered casing for the merged key.
    pub name: String,
    pub count: usize,
}

impl FrequencyStat {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}
