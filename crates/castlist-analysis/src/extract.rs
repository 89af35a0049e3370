//! Table extraction.
//!
//! Walks a document's table collection, snapshots every row, and
//! collects non-empty values from the target column into an ordered
//! mention sequence.

use castlist_core::{DocumentSource, Error, ExtractionResult, Result, TableSnapshot};

/// Extract character mentions and table snapshots from a document.
///
/// `column` is zero-based. For every table in document order, every row
/// is trimmed cell by cell and captured in that table's snapshot. A row
/// contributes a mention only when it has more than `column` cells and
/// the cell at `column` is non-empty after trimming; shorter (ragged)
/// rows are skipped for mention purposes but still snapshotted.
///
/// Fails with [`Error::NoCharactersFound`] when no table holds a single
/// usable value at the target column. The error reports the 1-based
/// column number.
pub fn extract(doc: &dyn DocumentSource, column: usize) -> Result<ExtractionResult> {
    let mut mentions: Vec<String> = Vec::new();
    let mut tables: Vec<TableSnapshot> = Vec::new();

    for table in doc.tables() {
        let mut rows: Vec<Vec<String>> = Vec::new();

        for row in table.rows() {
            let cells: Vec<String> = row
                .cells()
                .iter()
                .map(|cell| cell.text().trim().to_string())
                .collect();

            if let Some(value) = cells.get(column) {
                if !value.is_empty() {
                    mentions.push(value.clone());
                }
            }

            rows.push(cells);
        }

        tables.push(TableSnapshot::new(rows));
    }

    if mentions.is_empty() {
        return Err(Error::NoCharactersFound { column: column + 1 });
    }

    tracing::debug!(
        tables = tables.len(),
        mentions = mentions.len(),
        column,
        "extraction complete"
    );

    Ok(ExtractionResult::new(mentions, tables))
}

#[cfg(test)]
mod tests {
    use super::*;
    use castlist_core::BufferedDocument;

    fn doc(tables: &[&[&[&str]]]) -> BufferedDocument {
        BufferedDocument::from_rows(
            tables
                .iter()
                .map(|rows| {
                    rows.iter()
                        .map(|cells| cells.iter().map(|c| c.to_string()).collect())
                        .collect()
                })
                .collect(),
        )
    }

    #[test]
    fn collects_mentions_in_document_order() {
        let doc = doc(&[
            &[&["Scene 1", "Alice"], &["Scene 2", "Bob"]],
            &[&["Scene 3", "Alice"]],
        ]);

        let result = extract(&doc, 1).unwrap();
        assert_eq!(result.mentions, vec!["Alice", "Bob", "Alice"]);
        assert_eq!(result.tables.len(), 2);
    }

    #[test]
    fn cells_are_trimmed_in_snapshot_and_mentions() {
        let doc = doc(&[&[&["  Scene 1  ", "  Alice  "]]]);

        let result = extract(&doc, 1).unwrap();
        assert_eq!(result.mentions, vec!["Alice"]);
        assert_eq!(result.tables[0].rows[0], vec!["Scene 1", "Alice"]);
    }

    #[test]
    fn ragged_rows_do_not_raise() {
        // One row of width 1, one of width 3, target column 1: the short
        // row contributes no mention, the long row does.
        let doc = doc(&[&[&["only"], &["a", "Bob", "c"]]]);

        let result = extract(&doc, 1).unwrap();
        assert_eq!(result.mentions, vec!["Bob"]);
        assert_eq!(result.tables[0].rows.len(), 2);
        assert_eq!(result.tables[0].rows[0], vec!["only"]);
    }

    #[test]
    fn empty_cells_at_target_column_are_not_mentions() {
        let doc = doc(&[&[&["x", "   "], &["y", "Carol"]]]);

        let result = extract(&doc, 1).unwrap();
        assert_eq!(result.mentions, vec!["Carol"]);
    }

    #[test]
    fn mention_free_tables_are_still_snapshotted() {
        let doc = doc(&[&[&["no", "names here"]], &[&["x", "Dan"]]]);

        let result = extract(&doc, 1).unwrap();
        assert_eq!(result.tables.len(), 2);
        assert_eq!(result.tables[0].rows[0], vec!["no", "names here"]);
    }

    #[test]
    fn fails_fast_when_column_is_empty_everywhere() {
        let doc = doc(&[&[&["a"], &["b"]], &[&["c", ""]]]);

        let err = extract(&doc, 1).unwrap_err();
        match &err {
            Error::NoCharactersFound { column } => assert_eq!(*column, 2),
            other => panic!("unexpected error: {other}"),
        }
        // The human-facing message carries the 1-based column number.
        assert!(err.to_string().contains("column #2"));
    }

    #[test]
    fn fails_fast_on_document_without_tables() {
        let doc = doc(&[]);
        assert!(matches!(
            extract(&doc, 0),
            Err(Error::NoCharactersFound { column: 1 })
        ));
    }
}
