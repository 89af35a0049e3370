//! Bounded table previews for display purposes.

use castlist_core::DocumentSource;

/// Return the first `max_rows_per_table` rows of every table, cells
/// trimmed, in document order.
///
/// Read-only and independent of column selection; meant for UI display,
/// never for aggregation.
pub fn preview(doc: &dyn DocumentSource, max_rows_per_table: usize) -> Vec<Vec<Vec<String>>> {
    doc.tables()
        .iter()
        .map(|table| {
            table
                .rows()
                .iter()
                .take(max_rows_per_table)
                .map(|row| {
                    row.cells()
                        .iter()
                        .map(|cell| cell.text().trim().to_string())
                        .collect()
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use castlist_core::BufferedDocument;

    fn doc(tables: Vec<Vec<Vec<&str>>>) -> BufferedDocument {
        BufferedDocument::from_rows(
            tables
                .into_iter()
                .map(|rows| {
                    rows.into_iter()
                        .map(|cells| cells.into_iter().map(str::to_string).collect())
                        .collect()
                })
                .collect(),
        )
    }

    #[test]
    fn truncates_each_table_to_the_row_cap() {
        let doc = doc(vec![
            vec![vec!["r1"], vec!["r2"], vec!["r3"]],
            vec![vec!["only"]],
        ]);

        let previews = preview(&doc, 2);
        assert_eq!(previews.len(), 2);
        assert_eq!(previews[0].len(), 2);
        assert_eq!(previews[1].len(), 1);
    }

    #[test]
    fn zero_cap_yields_empty_previews_per_table() {
        let doc = doc(vec![vec![vec!["a"]], vec![vec!["b"]]]);
        let previews = preview(&doc, 0);
        assert_eq!(previews, vec![Vec::<Vec<String>>::new(), Vec::new()]);
    }

    #[test]
    fn preview_cells_are_trimmed() {
        let doc = doc(vec![vec![vec!["  a  ", " b"]]]);
        let previews = preview(&doc, 5);
        assert_eq!(previews[0][0], vec!["a", "b"]);
    }
}
