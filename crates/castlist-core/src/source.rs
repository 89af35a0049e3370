//! Document adapter interface for the input side.
//!
//! The analysis core never touches a concrete file format. It reads
//! tables through these traits, and format crates (for example the DOCX
//! adapter) implement them against whatever document library they use.
//! The interface is deliberately narrow: tables, rows, cells, text.

/// Extractable text of one table cell.
pub trait CellSource {
    /// Raw cell text, untrimmed. Trimming is the extractor's job.
    fn text(&self) -> &str;
}

/// One table row.
pub trait RowSource {
    /// Cells in row order.
    fn cells(&self) -> Vec<&dyn CellSource>;
}

/// One table.
pub trait TableSource {
    /// Rows in table order.
    fn rows(&self) -> Vec<&dyn RowSource>;
}

/// Read-only view over a structured document's table collection.
///
/// Implementations must be side-effect free: iterating tables never
/// mutates the underlying document.
pub trait DocumentSource {
    /// Tables in document order.
    fn tables(&self) -> Vec<&dyn TableSource>;
}

// ============================================================================
// In-memory document
// ============================================================================

/// Owned in-memory document, the simplest [`DocumentSource`].
///
/// Adapters that eagerly load their backing format parse into one of
/// these; tests build them directly.
#[derive(Debug, Clone, Default)]
pub struct BufferedDocument {
    tables: Vec<BufferedTable>,
}

/// One owned table of raw cell text
#[derive(Debug, Clone, Default)]
pub struct BufferedTable {
    rows: Vec<BufferedRow>,
}

/// One owned row of raw cell text
#[derive(Debug, Clone, Default)]
pub struct BufferedRow {
    cells: Vec<String>,
}

impl BufferedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_table(&mut self, table: BufferedTable) {
        self.tables.push(table);
    }

    /// Build a document from nested cell text, in table/row/cell order.
    pub fn from_rows(tables: Vec<Vec<Vec<String>>>) -> Self {
        Self {
            tables: tables
                .into_iter()
                .map(|rows| BufferedTable {
                    rows: rows.into_iter().map(|cells| BufferedRow { cells }).collect(),
                })
                .collect(),
        }
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}

impl BufferedTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_row(&mut self, row: BufferedRow) {
        self.rows.push(row);
    }
}

impl BufferedRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }
}

impl CellSource for String {
    fn text(&self) -> &str {
        self
    }
}

impl RowSource for BufferedRow {
    fn cells(&self) -> Vec<&dyn CellSource> {
        self.cells.iter().map(|c| c as &dyn CellSource).collect()
    }
}

impl TableSource for BufferedTable {
    fn rows(&self) -> Vec<&dyn RowSource> {
        self.rows.iter().map(|r| r as &dyn RowSource).collect()
    }
}

impl DocumentSource for BufferedDocument {
    fn tables(&self) -> Vec<&dyn TableSource> {
        self.tables.iter().map(|t| t as &dyn TableSource).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn buffered_document_preserves_order_and_shape() {
        let doc = BufferedDocument::from_rows(vec![
            vec![strings(&["a", "b"]), strings(&["c"])],
            vec![strings(&["d"])],
        ]);

        let tables = doc.tables();
        assert_eq!(tables.len(), 2);

        let rows = tables[0].rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells().len(), 2);
        assert_eq!(rows[1].cells().len(), 1);
        assert_eq!(rows[0].cells()[1].text(), "b");
        assert_eq!(tables[1].rows()[0].cells()[0].text(), "d");
    }

    #[test]
    fn cell_text_is_returned_raw() {
        let doc = BufferedDocument::from_rows(vec![vec![strings(&["  padded  "])]]);
        let tables = doc.tables();
        assert_eq!(tables[0].rows()[0].cells()[0].text(), "  padded  ");
    }
}
