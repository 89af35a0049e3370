//! DOCX reading.
//!
//! Walks the document body for tables and loads their cell text into a
//! `BufferedDocument`. Paragraph runs inside a cell are concatenated;
//! multiple paragraphs in one cell are joined with a newline. Everything
//! else in the document (paragraphs, headers, styles) is opaque and
//! ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use docx_rs::read_docx;

use castlist_core::{
    BufferedDocument, BufferedRow, BufferedTable, DocumentSource, Error, Result, TableSource,
};

/// A Word document opened for table extraction.
///
/// Loading is eager: the file is read and parsed once in [`open`], and
/// the source never touches the file again. Missing, unreadable, and
/// malformed files all surface as [`Error::DocumentRead`] wrapping the
/// underlying cause.
///
/// [`open`]: DocxSource::open
#[derive(Debug)]
pub struct DocxSource {
    path: String,
    doc: BufferedDocument,
}

impl DocxSource {
    /// Open and parse a DOCX file.
    pub fn open(path: &Path) -> Result<Self> {
        let path_display = path.display().to_string();
        let read_error = |reason: String| Error::DocumentRead {
            path: path_display.clone(),
            reason,
        };

        let mut file = File::open(path).map_err(|e| read_error(e.to_string()))?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)
            .map_err(|e| read_error(e.to_string()))?;

        let docx = read_docx(&buf).map_err(|e| read_error(e.to_string()))?;

        let mut doc = BufferedDocument::new();
        for child in docx.document.children {
            if let docx_rs::DocumentChild::Table(tbl) = child {
                let mut table = BufferedTable::new();

                for row in &tbl.rows {
                    let docx_rs::TableChild::TableRow(tr) = row;
                    let mut cells = Vec::new();

                    for cell in &tr.cells {
                        let docx_rs::TableRowChild::TableCell(tc) = cell;
                        cells.push(cell_text(tc));
                    }

                    table.push_row(BufferedRow::new(cells));
                }

                doc.push_table(table);
            }
        }

        tracing::debug!(path = %path_display, tables = doc.table_count(), "loaded document");

        Ok(Self { path: path_display, doc })
    }

    /// Path the document was opened from.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl DocumentSource for DocxSource {
    fn tables(&self) -> Vec<&dyn TableSource> {
        self.doc.tables()
    }
}

/// Concatenate the run text of every paragraph in a cell.
fn cell_text(cell: &docx_rs::TableCell) -> String {
    let mut paragraphs = Vec::new();

    for content in &cell.children {
        if let docx_rs::TableCellContent::Paragraph(para) = content {
            let mut text = String::new();
            for child in &para.children {
                if let docx_rs::ParagraphChild::Run(run) = child {
                    for run_child in &run.children {
                        if let docx_rs::RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            paragraphs.push(text);
        }
    }

    paragraphs.join("\n")
}
