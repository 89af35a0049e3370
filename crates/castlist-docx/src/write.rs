//! DOCX report writing.
//!
//! Renders the report builder's elements through the docx-rs builder
//! API. The docx-rs `Docx` type is a consuming builder, so each append
//! takes the document out of the writer and puts the extended one back.

use std::fs::File;
use std::mem;
use std::path::{Path, PathBuf};

use docx_rs::{Docx, Paragraph, Run, Style, StyleType, Table, TableCell, TableRow};

use castlist_core::{Error, ReportDocument, Result};

/// `ReportDocument` implementation backed by docx-rs.
///
/// One writer produces one document; after a successful `save` the
/// writer is spent and a fresh one is needed for the next report.
pub struct DocxReportWriter {
    docx: Docx,
}

impl DocxReportWriter {
    pub fn new() -> Self {
        // Define the heading styles referenced by add_heading so Word
        // renders them as headings rather than plain paragraphs.
        let docx = Docx::new()
            .add_style(heading_style("Heading1", "Heading 1", 32))
            .add_style(heading_style("Heading2", "Heading 2", 26))
            .add_style(heading_style("Heading3", "Heading 3", 24));
        Self { docx }
    }

    fn append(&mut self, extend: impl FnOnce(Docx) -> Docx) {
        let docx = mem::take(&mut self.docx);
        self.docx = extend(docx);
    }
}

impl Default for DocxReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn heading_style(id: &str, name: &str, half_point_size: usize) -> Style {
    Style::new(id, StyleType::Paragraph)
        .name(name)
        .size(half_point_size)
        .bold()
}

fn text_cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
}

impl ReportDocument for DocxReportWriter {
    fn add_heading(&mut self, text: &str, level: u8) {
        let style = format!("Heading{}", level.clamp(1, 3));
        let paragraph = Paragraph::new()
            .add_run(Run::new().add_text(text))
            .style(&style);
        self.append(|d| d.add_paragraph(paragraph));
    }

    fn add_paragraph(&mut self, text: &str) {
        // Word has no literal newline; emit one paragraph per line.
        for line in text.split('\n') {
            let paragraph = Paragraph::new().add_run(Run::new().add_text(line));
            self.append(|d| d.add_paragraph(paragraph));
        }
    }

    fn add_labelled_line(&mut self, lead: &str, rest: &str) {
        let paragraph = Paragraph::new()
            .add_run(Run::new().add_text(lead).bold())
            .add_run(Run::new().add_text(rest));
        self.append(|d| d.add_paragraph(paragraph));
    }

    fn add_table(&mut self, rows: &[Vec<String>]) {
        let rows: Vec<TableRow> = rows
            .iter()
            .map(|cells| TableRow::new(cells.iter().map(|c| text_cell(c)).collect()))
            .collect();
        let table = Table::new(rows).style("TableGrid");
        self.append(|d| d.add_table(table));
    }

    fn save(&mut self, dest: &Path) -> Result<PathBuf> {
        let path_display = dest.display().to_string();
        let write_error = |reason: String| Error::ReportWrite {
            path: path_display.clone(),
            reason,
        };

        let file = File::create(dest).map_err(|e| write_error(e.to_string()))?;
        let docx = mem::take(&mut self.docx);
        docx.build()
            .pack(file)
            .map_err(|e| write_error(e.to_string()))?;

        tracing::debug!(path = %path_display, "packed docx report");

        // Canonicalization needs the file to exist, which it now does;
        // fall back to the caller's path on exotic filesystems.
        Ok(dest.canonicalize().unwrap_or_else(|_| dest.to_path_buf()))
    }
}
