//! Document adapter interface for the output side.
//!
//! Mirrors [`crate::source`]: the report builder emits headings,
//! paragraphs, and grid tables through this trait and a format crate
//! renders them. A recording fake is enough to test the builder.

use std::path::{Path, PathBuf};

use crate::Result;

/// An append-only structured document the report builder writes into.
pub trait ReportDocument {
    /// Heading at the given level (1 = top level).
    fn add_heading(&mut self, text: &str, level: u8);

    /// Plain paragraph. Embedded `\n` separates lines.
    fn add_paragraph(&mut self, text: &str);

    /// Paragraph with an emphasised lead followed by plain text.
    fn add_labelled_line(&mut self, lead: &str, rest: &str);

    /// Grid-styled table. `rows` is rectangular; the builder pads short
    /// rows before calling this.
    fn add_table(&mut self, rows: &[Vec<String>]);

    /// Persist the document to `dest`, overwriting any existing file,
    /// and return the resolved path. Not transactional: an interrupted
    /// write may leave a partial file behind.
    fn save(&mut self, dest: &Path) -> Result<PathBuf>;
}
