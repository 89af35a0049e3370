//! Castlist DOCX adapter
//!
//! Implements the core's document traits against Microsoft Word files
//! using docx-rs:
//! - [`DocxSource`] eagerly loads a document's table collection into an
//!   in-memory `DocumentSource`
//! - [`DocxReportWriter`] renders report elements through the docx-rs
//!   builder API and packs the result to disk

pub mod read;
pub mod write;

pub use read::DocxSource;
pub use write::DocxReportWriter;
