//! Castlist Core - shared types, traits, and configuration
//!
//! This crate defines the abstractions used throughout the castlist
//! workspace:
//! - Analysis data model (table snapshots, extraction results, frequency
//!   statistics)
//! - Error taxonomy shared by every stage
//! - Document adapter traits for reading tables and writing reports,
//!   so the analysis core never depends on a concrete file format
//! - Configuration management

pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod source;

pub use config::{AppConfig, ConfigError};
pub use error::{Error, Result};
pub use model::{ExtractionResult, FrequencyStat, TableSnapshot};
pub use report::ReportDocument;
pub use source::{
    BufferedDocument, BufferedRow, BufferedTable, CellSource, DocumentSource, RowSource,
    TableSource,
};
