//! Castlist Analysis - the document analysis pipeline
//!
//! Stateless free functions implementing the four stages:
//! - [`extract`]: walk every table and collect column mentions plus
//!   full table snapshots
//! - [`aggregate`]: reduce a mention sequence to count-sorted
//!   frequency statistics
//! - [`build_report`]: render statistics and reconstructed tables into
//!   an output document
//! - [`preview`]: bounded table preview for display purposes
//!
//! Nothing here holds state between calls; callers own the extraction
//! result for the duration of one analysis-and-export cycle and pass it
//! explicitly. The stages only know documents through the adapter traits
//! in `castlist-core`, never a concrete file format.

pub mod aggregate;
pub mod extract;
pub mod preview;
pub mod report;

pub use aggregate::aggregate;
pub use extract::extract;
pub use preview::preview;
pub use report::{build_report, ReportOptions};
