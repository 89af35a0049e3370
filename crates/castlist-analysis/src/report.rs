//! Report building.
//!
//! Renders frequency statistics plus a faithful reconstruction of every
//! source table into an output document, then persists it.

use std::path::{Path, PathBuf};

use castlist_core::{Error, ExtractionResult, ReportDocument, Result};

use crate::aggregate;

/// Options controlling the report filter and aggregation mode
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Only include characters with at least this many mentions (>= 1)
    pub minimum_mentions: usize,

    /// Merge names that differ only by case
    pub ignore_case: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            minimum_mentions: 1,
            ignore_case: false,
        }
    }
}

impl ReportOptions {
    pub fn new(minimum_mentions: usize, ignore_case: bool) -> Self {
        Self {
            minimum_mentions,
            ignore_case,
        }
    }
}

/// Build the analysis report and persist it to `dest`.
///
/// Aggregates the extraction's mention sequence, filters to statistics
/// with `count >= minimum_mentions`, and emits in fixed order: a title
/// heading, a summary section, the character frequency list, and one
/// reconstructed table per source snapshot. When the filter leaves no
/// statistics the report still carries an explicit notice instead of a
/// blank section.
///
/// Reconstructed tables are sized to their snapshot's maximum row width;
/// short rows get empty trailing cells. Zero-row snapshots are skipped
/// (their table number is still consumed).
///
/// Returns the resolved output path. Overwrites an existing destination
/// without versioning; writes are not transactional.
pub fn build_report(
    extraction: &ExtractionResult,
    options: &ReportOptions,
    doc: &mut dyn ReportDocument,
    dest: &Path,
) -> Result<PathBuf> {
    if options.minimum_mentions == 0 {
        return Err(Error::InvalidArgument(
            "minimum mentions must be at least 1".to_string(),
        ));
    }

    let all_stats = aggregate(&extraction.mentions, options.ignore_case);
    let unique = all_stats.len();
    let stats: Vec<_> = all_stats
        .into_iter()
        .filter(|stat| stat.count >= options.minimum_mentions)
        .collect();

    doc.add_heading("Character Frequency Analysis", 1);

    doc.add_heading("Summary", 2);
    doc.add_paragraph(&format!(
        "Total characters found: {}\nUnique characters: {}\nCharacters with {}+ mentions: {}",
        extraction.mentions.len(),
        unique,
        options.minimum_mentions,
        stats.len(),
    ));
    doc.add_paragraph(&format!(
        "Generated: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    ));

    doc.add_heading("Characters by Frequency", 2);
    if stats.is_empty() {
        doc.add_paragraph("No characters meet the minimum frequency criteria.");
    } else {
        for stat in &stats {
            doc.add_labelled_line(&stat.name, &format!(" — {} mentions", stat.count));
        }
    }

    if !extraction.tables.is_empty() {
        doc.add_heading("Original Tables", 2);
        for (number, snapshot) in extraction.tables.iter().enumerate() {
            let width = snapshot.max_width();
            if snapshot.is_empty() || width == 0 {
                continue;
            }

            doc.add_heading(&format!("Table {}", number + 1), 3);

            let rows: Vec<Vec<String>> = snapshot
                .rows
                .iter()
                .map(|row| {
                    let mut padded = row.clone();
                    padded.resize(width, String::new());
                    padded
                })
                .collect();
            doc.add_table(&rows);
        }
    }

    let written = doc.save(dest)?;
    tracing::info!(path = %written.display(), characters = stats.len(), "report written");
    Ok(written)
}
