//! castlist CLI - character frequency analysis for DOCX tables
//!
//! Usage:
//!   castlist analyze screenplay.docx --column 2 --min-mentions 2
//!   castlist analyze a.docx b.docx --ignore-case
//!   castlist preview screenplay.docx --rows 5
//!
//! The pipeline itself lives in castlist-analysis; this binary is a thin
//! presentation layer that wires extract -> aggregate -> build_report,
//! including the batch loop over multiple input files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use castlist_analysis::{aggregate, build_report, extract, preview, ReportOptions};
use castlist_core::AppConfig;
use castlist_docx::{DocxReportWriter, DocxSource};

#[derive(Parser)]
#[command(name = "castlist")]
#[command(about = "Character frequency analysis for table-structured DOCX files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze documents and write frequency reports
    Analyze {
        /// DOCX files to analyze
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// 1-based column holding character names
        #[arg(long)]
        column: Option<usize>,

        /// Only report characters with at least this many mentions
        #[arg(long)]
        min_mentions: Option<usize>,

        /// Merge names that differ only by case
        #[arg(long)]
        ignore_case: bool,

        /// Report destination (single input only; defaults to
        /// <stem>_report.docx beside the input)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print statistics as JSON instead of a text listing
        #[arg(long)]
        json: bool,
    },
    /// Show the first rows of every table in a document
    Preview {
        /// DOCX file to preview
        file: PathBuf,

        /// Maximum rows shown per table
        #[arg(long)]
        rows: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    tracing::debug!(?config, "configuration loaded");

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            files,
            column,
            min_mentions,
            ignore_case,
            output,
            json,
        } => {
            let column = column.unwrap_or(config.column);
            if column == 0 {
                anyhow::bail!("--column is 1-based and must be at least 1");
            }
            if output.is_some() && files.len() > 1 {
                anyhow::bail!("--output requires a single input file");
            }

            let options = ReportOptions::new(
                min_mentions.unwrap_or(config.min_mentions),
                ignore_case || config.ignore_case,
            );

            for file in &files {
                let dest = output.clone().unwrap_or_else(|| default_output(file));
                analyze_file(file, column - 1, &options, &dest, json)
                    .with_context(|| format!("analyzing {}", file.display()))?;
            }
        }
        Commands::Preview { file, rows } => {
            let source = DocxSource::open(&file)
                .with_context(|| format!("previewing {}", file.display()))?;
            let tables = preview(&source, rows.unwrap_or(config.preview_rows));

            if tables.is_empty() {
                println!("No tables found.");
            }
            for (number, table) in tables.iter().enumerate() {
                println!("Table {}:", number + 1);
                for row in table {
                    println!("  {}", row.join(" | "));
                }
            }
        }
    }

    Ok(())
}

/// Run the full pipeline for one input file.
fn analyze_file(
    file: &Path,
    column_index: usize,
    options: &ReportOptions,
    dest: &Path,
    json: bool,
) -> anyhow::Result<()> {
    let source = DocxSource::open(file)?;
    let extraction = extract(&source, column_index)?;

    let stats: Vec<_> = aggregate(&extraction.mentions, options.ignore_case)
        .into_iter()
        .filter(|stat| stat.count >= options.minimum_mentions)
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else if stats.is_empty() {
        println!("No characters meet the minimum frequency criteria.");
    } else {
        for stat in &stats {
            println!("{:>6}  {}", stat.count, stat.name);
        }
    }

    let mut writer = DocxReportWriter::new();
    let written = build_report(&extraction, options, &mut writer, dest)?;
    println!("Report written to {}", written.display());

    Ok(())
}

/// `input.docx` -> `input_report.docx`, beside the input.
fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("analysis");
    input.with_file_name(format!("{stem}_report.docx"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_is_beside_the_input() {
        assert_eq!(
            default_output(Path::new("/tmp/play.docx")),
            PathBuf::from("/tmp/play_report.docx")
        );
        assert_eq!(
            default_output(Path::new("play.docx")),
            PathBuf::from("play_report.docx")
        );
    }
}
