//! OCR report artifact.
//!
//! Writes the human-readable scan summary as plain UTF-8 text. The artifact
//! is built in phases mirroring the pipeline: the header truncates any prior
//! file before page processing starts, results and the completion line are
//! appended afterwards. A run that dies mid-scan therefore leaves exactly
//! the sections that were already flushed.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use crate::error::Result;

use super::aggregator::ScanOutcome;

/// Create the report file (truncating) and write the header block.
pub fn write_header(path: &Path, document: &str, page_count: usize) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "OCR Results for {}", document)?;
    writeln!(writer, "Total Pages: {}", page_count)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

/// Append the combined text and accuracy metric sections.
pub fn append_results(path: &Path, outcome: &ScanOutcome, confidence_threshold: f64) -> Result<()> {
    let file = OpenOptions::new().append(true).create(true).open(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "Combined Text (Cleaned, Normalized):")?;
    writeln!(writer, "{}", outcome.combined_text())?;
    writeln!(writer)?;
    writeln!(writer, "Accuracy Metrics:")?;
    writeln!(writer, "Total Word Count: {}", outcome.metrics.total_words)?;
    writeln!(
        writer,
        "Low Confidence Words (below {}): {}",
        confidence_threshold, outcome.metrics.low_confidence_words
    )?;
    writeln!(writer, "Estimated Error Rate: {:.2}%", outcome.metrics.error_rate())?;
    writer.flush()?;

    Ok(())
}

/// Append the completion line with elapsed wall-clock time.
pub fn append_completion(path: &Path, elapsed: Duration, page_count: usize, accelerated: bool) -> Result<()> {
    let file = OpenOptions::new().append(true).create(true).open(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(
        writer,
        "OCR completed in {:.2} seconds for {} pages (accelerated: {})",
        elapsed.as_secs_f64(),
        page_count,
        accelerated
    )?;
    writer.flush()?;

    Ok(())
}
