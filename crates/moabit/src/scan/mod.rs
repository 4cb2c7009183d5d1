//! Scan orchestration: render, aggregate, report.
//!
//! [`scan_document`] is the OCR pass of the two-phase pipeline. It renders
//! every page of a PDF, runs the injected recognizer over each page image,
//! and persists the report artifact. The returned [`ScanReport`] carries the
//! retained per-page text the independent search phase works on; the two
//! phases share nothing else.
//!
//! # Example
//!
//! With the `tesseract` feature enabled:
//!
//! ```rust,ignore
//! use moabit::ocr::{RecognizerOptions, TesseractRecognizer};
//! use moabit::scan::scan_document;
//! use moabit::ScanConfig;
//! use std::path::Path;
//!
//! # fn example() -> moabit::Result<()> {
//! let config = ScanConfig::default();
//! let recognizer = TesseractRecognizer::new(RecognizerOptions::default())?;
//!
//! let report = scan_document(Path::new("document.pdf"), &recognizer, &config)?;
//! println!(
//!     "{} pages, {} words, {:.2}% estimated error rate",
//!     report.page_count,
//!     report.outcome.metrics.total_words,
//!     report.outcome.metrics.error_rate()
//! );
//! # Ok(())
//! # }
//! ```
pub mod aggregator;
pub mod report;

pub use aggregator::{AccuracyMetrics, DEFAULT_CONFIDENCE_THRESHOLD, PageText, ScanOutcome, aggregate_pages};

use std::time::Duration;
#[cfg(feature = "pdf")]
use std::{path::Path, time::Instant};

#[cfg(feature = "pdf")]
use crate::config::ScanConfig;
#[cfg(feature = "pdf")]
use crate::error::{MoabitError, Result};
#[cfg(feature = "pdf")]
use crate::ocr::TextRecognizer;
#[cfg(feature = "pdf")]
use crate::pdf::PdfRenderer;

/// Result of one completed OCR pass.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub outcome: ScanOutcome,
    pub page_count: usize,
    pub elapsed: Duration,
}

/// Run the full OCR pass over a PDF document.
///
/// Steps, in order: validate configuration and input path, render all pages
/// (fatal on failure), write the report header, aggregate per-page OCR,
/// append results and the completion line.
///
/// # Errors
///
/// - `Validation` - invalid config, or the input file does not exist
/// - `Render` - unreadable or corrupt PDF; nothing has been written yet
/// - `Io` - report artifact could not be written
#[cfg(feature = "pdf")]
pub fn scan_document(pdf_path: &Path, recognizer: &dyn TextRecognizer, config: &ScanConfig) -> Result<ScanReport> {
    config.validate()?;

    if !pdf_path.exists() {
        return Err(MoabitError::validation(format!(
            "PDF file not found at {}",
            pdf_path.display()
        )));
    }

    let pdf_bytes = std::fs::read(pdf_path)?;
    let document = pdf_path.display().to_string();

    let started = Instant::now();

    tracing::info!(path = %document, dpi = config.render.dpi, "converting PDF to page images");
    let renderer = PdfRenderer::new()?;
    let pages = renderer.render_document(&pdf_bytes, &config.render)?;
    tracing::info!(pages = pages.len(), "converted PDF");

    report::write_header(&config.report_path, &document, pages.len())?;

    let outcome = aggregate_pages(&pages, recognizer, config.confidence_threshold);

    report::append_results(&config.report_path, &outcome, config.confidence_threshold)?;

    let elapsed = started.elapsed();
    report::append_completion(&config.report_path, elapsed, pages.len(), config.accelerated)?;

    tracing::info!(
        pages = pages.len(),
        total_words = outcome.metrics.total_words,
        low_confidence_words = outcome.metrics.low_confidence_words,
        error_rate = format!("{:.2}%", outcome.metrics.error_rate()),
        elapsed_secs = format!("{:.2}", elapsed.as_secs_f64()),
        report = %config.report_path.display(),
        "scan complete"
    );

    Ok(ScanReport {
        page_count: pages.len(),
        outcome,
        elapsed,
    })
}
