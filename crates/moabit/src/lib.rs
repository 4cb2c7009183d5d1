//! Moabit - Page-Level OCR Aggregation and Search for Scanned PDFs
//!
//! Moabit converts PDF documents to page images, runs OCR over each page,
//! aggregates the recognized text with confidence-based quality metrics,
//! and answers keyword searches over the retained per-page text. The OCR
//! engine and the page rasterizer are injected capabilities, so the whole
//! pipeline is testable with doubles.
//!
//! # Quick Start
//!
//! Requires the `pdf` (default) and `tesseract` features:
//!
//! ```rust,ignore
//! use moabit::ocr::{RecognizerOptions, TesseractRecognizer};
//! use moabit::scan::scan_document;
//! use moabit::search::search_and_report;
//! use moabit::ScanConfig;
//! use std::path::Path;
//!
//! # fn main() -> moabit::Result<()> {
//! let config = ScanConfig::default();
//! let recognizer = TesseractRecognizer::new(RecognizerOptions::default())?;
//!
//! // Phase 1: render, recognize, aggregate, report
//! let report = scan_document(Path::new("document.pdf"), &recognizer, &config)?;
//!
//! // Phase 2: search over the retained page texts
//! let outcome = search_and_report(
//!     "concession agreement",
//!     &report.outcome.pages,
//!     "document.pdf",
//!     &config.search_report_path,
//! )?;
//! println!("{} matching pages", outcome.matches.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Renderer** (`pdf`): rasterizes PDF pages via pdfium; fatal on corrupt input
//! - **Recognizer** (`ocr`): the [`ocr::TextRecognizer`] capability plus the
//!   Tesseract backend behind the `tesseract` feature
//! - **Aggregator** (`scan`): sequential per-page loop accumulating page
//!   texts, combined text, and accuracy counters; tolerant of per-page failures
//! - **Reporter** (`scan::report`): phased plain-text report artifact
//! - **Searcher** (`search`): normalized substring search over page texts

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod ocr;
#[cfg(feature = "pdf")]
pub mod pdf;
pub mod scan;
pub mod search;
pub mod text;

pub use config::ScanConfig;
pub use error::{MoabitError, Result};

pub use scan::{AccuracyMetrics, DEFAULT_CONFIDENCE_THRESHOLD, PageText, ScanOutcome, ScanReport, aggregate_pages};
#[cfg(feature = "pdf")]
pub use scan::scan_document;

pub use search::{PageMatch, SearchOutcome, search_and_report, search_pages, write_search_report};

pub use text::normalize;
