//! Per-page OCR aggregation.
//!
//! Walks the ordered page-image sequence, invokes the recognizer on each
//! page, normalizes every detected word, and accumulates the corpus-level
//! state: per-page token lists (kept for the search phase), the running
//! combined text, and the confidence-based word counters. All state lives in
//! an explicit [`ScanOutcome`] accumulator returned to the caller; nothing
//! is global.
//!
//! A recognizer failure on one page is logged and the page contributes zero
//! tokens; processing continues with the next page.

use image::{DynamicImage, GenericImageView};
use serde::{Deserialize, Serialize};

use crate::ocr::{TextLine, TextRecognizer};
use crate::text::normalize;

/// Words whose confidence falls below this are counted as likely errors.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.8;

/// Confidence-based quality counters for a whole scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccuracyMetrics {
    pub total_words: u64,
    pub low_confidence_words: u64,
}

impl AccuracyMetrics {
    /// Estimated error rate as a percentage in `[0, 100]`.
    ///
    /// Zero when nothing was recognized.
    pub fn error_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.low_confidence_words as f64 / self.total_words as f64 * 100.0
        }
    }
}

/// Ordered normalized tokens recognized on one page.
///
/// Never mutated once its page has been processed; the search phase reads
/// these for the lifetime of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    pub tokens: Vec<String>,
}

impl PageText {
    /// All tokens of the page joined with single spaces.
    pub fn joined(&self) -> String {
        self.tokens.join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Everything the OCR pass produces: retained page texts, the combined
/// token stream, and the accuracy counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanOutcome {
    pub pages: Vec<PageText>,
    pub combined: Vec<String>,
    pub metrics: AccuracyMetrics,
}

impl ScanOutcome {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Space-joined combined text across all pages, in page order.
    pub fn combined_text(&self) -> String {
        self.combined.join(" ")
    }
}

/// Run OCR over every page image and aggregate the results.
///
/// Pages are processed strictly in order on the calling thread. Per-page
/// recognizer failures are logged at `warn` and the page is treated as
/// having no detections; the loop never aborts. Words whose confidence is
/// strictly below `confidence_threshold` feed the low-confidence counter.
///
/// Invariants on the return value: one [`PageText`] per input image;
/// `metrics.total_words` equals the word count summed over every token ever
/// appended; `metrics.low_confidence_words <= metrics.total_words`.
pub fn aggregate_pages(
    pages: &[DynamicImage],
    recognizer: &dyn TextRecognizer,
    confidence_threshold: f64,
) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();

    for (page_index, image) in pages.iter().enumerate() {
        let page_number = page_index + 1;
        tracing::info!(
            page = page_number,
            width = image.width(),
            height = image.height(),
            "scanning page"
        );

        let lines = match recognizer.recognize(image) {
            Ok(lines) => lines,
            Err(e) => {
                tracing::warn!(
                    page = page_number,
                    backend = recognizer.name(),
                    error = %e,
                    "recognizer failed, treating page as empty"
                );
                Vec::new()
            }
        };

        let detections: usize = lines.iter().map(TextLine::word_count).sum();
        if detections == 0 {
            tracing::info!(page = page_number, "no OCR results (possibly blank or image-only)");
        } else {
            tracing::debug!(page = page_number, detections, "detected text items");
        }

        let mut page_text = PageText::default();
        for line in &lines {
            for word in &line.words {
                let token = normalize(&word.text);
                if token.is_empty() {
                    continue;
                }

                let words_in_token = token.split(' ').count() as u64;
                outcome.metrics.total_words += words_in_token;
                if word.confidence < confidence_threshold {
                    outcome.metrics.low_confidence_words += words_in_token;
                }

                outcome.combined.push(token.clone());
                page_text.tokens.push(token);
            }
        }

        outcome.pages.push(page_text);
    }

    outcome
}
