//! End-to-end tests of the OCR pass below the renderer: aggregation over
//! scripted recognizer output plus the report artifact.

mod helpers;

use std::time::Duration;

use helpers::*;
use moabit::ocr::OcrError;
use moabit::scan::{aggregate_pages, report};
use tempfile::tempdir;

#[test]
fn two_page_document_metrics_and_combined_text() {
    let recognizer = ScriptedRecognizer::new(vec![
        Ok(vec![line(&[("Hello World", 0.95), ("foo", 0.5)])]),
        Ok(vec![line(&[("Bar", 0.9)])]),
    ]);

    let outcome = aggregate_pages(&blank_pages(2), &recognizer, 0.8);

    assert_eq!(outcome.page_count(), 2);
    assert_eq!(outcome.metrics.total_words, 4);
    assert_eq!(outcome.metrics.low_confidence_words, 1);
    assert!((outcome.metrics.error_rate() - 25.0).abs() < 1e-9);
    assert_eq!(outcome.combined_text(), "hello world foo bar");
}

#[test]
fn failing_page_is_skipped_without_aborting() {
    let recognizer = ScriptedRecognizer::new(vec![
        Ok(vec![line(&[("intro", 0.95)])]),
        Err(OcrError::ProcessingFailed("engine crashed".to_string())),
        Ok(vec![line(&[("appendix", 0.95)])]),
    ]);

    let outcome = aggregate_pages(&blank_pages(3), &recognizer, 0.8);

    assert_eq!(outcome.page_count(), 3);
    assert!(outcome.pages[1].is_empty());
    assert_eq!(outcome.metrics.total_words, 2);
    assert_eq!(outcome.metrics.low_confidence_words, 0);
    assert_eq!(outcome.combined_text(), "intro appendix");
}

#[test]
fn word_count_invariant_holds_across_pages() {
    let recognizer = ScriptedRecognizer::new(vec![
        Ok(vec![line(&[("one two", 0.9)]), line(&[("three", 0.4)])]),
        Ok(vec![line(&[("four five six", 0.7)])]),
    ]);

    let outcome = aggregate_pages(&blank_pages(2), &recognizer, 0.8);

    let expected_total: usize = outcome
        .pages
        .iter()
        .flat_map(|page| page.tokens.iter())
        .map(|token| token.split_whitespace().count())
        .sum();

    assert_eq!(outcome.metrics.total_words, expected_total as u64);
    assert!(outcome.metrics.low_confidence_words <= outcome.metrics.total_words);
    assert_eq!(outcome.metrics.total_words, 6);
    assert_eq!(outcome.metrics.low_confidence_words, 4);
}

#[test]
fn report_artifact_reflects_aggregation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ocr_results.txt");

    let recognizer = ScriptedRecognizer::new(vec![
        Ok(vec![line(&[("Hello World", 0.95), ("foo", 0.5)])]),
        Ok(vec![line(&[("Bar", 0.9)])]),
    ]);
    let outcome = aggregate_pages(&blank_pages(2), &recognizer, 0.8);

    report::write_header(&path, "document.pdf", 2).unwrap();
    report::append_results(&path, &outcome, 0.8).unwrap();
    report::append_completion(&path, Duration::from_millis(420), 2, false).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("OCR Results for document.pdf\nTotal Pages: 2\n\n"));
    assert!(content.contains("Combined Text (Cleaned, Normalized):\nhello world foo bar\n"));
    assert!(content.contains("Total Word Count: 4\n"));
    assert!(content.contains("Low Confidence Words (below 0.8): 1\n"));
    assert!(content.contains("Estimated Error Rate: 25.00%\n"));
    assert!(content.contains("OCR completed in 0.42 seconds for 2 pages (accelerated: false)\n"));
}

#[test]
fn blank_document_produces_empty_but_valid_report() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ocr_results.txt");

    let recognizer = ScriptedRecognizer::new(vec![Ok(vec![]), Ok(vec![])]);
    let outcome = aggregate_pages(&blank_pages(2), &recognizer, 0.8);

    report::write_header(&path, "blank.pdf", 2).unwrap();
    report::append_results(&path, &outcome, 0.8).unwrap();

    assert_eq!(outcome.metrics.error_rate(), 0.0);
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("Total Word Count: 0\n"));
    assert!(content.contains("Estimated Error Rate: 0.00%\n"));
}
