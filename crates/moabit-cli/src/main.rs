//! Moabit command-line interface.
//!
//! Runs the two-phase pipeline end to end: OCR pass over a scanned PDF
//! (render, recognize, aggregate, report), then a keyword search over the
//! recognized text. The search query comes from `--query` or, when absent,
//! from a single line read on stdin.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use moabit::ScanConfig;
use moabit::ocr::TesseractRecognizer;
use moabit::scan::scan_document;
use moabit::search::search_and_report;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "moabit",
    version,
    about = "OCR a scanned PDF, report accuracy metrics, then search the recognized text"
)]
struct Cli {
    /// Path to the PDF document
    pdf: PathBuf,

    /// Rasterization resolution in DPI
    #[arg(long)]
    dpi: Option<i32>,

    /// Render worker threads
    #[arg(long)]
    render_threads: Option<usize>,

    /// Words below this confidence count as likely errors
    #[arg(long)]
    confidence_threshold: Option<f64>,

    /// OCR language code(s), e.g. "eng" or "eng+deu"
    #[arg(long)]
    language: Option<String>,

    /// OCR report destination
    #[arg(long)]
    report: Option<PathBuf>,

    /// Search report destination
    #[arg(long)]
    search_report: Option<PathBuf>,

    /// Load configuration from a TOML file (flags override its values)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search query; read from stdin when omitted
    #[arg(long)]
    query: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed arguments");

    let config = build_config(&cli)?;

    if !cli.pdf.exists() {
        anyhow::bail!("PDF file not found at {}", cli.pdf.display());
    }

    let recognizer =
        TesseractRecognizer::new(config.ocr.clone()).context("failed to initialize the Tesseract recognizer")?;

    let report = scan_document(&cli.pdf, &recognizer, &config).context("OCR pass failed")?;

    println!("Total Word Count: {}", report.outcome.metrics.total_words);
    println!("Low Confidence Words: {}", report.outcome.metrics.low_confidence_words);
    println!("Estimated Error Rate: {:.2}%", report.outcome.metrics.error_rate());
    println!(
        "OCR completed in {:.2} seconds for {} pages",
        report.elapsed.as_secs_f64(),
        report.page_count
    );
    println!("Results saved to {}", config.report_path.display());

    let query = match cli.query {
        Some(query) => query,
        None => prompt_query()?,
    };

    let outcome = search_and_report(
        &query,
        &report.outcome.pages,
        &cli.pdf.display().to_string(),
        &config.search_report_path,
    )?;

    if outcome.is_empty() {
        println!("No matches found for '{}'.", query);
    } else {
        for page_match in &outcome.matches {
            println!("Page {}:", page_match.page_number);
            for line in &page_match.lines {
                println!("- {}", line);
            }
            println!();
        }
    }
    println!("Search results saved to {}", config.search_report_path.display());

    Ok(())
}

fn build_config(cli: &Cli) -> anyhow::Result<ScanConfig> {
    let mut config = match &cli.config {
        Some(path) => ScanConfig::from_toml_file(path)?,
        None => ScanConfig::default(),
    };

    if let Some(dpi) = cli.dpi {
        config.render.dpi = dpi;
    }
    if let Some(threads) = cli.render_threads {
        config.render.thread_count = threads;
    }
    if let Some(threshold) = cli.confidence_threshold {
        config.confidence_threshold = threshold;
    }
    if let Some(language) = &cli.language {
        config.ocr.language = language.clone();
    }
    if let Some(report) = &cli.report {
        config.report_path = report.clone();
    }
    if let Some(search_report) = &cli.search_report {
        config.search_report_path = search_report.clone();
    }

    config.validate()?;
    Ok(config)
}

fn prompt_query() -> anyhow::Result<String> {
    print!("Enter search term (spaces are okay): ");
    io::stdout().flush()?;

    let mut query = String::new();
    io::stdin().lock().read_line(&mut query)?;
    Ok(query.trim_end_matches(['\n', '\r']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("moabit").chain(args.iter().copied()))
    }

    #[test]
    fn test_build_config_defaults() {
        let cli = parse(&["scan.pdf"]);
        let config = build_config(&cli).unwrap();

        assert_eq!(config.render.dpi, 200);
        assert_eq!(config.confidence_threshold, 0.8);
        assert_eq!(config.report_path, PathBuf::from("ocr_results.txt"));
    }

    #[test]
    fn test_build_config_flag_overrides() {
        let cli = parse(&[
            "scan.pdf",
            "--dpi",
            "300",
            "--render-threads",
            "4",
            "--confidence-threshold",
            "0.6",
            "--language",
            "deu",
            "--report",
            "out/r.txt",
            "--search-report",
            "out/s.txt",
        ]);
        let config = build_config(&cli).unwrap();

        assert_eq!(config.render.dpi, 300);
        assert_eq!(config.render.thread_count, 4);
        assert_eq!(config.confidence_threshold, 0.6);
        assert_eq!(config.ocr.language, "deu");
        assert_eq!(config.report_path, PathBuf::from("out/r.txt"));
        assert_eq!(config.search_report_path, PathBuf::from("out/s.txt"));
    }

    #[test]
    fn test_build_config_rejects_bad_threshold() {
        let cli = parse(&["scan.pdf", "--confidence-threshold", "1.5"]);
        assert!(build_config(&cli).is_err());
    }

    #[test]
    fn test_build_config_rejects_zero_dpi() {
        let cli = parse(&["scan.pdf", "--dpi", "0"]);
        assert!(build_config(&cli).is_err());
    }

    #[test]
    fn test_query_flag_is_optional() {
        let cli = parse(&["scan.pdf", "--query", "concession agreement"]);
        assert_eq!(cli.query.as_deref(), Some("concession agreement"));

        let cli = parse(&["scan.pdf"]);
        assert!(cli.query.is_none());
    }
}
