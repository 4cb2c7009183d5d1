//! Native Tesseract recognizer backend.
//!
//! Wraps `kreuzberg-tesseract` and exposes it through the [`TextRecognizer`]
//! trait. Detections are read from Tesseract's TSV output so that each word
//! carries its own geometry and confidence; confidences are scaled from
//! Tesseract's 0-100 range to the `[0, 1]` range the pipeline expects.

use std::env;
use std::path::Path;

use image::DynamicImage;
use kreuzberg_tesseract::{TessPageSegMode, TesseractAPI};

use super::backend::TextRecognizer;
use super::error::OcrError;
use super::types::{DetectedWord, RecognizerOptions, TextLine, TextRegion};

const TSV_MIN_FIELDS: usize = 12;
const TSV_WORD_LEVEL: u32 = 5;

/// Tesseract-backed implementation of [`TextRecognizer`].
///
/// Holds only configuration; a fresh `TesseractAPI` is created per page
/// because the underlying API keeps mutable recognition state.
pub struct TesseractRecognizer {
    options: RecognizerOptions,
    tessdata_path: String,
}

impl TesseractRecognizer {
    /// Create a recognizer, resolving and validating the tessdata directory
    /// and language files up front so per-page calls cannot segfault on a
    /// missing traineddata file.
    pub fn new(options: RecognizerOptions) -> Result<Self, OcrError> {
        options.validate().map_err(OcrError::InvalidConfiguration)?;

        let tessdata_path = resolve_tessdata_path(&options)?;
        validate_languages(&options.language, &tessdata_path)?;

        Ok(Self {
            options,
            tessdata_path,
        })
    }

    /// The Tesseract library version string.
    pub fn engine_version() -> String {
        TesseractAPI::version()
    }

    fn run_page(&self, image: &DynamicImage) -> Result<String, OcrError> {
        let rgb_image = image.to_rgb8();
        let (width, height) = rgb_image.dimensions();
        let bytes_per_pixel = 3u32;
        let bytes_per_line = width * bytes_per_pixel;

        let api = TesseractAPI::new();

        api.init(&self.tessdata_path, &self.options.language).map_err(|e| {
            OcrError::InitializationFailed(format!(
                "Failed to initialize language '{}': {}",
                self.options.language, e
            ))
        })?;

        let psm_mode = TessPageSegMode::from_int(self.options.psm as i32);
        api.set_page_seg_mode(psm_mode)
            .map_err(|e| OcrError::InvalidConfiguration(format!("Failed to set PSM mode: {}", e)))?;

        api.set_image(
            rgb_image.as_raw(),
            width as i32,
            height as i32,
            bytes_per_pixel as i32,
            bytes_per_line as i32,
        )
        .map_err(|e| OcrError::ProcessingFailed(format!("Failed to set image: {}", e)))?;

        // Explicit recognize() so the TSV fetch below sees recognized text
        api.recognize()
            .map_err(|e| OcrError::ProcessingFailed(format!("Failed to recognize text: {}", e)))?;

        api.get_tsv_text(0)
            .map_err(|e| OcrError::ProcessingFailed(format!("Failed to extract TSV: {}", e)))
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn name(&self) -> &str {
        "tesseract"
    }

    fn recognize(&self, image: &DynamicImage) -> Result<Vec<TextLine>, OcrError> {
        let tsv = self.run_page(image)?;
        Ok(lines_from_tsv(&tsv))
    }
}

fn resolve_tessdata_path(options: &RecognizerOptions) -> Result<String, OcrError> {
    if let Some(path) = &options.tessdata_path {
        if !path.exists() {
            return Err(OcrError::InitializationFailed(format!(
                "Configured tessdata directory does not exist: {}",
                path.display()
            )));
        }
        return Ok(path.display().to_string());
    }

    let fallback_paths = [
        "/opt/homebrew/share/tessdata",
        "/opt/homebrew/opt/tesseract/share/tessdata",
        "/usr/local/opt/tesseract/share/tessdata",
        "/usr/share/tesseract-ocr/5/tessdata",
        "/usr/share/tesseract-ocr/4/tessdata",
        "/usr/share/tessdata",
        "/usr/local/share/tessdata",
        r#"C:\Program Files\Tesseract-OCR\tessdata"#,
        r#"C:\ProgramData\Tesseract-OCR\tessdata"#,
    ];

    Ok(env::var("TESSDATA_PREFIX")
        .ok()
        .or_else(|| {
            fallback_paths
                .iter()
                .find(|p| Path::new(p).exists())
                .map(|p| (*p).to_string())
        })
        .unwrap_or_default())
}

/// Verify every requested traineddata file exists before initializing.
/// The FFI layer can crash on a missing language file instead of returning
/// an error.
fn validate_languages(language: &str, tessdata_path: &str) -> Result<(), OcrError> {
    if tessdata_path.is_empty() {
        return Ok(());
    }

    for lang in language.split('+') {
        let lang = lang.trim();
        if lang.is_empty() {
            continue;
        }
        let traineddata_path = Path::new(tessdata_path).join(format!("{}.traineddata", lang));
        if !traineddata_path.exists() {
            return Err(OcrError::InvalidLanguageCode(format!(
                "Language '{}' not found. Traineddata file does not exist: {}",
                lang,
                traineddata_path.display()
            )));
        }
    }

    Ok(())
}

/// Parse Tesseract TSV output into detection lines.
///
/// Word rows (level 5) are grouped into lines by their
/// (block, paragraph, line) coordinates; everything else is skipped.
/// Malformed rows are ignored rather than failing the page.
fn lines_from_tsv(tsv_data: &str) -> Vec<TextLine> {
    let mut lines: Vec<TextLine> = Vec::new();
    let mut current_key: Option<(u32, u32, u32)> = None;

    for (line_num, row) in tsv_data.lines().enumerate() {
        if line_num == 0 {
            continue;
        }

        let row = row.trim();
        if row.is_empty() {
            continue;
        }

        let fields: Vec<&str> = row.split('\t').collect();
        if fields.len() < TSV_MIN_FIELDS {
            continue;
        }

        let level = fields[0].parse::<u32>().unwrap_or(0);
        if level != TSV_WORD_LEVEL {
            continue;
        }

        let text = fields[11].trim();
        if text.is_empty() {
            continue;
        }

        let conf = fields[10].parse::<f64>().unwrap_or(-1.0);
        let word = DetectedWord {
            text: text.to_string(),
            confidence: (conf.max(0.0) / 100.0).min(1.0),
            region: TextRegion {
                left: fields[6].parse().unwrap_or(0),
                top: fields[7].parse().unwrap_or(0),
                width: fields[8].parse().unwrap_or(0),
                height: fields[9].parse().unwrap_or(0),
            },
        };

        let key = (
            fields[2].parse::<u32>().unwrap_or(0),
            fields[3].parse::<u32>().unwrap_or(0),
            fields[4].parse::<u32>().unwrap_or(0),
        );

        if current_key != Some(key) {
            lines.push(TextLine::default());
            current_key = Some(key);
        }

        // push onto the line opened for this key
        lines
            .last_mut()
            .expect("a line was just pushed for this key")
            .words
            .push(word);
    }

    lines
}
