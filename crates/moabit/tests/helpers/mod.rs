//! Shared test helpers: scripted recognizer doubles and page fixtures.
#![allow(dead_code)]

use std::sync::Mutex;

use image::DynamicImage;
use moabit::ocr::types::{DetectedWord, TextRegion};
use moabit::ocr::{OcrError, TextLine, TextRecognizer};

/// Recognizer double that replays one scripted result per page, in order.
pub struct ScriptedRecognizer {
    pages: Vec<Result<Vec<TextLine>, OcrError>>,
    cursor: Mutex<usize>,
}

impl ScriptedRecognizer {
    pub fn new(pages: Vec<Result<Vec<TextLine>, OcrError>>) -> Self {
        Self {
            pages,
            cursor: Mutex::new(0),
        }
    }
}

impl TextRecognizer for ScriptedRecognizer {
    fn name(&self) -> &str {
        "scripted"
    }

    fn recognize(&self, _image: &DynamicImage) -> Result<Vec<TextLine>, OcrError> {
        let mut cursor = self.cursor.lock().unwrap();
        let index = *cursor;
        *cursor += 1;
        self.pages[index].clone()
    }
}

/// Build a detection line from `(text, confidence)` pairs.
pub fn line(words: &[(&str, f64)]) -> TextLine {
    TextLine {
        words: words
            .iter()
            .map(|(text, confidence)| DetectedWord {
                text: (*text).to_string(),
                confidence: *confidence,
                region: TextRegion::default(),
            })
            .collect(),
    }
}

/// Tiny blank page images standing in for rendered pages.
pub fn blank_pages(n: usize) -> Vec<DynamicImage> {
    (0..n).map(|_| DynamicImage::new_rgb8(16, 16)).collect()
}
