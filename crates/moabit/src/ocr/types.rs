use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Axis-aligned bounding box of a detection, in image pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRegion {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl TextRegion {
    pub fn right(&self) -> u32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }
}

/// One recognized word: raw text plus the recognizer's certainty.
///
/// Confidence is in `[0, 1]`; backends reporting percentages scale before
/// constructing this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedWord {
    pub text: String,
    pub confidence: f64,
    pub region: TextRegion,
}

/// One detection line as returned by a recognizer: an ordered run of words.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    pub words: Vec<DetectedWord>,
}

impl TextLine {
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Configuration for text recognizers.
///
/// All fields have sensible defaults; `tessdata_path` is only consulted by
/// the Tesseract backend and overrides its own discovery when set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizerOptions {
    /// ISO 639-2/3 language code(s), `+`-separated for multi-language runs
    #[serde(default = "default_language")]
    pub language: String,

    /// Tesseract page segmentation mode
    #[serde(default = "default_psm")]
    pub psm: u8,

    /// Explicit tessdata directory (None = environment/platform discovery)
    #[serde(default)]
    pub tessdata_path: Option<PathBuf>,
}

impl Default for RecognizerOptions {
    fn default() -> Self {
        Self {
            language: default_language(),
            psm: default_psm(),
            tessdata_path: None,
        }
    }
}

impl RecognizerOptions {
    pub fn validate(&self) -> Result<(), String> {
        if self.language.trim().is_empty() {
            return Err("Language cannot be empty. Specify a valid language code (e.g., 'eng')".to_string());
        }
        if self.psm > 10 {
            return Err(format!("Invalid PSM mode value: {}", self.psm));
        }
        Ok(())
    }
}

fn default_language() -> String {
    "eng".to_string()
}

fn default_psm() -> u8 {
    3
}
