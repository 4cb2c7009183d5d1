//! Configuration loading and management.
//!
//! [`ScanConfig`] covers the whole pipeline run: rendering, recognition,
//! the confidence threshold, and the two artifact destinations. It can be
//! loaded from TOML or JSON files or created programmatically; every field
//! has a default so partial config files work.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{MoabitError, Result};
use crate::ocr::RecognizerOptions;
#[cfg(feature = "pdf")]
use crate::pdf::RenderOptions;
use crate::scan::DEFAULT_CONFIDENCE_THRESHOLD;

/// Pipeline configuration.
///
/// # Example
///
/// ```rust
/// use moabit::ScanConfig;
///
/// // Create with defaults
/// let config = ScanConfig::default();
/// assert_eq!(config.confidence_threshold, 0.8);
///
/// // Load from a TOML file
/// // let config = ScanConfig::from_toml_file("moabit.toml")?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Page rasterization options (DPI, render worker threads)
    #[cfg(feature = "pdf")]
    #[serde(default)]
    pub render: RenderOptions,

    /// Recognizer options (language, page segmentation)
    #[serde(default)]
    pub ocr: RecognizerOptions,

    /// Words below this confidence count towards the error estimate
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,

    /// Destination of the OCR report artifact
    #[serde(default = "default_report_path")]
    pub report_path: PathBuf,

    /// Destination of the search report artifact
    #[serde(default = "default_search_report_path")]
    pub search_report_path: PathBuf,

    /// Informational flag recorded in the report completion line
    #[serde(default)]
    pub accelerated: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            #[cfg(feature = "pdf")]
            render: RenderOptions::default(),
            ocr: RecognizerOptions::default(),
            confidence_threshold: default_confidence_threshold(),
            report_path: default_report_path(),
            search_report_path: default_search_report_path(),
            accelerated: false,
        }
    }
}

impl ScanConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            MoabitError::validation(format!("Failed to read config file {}: {}", path.as_ref().display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| MoabitError::validation(format!("Invalid TOML in {}: {}", path.as_ref().display(), e)))
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            MoabitError::validation(format!("Failed to read config file {}: {}", path.as_ref().display(), e))
        })?;

        serde_json::from_str(&content)
            .map_err(|e| MoabitError::validation(format!("Invalid JSON in {}: {}", path.as_ref().display(), e)))
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(MoabitError::validation(format!(
                "Confidence threshold must be within [0, 1], got {}",
                self.confidence_threshold
            )));
        }

        #[cfg(feature = "pdf")]
        self.render.validate().map_err(MoabitError::validation)?;

        self.ocr.validate().map_err(MoabitError::validation)?;

        Ok(())
    }
}

fn default_confidence_threshold() -> f64 {
    DEFAULT_CONFIDENCE_THRESHOLD
}

fn default_report_path() -> PathBuf {
    PathBuf::from("ocr_results.txt")
}

fn default_search_report_path() -> PathBuf {
    PathBuf::from("search_results.txt")
}
