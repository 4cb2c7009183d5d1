//! Recognizer trait.
//!
//! This module defines the capability boundary between the aggregation
//! pipeline and whatever OCR engine produces detections. Backends can be
//! native bindings (like the Tesseract backend behind the `tesseract`
//! feature), FFI bridges, or test doubles.

use crate::ocr::error::OcrError;
use crate::ocr::types::TextLine;
use image::DynamicImage;

/// Capability that turns one page image into detection lines.
///
/// The pipeline is single-threaded and synchronous; recognizers are still
/// required to be `Send + Sync` so a single instance can be shared with a
/// renderer worker pool or embedded in larger hosts.
///
/// # Example
///
/// ```rust
/// use image::DynamicImage;
/// use moabit::ocr::{OcrError, TextRecognizer};
/// use moabit::ocr::types::{DetectedWord, TextLine, TextRegion};
///
/// struct FixedRecognizer;
///
/// impl TextRecognizer for FixedRecognizer {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn recognize(&self, _image: &DynamicImage) -> Result<Vec<TextLine>, OcrError> {
///         Ok(vec![TextLine {
///             words: vec![DetectedWord {
///                 text: "Hello".to_string(),
///                 confidence: 0.99,
///                 region: TextRegion::default(),
///             }],
///         }])
///     }
/// }
/// ```
pub trait TextRecognizer: Send + Sync {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &str;

    /// Recognize text on a single page image.
    ///
    /// Returns the detection lines in reading order. An empty vector is a
    /// valid result (blank or image-only page), not an error.
    ///
    /// # Errors
    ///
    /// Backend-specific failures surface as [`OcrError`]. The aggregation
    /// loop treats them as recoverable per-page failures.
    fn recognize(&self, image: &DynamicImage) -> Result<Vec<TextLine>, OcrError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocr::types::{DetectedWord, TextRegion};

    struct MockRecognizer {
        lines: Vec<TextLine>,
    }

    impl TextRecognizer for MockRecognizer {
        fn name(&self) -> &str {
            "mock"
        }

        fn recognize(&self, _image: &DynamicImage) -> Result<Vec<TextLine>, OcrError> {
            Ok(self.lines.clone())
        }
    }

    struct FailingRecognizer;

    impl TextRecognizer for FailingRecognizer {
        fn name(&self) -> &str {
            "failing"
        }

        fn recognize(&self, _image: &DynamicImage) -> Result<Vec<TextLine>, OcrError> {
            Err(OcrError::ProcessingFailed("engine crashed".to_string()))
        }
    }

    fn blank_page() -> DynamicImage {
        DynamicImage::new_rgb8(4, 4)
    }

    #[test]
    fn test_mock_recognizer_returns_lines() {
        let recognizer = MockRecognizer {
            lines: vec![TextLine {
                words: vec![DetectedWord {
                    text: "Hello".to_string(),
                    confidence: 0.9,
                    region: TextRegion::default(),
                }],
            }],
        };

        let lines = recognizer.recognize(&blank_page()).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].words[0].text, "Hello");
        assert_eq!(recognizer.name(), "mock");
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let recognizer = MockRecognizer { lines: vec![] };
        let lines = recognizer.recognize(&blank_page()).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_failing_recognizer_surfaces_ocr_error() {
        let result = FailingRecognizer.recognize(&blank_page());
        assert!(matches!(result, Err(OcrError::ProcessingFailed(_))));
    }

    #[test]
    fn test_trait_object_is_usable() {
        let recognizer: Box<dyn TextRecognizer> = Box::new(MockRecognizer { lines: vec![] });
        assert_eq!(recognizer.name(), "mock");
        assert!(recognizer.recognize(&blank_page()).unwrap().is_empty());
    }
}
