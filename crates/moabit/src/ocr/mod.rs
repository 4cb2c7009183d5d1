//! OCR (Optical Character Recognition) subsystem.
//!
//! The pipeline treats recognition as an injected capability: anything that
//! implements [`TextRecognizer`] can drive a scan. The module ships one real
//! backend, Tesseract (behind the `tesseract` feature), which reads
//! word-level detections with geometry and confidence from TSV output.
//!
//! # Example
//!
//! With the `tesseract` feature enabled:
//!
//! ```rust,ignore
//! use moabit::ocr::{RecognizerOptions, TesseractRecognizer, TextRecognizer};
//!
//! # fn example() -> Result<(), moabit::ocr::OcrError> {
//! let recognizer = TesseractRecognizer::new(RecognizerOptions::default())?;
//!
//! let image = image::open("page_1.png").expect("failed to read image");
//! let lines = recognizer.recognize(&image)?;
//!
//! for line in &lines {
//!     for word in &line.words {
//!         println!("{} ({:.2})", word.text, word.confidence);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
pub mod backend;
pub mod error;
#[cfg(feature = "tesseract")]
pub mod tesseract;
pub mod types;

pub use backend::TextRecognizer;
pub use error::OcrError;
#[cfg(feature = "tesseract")]
pub use tesseract::TesseractRecognizer;
pub use types::{DetectedWord, RecognizerOptions, TextLine, TextRegion};
