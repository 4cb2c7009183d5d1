//! Error types for Moabit.
//!
//! All fallible operations in the library return [`MoabitError`]. The error
//! taxonomy follows the pipeline's failure model:
//!
//! - **Fatal precondition errors** (`Validation`, `Render`) abort a run:
//!   missing input file, unreadable or corrupt PDF.
//! - **Per-page recoverable errors** (`Ocr`) are caught inside the
//!   aggregation loop and never escape it; they only surface from direct
//!   recognizer calls.
//! - **System errors** (`Io`) always bubble up unchanged so real filesystem
//!   problems are never masked.
use thiserror::Error;

/// Result type alias using `MoabitError`.
pub type Result<T> = std::result::Result<T, MoabitError>;

/// Main error type for all Moabit operations.
#[derive(Debug, Error)]
pub enum MoabitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Render error: {message}")]
    Render {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("OCR error: {message}")]
    Ocr {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for MoabitError {
    fn from(err: serde_json::Error) -> Self {
        MoabitError::Serialization {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(feature = "pdf")]
impl From<crate::pdf::error::PdfError> for MoabitError {
    fn from(err: crate::pdf::error::PdfError) -> Self {
        MoabitError::Render {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<crate::ocr::error::OcrError> for MoabitError {
    fn from(err: crate::ocr::error::OcrError) -> Self {
        MoabitError::Ocr {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

macro_rules! error_constructor {
    ($name:ident, $variant:ident) => {
        pastey::paste! {
            #[doc = "Create a " $variant " error"]
            pub fn $name<S: Into<String>>(message: S) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: None,
                }
            }

            #[doc = "Create a " $variant " error with source"]
            pub fn [<$name _with_source>]<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
                message: S,
                source: E,
            ) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: Some(Box::new(source)),
                }
            }
        }
    };
}

impl MoabitError {
    error_constructor!(render, Render);
    error_constructor!(ocr, Ocr);
    error_constructor!(validation, Validation);
    error_constructor!(serialization, Serialization);
}
