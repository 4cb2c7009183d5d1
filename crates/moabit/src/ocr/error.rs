use std::fmt;

/// OCR-specific errors (pure Rust, no FFI types leak out)
#[derive(Debug, Clone)]
pub enum OcrError {
    InitializationFailed(String),
    InvalidConfiguration(String),
    InvalidLanguageCode(String),
    ImageProcessingFailed(String),
    ProcessingFailed(String),
}

impl fmt::Display for OcrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitializationFailed(msg) => {
                write!(f, "Recognizer initialization failed: {}", msg)
            }
            Self::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            Self::InvalidLanguageCode(msg) => write!(f, "Invalid language code: {}", msg),
            Self::ImageProcessingFailed(msg) => write!(f, "Image processing failed: {}", msg),
            Self::ProcessingFailed(msg) => write!(f, "OCR processing failed: {}", msg),
        }
    }
}

impl std::error::Error for OcrError {}

// NOTE: No From<std::io::Error> impl - IO errors must bubble up unchanged per error handling policy
