use super::error::PdfError;
use once_cell::sync::Lazy;
use pdfium_render::prelude::*;
use std::sync::Mutex;

/// Cached outcome of the first Pdfium binding attempt.
enum InitializationState {
    Uninitialized,
    Initialized,
    Failed(String),
}

/// Lazily initialized Pdfium state.
///
/// Binding to the system library is attempted once; the outcome is cached so
/// that a missing library fails fast on every subsequent call instead of
/// re-probing the loader. Fresh bindings are created per call since
/// `Box<dyn PdfiumLibraryBindings>` is not `Clone`.
static PDFIUM_STATE: Lazy<Mutex<InitializationState>> = Lazy::new(|| Mutex::new(InitializationState::Uninitialized));

/// Get Pdfium bindings, initializing on first use.
pub(crate) fn bind_pdfium(context: &'static str) -> Result<Box<dyn PdfiumLibraryBindings>, PdfError> {
    let mut state = PDFIUM_STATE
        .lock()
        .map_err(|e| PdfError::RenderingFailed(format!("Failed to acquire lock on Pdfium state ({}): {}", context, e)))?;

    if let InitializationState::Failed(err) = &*state {
        return Err(PdfError::RenderingFailed(format!(
            "Pdfium initialization previously failed ({}): {}",
            context, err
        )));
    }

    match Pdfium::bind_to_system_library() {
        Ok(bindings) => {
            *state = InitializationState::Initialized;
            Ok(bindings)
        }
        Err(e) => {
            let message = format!("Failed to initialize Pdfium: {}", e);
            *state = InitializationState::Failed(message.clone());
            Err(PdfError::RenderingFailed(format!("{} ({})", message, context)))
        }
    }
}
