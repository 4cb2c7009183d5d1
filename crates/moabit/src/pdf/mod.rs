//! PDF page rendering.
//!
//! Rasterizes document pages to images for OCR via `pdfium-render`. The
//! renderer is the only component that touches the PDF itself; everything
//! downstream works on the ordered page-image sequence it produces. A
//! corrupt or unreadable document is a fatal error here, by contrast with
//! the per-page tolerance of the OCR loop.
//!
//! # Example
//!
//! ```rust,no_run
//! use moabit::pdf::{PdfRenderer, RenderOptions};
//!
//! # fn example() -> Result<(), moabit::pdf::PdfError> {
//! let pdf_bytes = std::fs::read("document.pdf").expect("failed to read PDF");
//!
//! let renderer = PdfRenderer::new()?;
//! let pages = renderer.render_document(&pdf_bytes, &RenderOptions::default())?;
//! println!("Rendered {} pages", pages.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Note
//!
//! This module requires the `pdf` feature and a system Pdfium library.
mod bindings;
pub mod error;
pub mod rendering;

pub use error::PdfError;
pub use rendering::{PdfRenderer, RenderOptions, render_page_to_image};
