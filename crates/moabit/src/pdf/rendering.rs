use super::bindings::bind_pdfium;
use super::error::{PdfError, Result};
use image::DynamicImage;
use pdfium_render::prelude::*;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

const PDF_POINTS_PER_INCH: f64 = 72.0;

/// Rendering parameters for the page rasterizer.
///
/// `thread_count` sizes the internal render worker pool; the returned page
/// sequence is ordered regardless of how many workers run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    #[serde(default = "default_dpi")]
    pub dpi: i32,

    #[serde(default = "default_thread_count")]
    pub thread_count: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dpi: default_dpi(),
            thread_count: default_thread_count(),
        }
    }
}

impl RenderOptions {
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.dpi < 1 {
            return Err(format!("DPI must be positive, got {}", self.dpi));
        }
        if self.thread_count < 1 {
            return Err("Render thread count must be at least 1".to_string());
        }
        Ok(())
    }
}

fn default_dpi() -> i32 {
    200
}

fn default_thread_count() -> usize {
    num_cpus::get().min(12)
}

pub struct PdfRenderer {
    pdfium: Pdfium,
}

impl PdfRenderer {
    pub fn new() -> Result<Self> {
        let binding = bind_pdfium("page rendering")?;

        let pdfium = Pdfium::new(binding);
        Ok(Self { pdfium })
    }

    /// Number of pages in the document.
    pub fn page_count(&self, pdf_bytes: &[u8]) -> Result<usize> {
        let document = self.load_document(pdf_bytes)?;
        Ok(document.pages().len() as usize)
    }

    /// Render a single page at the configured resolution.
    pub fn render_page(&self, pdf_bytes: &[u8], page_index: usize, options: &RenderOptions) -> Result<DynamicImage> {
        let document = self.load_document(pdf_bytes)?;

        let page = document
            .pages()
            .get(page_index as u16)
            .map_err(|_| PdfError::PageNotFound(page_index))?;

        let width_points = page.width().value;
        let height_points = page.height().value;

        let scale = options.dpi as f64 / PDF_POINTS_PER_INCH;

        let config = PdfRenderConfig::new()
            .set_target_width(((width_points as f64 * scale) as i32).max(1))
            .set_target_height(((height_points as f64 * scale) as i32).max(1))
            .rotate_if_landscape(PdfPageRenderRotation::None, false);

        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| PdfError::RenderingFailed(format!("Failed to render page: {}", e)))?;

        let image = bitmap.as_image().into_rgb8();

        Ok(DynamicImage::ImageRgb8(image))
    }

    /// Render every page, in order.
    ///
    /// With `thread_count > 1` the pages are rasterized on a dedicated worker
    /// pool; each worker binds its own Pdfium session, and the collected
    /// sequence preserves page order. Any page failure fails the whole
    /// render.
    pub fn render_document(&self, pdf_bytes: &[u8], options: &RenderOptions) -> Result<Vec<DynamicImage>> {
        let page_count = self.page_count(pdf_bytes)?;

        if options.thread_count <= 1 || page_count <= 1 {
            let mut images = Vec::with_capacity(page_count);
            for page_index in 0..page_count {
                images.push(self.render_page(pdf_bytes, page_index, options)?);
            }
            return Ok(images);
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(options.thread_count.min(page_count))
            .thread_name(|i| format!("moabit-render-{}", i))
            .build()
            .map_err(|e| PdfError::RenderingFailed(format!("Failed to build render pool: {}", e)))?;

        pool.install(|| {
            (0..page_count)
                .into_par_iter()
                .map(|page_index| render_page_to_image(pdf_bytes, page_index, options))
                .collect::<Result<Vec<_>>>()
        })
    }

    fn load_document<'a>(&'a self, pdf_bytes: &'a [u8]) -> Result<PdfDocument<'a>> {
        self.pdfium.load_pdf_from_byte_slice(pdf_bytes, None).map_err(|e| {
            let err_msg = e.to_string();
            if err_msg.contains("password") || err_msg.contains("Password") {
                PdfError::PasswordRequired
            } else {
                PdfError::InvalidPdf(err_msg)
            }
        })
    }
}

/// Render one page with a renderer created for the call.
///
/// Binding state is cached process-wide, so per-call construction is cheap;
/// this is what the parallel render path runs on each worker.
pub fn render_page_to_image(pdf_bytes: &[u8], page_index: usize, options: &RenderOptions) -> Result<DynamicImage> {
    let renderer = PdfRenderer::new()?;
    renderer.render_page(pdf_bytes, page_index, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_default() {
        let options = RenderOptions::default();
        assert_eq!(options.dpi, 200);
        assert!(options.thread_count >= 1);
        assert!(options.thread_count <= 12);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_render_options_validate_bad_dpi() {
        let options = RenderOptions {
            dpi: 0,
            ..Default::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_render_options_validate_zero_threads() {
        let options = RenderOptions {
            thread_count: 0,
            ..Default::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_render_options_serde_defaults() {
        let options: RenderOptions = toml::from_str("").unwrap();
        assert_eq!(options.dpi, 200);
        assert!(options.thread_count >= 1);
    }

    #[test]
    fn test_renderer_creation() {
        let result = PdfRenderer::new();
        if let Ok(renderer) = result {
            // Corrupt input must be rejected as invalid, not crash
            let err = renderer.page_count(b"not a pdf").unwrap_err();
            assert!(matches!(err, PdfError::InvalidPdf(_) | PdfError::PasswordRequired));
        }
    }

    #[test]
    fn test_render_invalid_pdf() {
        if let Ok(renderer) = PdfRenderer::new() {
            let options = RenderOptions::default();
            let result = renderer.render_page(b"not a pdf", 0, &options);
            assert!(result.is_err());
        }
    }

    #[test]
    fn test_render_document_invalid_pdf() {
        if let Ok(renderer) = PdfRenderer::new() {
            let options = RenderOptions::default();
            let result = renderer.render_document(b"not a pdf", &options);
            assert!(result.is_err());
        }
    }

    #[test]
    fn test_render_empty_bytes() {
        if let Ok(renderer) = PdfRenderer::new() {
            let options = RenderOptions::default();
            let result = renderer.render_page(&[], 0, &options);
            assert!(result.is_err());
        }
    }

    #[test]
    fn test_pdf_points_per_inch_constant() {
        assert_eq!(PDF_POINTS_PER_INCH, 72.0);
    }
}
