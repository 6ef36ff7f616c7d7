//! PDF processing layer
//!
//! Wraps PDFium for both ends of the pipeline: rasterizing pages of the
//! source document and assembling the rasters into a new document.

mod reader;
mod writer;

pub use reader::{render_page_from_bytes, PdfReader, RenderedPage};
pub use writer::assemble_pdf;

use crate::error::{Error, Result};
use pdfium_render::prelude::*;

/// Get a PDFium instance (creates a new instance each time - PDFium document
/// handles cannot cross threads, the bindings can be recreated cheaply)
pub(crate) fn create_pdfium() -> Result<Pdfium> {
    // Try to bind to a local library first, then the system one
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| {
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
                "/opt/pdfium/lib",
            ))
        })
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| Error::Pdfium {
            reason: format!("Failed to initialize PDFium: {}", e),
        })?;

    Ok(Pdfium::new(bindings))
}
