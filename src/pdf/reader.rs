//! Source document handling via PDFium

use crate::error::{Error, Result};
use crate::pdf::create_pdfium;
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::sync::Arc;

/// One source page rasterized at a fixed scale factor
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Source page number (1-indexed)
    pub page: u32,
    /// Raster width in pixels
    pub width: u32,
    /// Raster height in pixels
    pub height: u32,
    /// The decoded raster
    pub image: DynamicImage,
}

/// An in-memory source document: the uploaded bytes plus their page count
///
/// The PDFium document handle is not kept around; it is recreated from the
/// stored bytes whenever a page is rendered, so the bytes can be shared
/// across rendering tasks.
pub struct PdfReader {
    data: Arc<Vec<u8>>,
    page_count: u32,
}

impl PdfReader {
    /// Open a PDF from bytes, verifying the header and reading the page count
    pub fn open_bytes(data: Vec<u8>) -> Result<Self> {
        if data.len() < 4 || &data[0..4] != b"%PDF" {
            return Err(Error::DocumentLoad {
                reason: "Not a valid PDF file".to_string(),
            });
        }

        let pdfium = create_pdfium()?;

        let document = pdfium
            .load_pdf_from_byte_slice(&data, None)
            .map_err(map_load_error)?;

        let page_count = document.pages().len() as u32;
        drop(document);

        Ok(Self {
            data: Arc::new(data),
            page_count,
        })
    }

    /// Get the number of pages
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Shared handle to the raw document bytes
    pub fn data(&self) -> Arc<Vec<u8>> {
        Arc::clone(&self.data)
    }

    /// Width and height of a page (1-indexed) in points
    pub fn page_size(&self, page_num: u32) -> Result<(f32, f32)> {
        if page_num < 1 || page_num > self.page_count {
            return Err(Error::PageOutOfBounds {
                page: page_num,
                total: self.page_count,
            });
        }

        let pdfium = create_pdfium()?;
        let document = pdfium
            .load_pdf_from_byte_slice(&self.data, None)
            .map_err(map_load_error)?;

        let page = document
            .pages()
            .get((page_num - 1) as u16)
            .map_err(|e| Error::Pdfium {
                reason: format!("Failed to get page {}: {}", page_num, e),
            })?;

        Ok((page.width().value, page.height().value))
    }

    /// Render one page (1-indexed) at the given scale factor
    pub fn render_page(&self, page_num: u32, scale: f32) -> Result<RenderedPage> {
        render_page_from_bytes(&self.data, page_num, scale)
    }
}

/// Render one page of the PDF held in `data` at `scale`
///
/// Takes raw bytes instead of a document handle so that independent render
/// tasks can each open their own handle from the same shared buffer.
pub fn render_page_from_bytes(data: &[u8], page_num: u32, scale: f32) -> Result<RenderedPage> {
    let pdfium = create_pdfium()?;

    let document = pdfium
        .load_pdf_from_byte_slice(data, None)
        .map_err(map_load_error)?;

    let pages = document.pages();
    let page_count = pages.len() as u32;

    if page_num < 1 || page_num > page_count {
        return Err(Error::PageOutOfBounds {
            page: page_num,
            total: page_count,
        });
    }

    let page = pages.get((page_num - 1) as u16).map_err(|e| Error::Pdfium {
        reason: format!("Failed to get page {}: {}", page_num, e),
    })?;

    let config = PdfRenderConfig::new()
        .scale_page_by_factor(scale)
        .render_form_data(true)
        .render_annotations(true);

    let bitmap = page.render_with_config(&config).map_err(|e| Error::Pdfium {
        reason: format!("Failed to render page {}: {}", page_num, e),
    })?;

    let image = bitmap.as_image();

    Ok(RenderedPage {
        page: page_num,
        width: image.width(),
        height: image.height(),
        image,
    })
}

/// Map PDFium load errors to our error type
fn map_load_error(err: PdfiumError) -> Error {
    match err {
        PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::PasswordError) => {
            Error::DocumentLoad {
                reason: "PDF is password protected".to_string(),
            }
        }
        _ => Error::DocumentLoad {
            reason: format!("{}", err),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_header_is_rejected_without_pdfium() {
        let result = PdfReader::open_bytes(b"not a pdf".to_vec());
        assert!(matches!(result, Err(Error::DocumentLoad { .. })));
    }

    #[test]
    fn truncated_input_is_rejected() {
        let result = PdfReader::open_bytes(b"%PD".to_vec());
        assert!(matches!(result, Err(Error::DocumentLoad { .. })));
    }
}
