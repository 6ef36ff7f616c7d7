//! Output document assembly via PDFium

use crate::error::{Error, Result};
use crate::pdf::create_pdfium;
use crate::pdf::reader::RenderedPage;
use pdfium_render::prelude::*;

/// Assemble rendered pages into a new PDF and serialize it.
///
/// Pages are appended in slice order. Each output page is sized in points to
/// its raster's pixel dimensions, and the raster is embedded filling the
/// whole page.
pub fn assemble_pdf(pages: &[RenderedPage]) -> Result<Vec<u8>> {
    let pdfium = create_pdfium()?;

    let mut document = pdfium.create_new_pdf().map_err(|e| Error::Extraction {
        reason: format!("Failed to create output document: {}", e),
    })?;

    for rendered in pages {
        let width = PdfPoints::new(rendered.width as f32);
        let height = PdfPoints::new(rendered.height as f32);

        let mut page = document
            .pages_mut()
            .create_page_at_end(PdfPagePaperSize::Custom(width, height))
            .map_err(|e| Error::Extraction {
                reason: format!("Failed to add page for source page {}: {}", rendered.page, e),
            })?;

        page.objects_mut()
            .create_image_object(
                PdfPoints::new(0.0),
                PdfPoints::new(0.0),
                &rendered.image,
                Some(width),
                Some(height),
            )
            .map_err(|e| Error::Extraction {
                reason: format!("Failed to embed source page {}: {}", rendered.page, e),
            })?;
    }

    document.save_to_bytes().map_err(|e| Error::Extraction {
        reason: format!("Failed to save output document: {}", e),
    })
}
