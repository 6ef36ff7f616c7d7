//! Page extraction pipeline
//!
//! Renders every selected page at a fixed scale, waits for the whole batch,
//! and assembles the rasters into a new PDF.

use crate::error::{Error, Result};
use crate::pages::PageSet;
use crate::pdf::{assemble_pdf, render_page_from_bytes, PdfReader, RenderedPage};
use futures_util::future::try_join_all;
use std::sync::Arc;

/// Fixed upscaling factor applied when rasterizing source pages. 2x keeps the
/// re-embedded rasters visually faithful to the source.
pub const RENDER_SCALE: f32 = 2.0;

/// Render the selected pages of `reader` and assemble them into a new PDF.
///
/// Per-page renders run as independent blocking tasks; the pipeline waits for
/// all of them and reassembles the results in request order, not completion
/// order. A failure in any task aborts the whole extraction - no partial
/// output is ever produced.
pub async fn extract_pages(reader: &PdfReader, pages: &PageSet) -> Result<Vec<u8>> {
    let total = reader.page_count();

    if pages.is_empty() {
        return Err(Error::EmptyPageSelection { total });
    }

    // The selection was validated at parse time, but against a page count
    // that may belong to a previously loaded document. Check again.
    for &page in pages.pages() {
        if page < 1 || page > total {
            return Err(Error::PageOutOfBounds { page, total });
        }
    }

    tracing::debug!(selected = pages.len(), total, "rendering selected pages");

    let data = reader.data();
    let render_tasks: Vec<_> = pages
        .pages()
        .iter()
        .map(|&page| {
            let data = Arc::clone(&data);
            tokio::task::spawn_blocking(move || render_page_from_bytes(&data, page, RENDER_SCALE))
        })
        .collect();

    let rendered = try_join_all(render_tasks)
        .await
        .map_err(|e| Error::Extraction {
            reason: format!("Render task failed: {}", e),
        })?
        .into_iter()
        .collect::<Result<Vec<RenderedPage>>>()?;

    tracing::debug!(count = rendered.len(), "assembling output document");

    tokio::task::spawn_blocking(move || assemble_pdf(&rendered))
        .await
        .map_err(|e| Error::Extraction {
            reason: format!("Assembly task failed: {}", e),
        })?
}
