//! Error types for the PDF page extractor

use thiserror::Error;

/// Result type alias for the PDF page extractor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the PDF page extractor
///
/// Every variant is recoverable at the top of the interactive flow: the user
/// corrects the input or picks a different file and triggers the action again.
#[derive(Error, Debug)]
pub enum Error {
    /// Uploaded file does not declare the PDF content type
    #[error("not a PDF file: {name}")]
    InvalidFileType { name: String },

    /// The rendering library cannot parse the uploaded bytes
    #[error("failed to load PDF: {reason}")]
    DocumentLoad { reason: String },

    /// The page specification produced no valid pages
    #[error("no valid pages selected; enter page numbers between 1 and {total}")]
    EmptyPageSelection { total: u32 },

    /// Page out of bounds
    #[error("page {page} out of bounds (total: {total})")]
    PageOutOfBounds { page: u32, total: u32 },

    /// Rendering or assembly failed mid-extraction
    #[error("extraction failed: {reason}")]
    Extraction { reason: String },

    /// A second extraction was triggered while one is in flight
    #[error("an extraction is already in progress")]
    ExtractionInProgress,

    /// PDFium error
    #[error("PDFium error: {reason}")]
    Pdfium { reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
