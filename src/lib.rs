//! PDF Page Extractor Library
//!
//! This crate extracts a user-selected subset of pages from an in-memory PDF
//! and produces a new PDF containing only those pages:
//! - `pages`: page specification parsing ("1,3,5-7")
//! - `pdf`: PDFium-backed page rendering and output assembly
//! - `extract`: the rasterize-and-reassemble pipeline
//! - `session`: interactive session state (intake, rename, quick actions)

pub mod error;
pub mod extract;
pub mod pages;
pub mod pdf;
pub mod session;

pub use error::{Error, Result};
pub use extract::{extract_pages, RENDER_SCALE};
pub use pages::PageSet;
pub use pdf::{PdfReader, RenderedPage};
pub use session::{ExtractedFile, LoadedDocument, Session, PDF_MIME_TYPE};
