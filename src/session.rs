//! Interactive session state
//!
//! The explicit state record behind the interactive flow: the currently
//! loaded document, the editable output file name, and the flag that keeps a
//! second extraction from starting while one is in flight. Transitions happen
//! only through the event-handler methods below; there is no global state.

use crate::error::{Error, Result};
use crate::extract::extract_pages;
use crate::pages::PageSet;
use crate::pdf::PdfReader;
use std::path::Path;

/// Content type accepted by the upload intake
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// A document accepted by the intake check
pub struct LoadedDocument {
    pub file_name: String,
    pub reader: PdfReader,
}

/// Result of an extraction: the serialized output document plus the name it
/// should be saved under
pub struct ExtractedFile {
    pub file_name: String,
    pub pages: PageSet,
    pub data: Vec<u8>,
}

/// State record for one interactive session
#[derive(Default)]
pub struct Session {
    document: Option<LoadedDocument>,
    output_name: Option<String>,
    extracting: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upload intake: accept a file only when it declares the PDF content
    /// type, then load it through PDFium to learn the page count.
    ///
    /// On any failure the previously loaded document stays in place; the new
    /// one is installed only after a successful load. Loading also resets the
    /// output name to the default derived from the file name.
    pub fn load_file(&mut self, file_name: &str, content_type: &str, data: Vec<u8>) -> Result<u32> {
        if content_type != PDF_MIME_TYPE {
            return Err(Error::InvalidFileType {
                name: file_name.to_string(),
            });
        }

        let reader = PdfReader::open_bytes(data)?;
        let page_count = reader.page_count();

        tracing::info!(file = file_name, pages = page_count, "document loaded");

        self.output_name = Some(default_output_name(file_name));
        self.document = Some(LoadedDocument {
            file_name: file_name.to_string(),
            reader,
        });

        Ok(page_count)
    }

    /// Page count of the loaded document, if any
    pub fn total_pages(&self) -> Option<u32> {
        self.document.as_ref().map(|d| d.reader.page_count())
    }

    /// Name of the loaded document, if any
    pub fn file_name(&self) -> Option<&str> {
        self.document.as_ref().map(|d| d.file_name.as_str())
    }

    /// Current output file name
    pub fn output_name(&self) -> Option<&str> {
        self.output_name.as_deref()
    }

    /// Inline rename of the output file
    pub fn set_output_name(&mut self, name: &str) {
        self.output_name = Some(name.to_string());
    }

    /// Cancelled rename: revert to the default name derived from the input
    pub fn reset_output_name(&mut self) {
        self.output_name = self
            .document
            .as_ref()
            .map(|d| default_output_name(&d.file_name));
    }

    /// Extract the pages named by a specification string such as "1,3,5-7"
    pub async fn extract_spec(&mut self, spec: &str) -> Result<ExtractedFile> {
        self.ensure_idle()?;
        let total = self.require_document()?.reader.page_count();
        self.run_extraction(PageSet::parse(spec, total)).await
    }

    /// Quick action: extract page 1 only, regardless of any specification text
    pub async fn extract_first(&mut self) -> Result<ExtractedFile> {
        self.ensure_idle()?;
        self.require_document()?;
        self.run_extraction(PageSet::single(1)).await
    }

    /// Quick action: extract the last page only
    pub async fn extract_last(&mut self) -> Result<ExtractedFile> {
        self.ensure_idle()?;
        let total = self.require_document()?.reader.page_count();
        self.run_extraction(PageSet::single(total)).await
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.extracting {
            return Err(Error::ExtractionInProgress);
        }
        Ok(())
    }

    fn require_document(&self) -> Result<&LoadedDocument> {
        self.document.as_ref().ok_or(Error::DocumentLoad {
            reason: "No document loaded".to_string(),
        })
    }

    async fn run_extraction(&mut self, pages: PageSet) -> Result<ExtractedFile> {
        self.extracting = true;
        let result = self.extract_inner(&pages).await;
        self.extracting = false;

        result.map(|data| ExtractedFile {
            file_name: self
                .output_name
                .clone()
                .unwrap_or_else(|| "extracted.pdf".to_string()),
            pages,
            data,
        })
    }

    async fn extract_inner(&self, pages: &PageSet) -> Result<Vec<u8>> {
        let doc = self.require_document()?;
        let data = extract_pages(&doc.reader, pages).await?;

        tracing::info!(
            selected = pages.len(),
            bytes = data.len(),
            "extraction complete"
        );

        Ok(data)
    }

    #[cfg(test)]
    fn set_extracting(&mut self, value: bool) {
        self.extracting = value;
    }
}

/// Default output name: `<input-stem>_extracted.pdf`
fn default_output_name(input_name: &str) -> String {
    let stem = Path::new(input_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    format!("{}_extracted.pdf", stem)
}
