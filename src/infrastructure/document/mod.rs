// ============================================================
// DOCUMENT EXTRACTION
// ============================================================
// PDF and DOCX bytes into plain text

mod docx;
mod pdf;

pub use docx::extract_docx_text;
pub use pdf::extract_pdf_text;

#[cfg(test)]
pub(crate) use docx::fixtures::docx_bytes;
#[cfg(test)]
pub(crate) use pdf::fixtures::pdf_with_pages;

use crate::domain::error::Result;
use crate::domain::summary::TextDocument;
use crate::domain::upload::DocumentFormat;

/// A blank result is not an error: the caller reports "no text found"
pub fn extract_text(bytes: &[u8], format: DocumentFormat) -> Result<TextDocument> {
    match format {
        DocumentFormat::Pdf => extract_pdf_text(bytes),
        DocumentFormat::Docx => extract_docx_text(bytes),
    }
}
