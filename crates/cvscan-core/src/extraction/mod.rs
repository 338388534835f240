pub mod docx;
pub mod pdf;
pub mod pdftotext;

use crate::error::ScanError;
use crate::model::DocumentFormat;

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract all text from PDF bytes in document order.
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, ScanError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Decode an uploaded document into plain text.
///
/// PDFs go through `pdf`; DOCX files are read directly from their
/// `word/document.xml` part. Page breaks are never represented in the output.
pub fn load_text(
    bytes: &[u8],
    format: DocumentFormat,
    pdf: &dyn PdfExtractor,
) -> Result<String, ScanError> {
    let text = match format {
        DocumentFormat::Pdf => {
            tracing::debug!(backend = pdf.backend_name(), "extracting pdf text");
            strip_page_markers(&pdf.extract_text(bytes)?)
        }
        DocumentFormat::Docx => docx::extract_docx_text(bytes)?,
    };

    if text.is_empty() {
        tracing::warn!(%format, "document yielded no text");
    }

    Ok(text)
}

/// Form feeds separate pages in both pdf backends.
pub(crate) fn strip_page_markers(text: &str) -> String {
    text.chars().filter(|&c| c != '\x0c').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPdf(&'static str);

    impl PdfExtractor for FixedPdf {
        fn extract_text(&self, _pdf_bytes: &[u8]) -> Result<String, ScanError> {
            Ok(self.0.to_string())
        }

        fn backend_name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn pdf_page_markers_removed() {
        let pdf = FixedPdf("page one\n\x0cpage two\n\x0c");
        let text = load_text(&[], DocumentFormat::Pdf, &pdf).unwrap();
        assert_eq!(text, "page one\npage two\n");
    }

    #[test]
    fn empty_pdf_is_not_an_error() {
        let pdf = FixedPdf("");
        assert_eq!(load_text(&[], DocumentFormat::Pdf, &pdf).unwrap(), "");
    }

    #[test]
    fn garbage_docx_is_parse_failure() {
        let pdf = FixedPdf("unused");
        let result = load_text(b"not a zip archive", DocumentFormat::Docx, &pdf);
        assert!(matches!(result, Err(ScanError::ParseFailure(_))));
    }
}
