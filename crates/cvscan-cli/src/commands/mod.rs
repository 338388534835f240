pub mod scan;
pub mod text;
pub mod vocab;

use cvscan_core::error::ScanError;
use cvscan_core::extraction::pdf::PdfExtractBackend;
use cvscan_core::extraction::pdftotext::PdftotextExtractor;
use cvscan_core::extraction::PdfExtractor;

use crate::PdfBackend;

/// Fails before reading the input when pdftotext is selected but missing.
fn pdf_extractor(backend: PdfBackend) -> Result<Box<dyn PdfExtractor>, ScanError> {
    match backend {
        PdfBackend::PdfExtract => Ok(Box::new(PdfExtractBackend::new())),
        PdfBackend::Pdftotext if !PdftotextExtractor::is_available() => {
            Err(ScanError::PdftotextNotFound)
        }
        PdfBackend::Pdftotext => Ok(Box::new(PdftotextExtractor::new())),
    }
}
