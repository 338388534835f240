pub mod analysis;
pub mod error;
pub mod extraction;
pub mod fields;
pub mod model;
pub mod nlp;
pub mod vocab;

pub use analysis::{Engine, ExtractionResult};

use error::ScanError;
use extraction::PdfExtractor;
use model::DocumentFormat;
use tracing::info;

/// Main API entry point: decode an uploaded resume and extract its fields.
///
/// Any loader failure is terminal; no partial result is produced. An empty
/// document is not an error and yields an empty result.
pub fn scan_resume(
    bytes: &[u8],
    format: DocumentFormat,
    pdf: &dyn PdfExtractor,
    engine: &Engine,
) -> Result<ExtractionResult, ScanError> {
    let text = extraction::load_text(bytes, format, pdf)?;
    let result = engine.analyze(text);

    info!(
        %format,
        chars = result.raw_text.chars().count(),
        skills = result.skills.len(),
        "scanned resume"
    );

    Ok(result)
}

/// Same as [`scan_resume`], with the format given as a declared extension
/// ("pdf" or "docx").
pub fn scan_upload(
    bytes: &[u8],
    declared_extension: &str,
    pdf: &dyn PdfExtractor,
    engine: &Engine,
) -> Result<ExtractionResult, ScanError> {
    let format = DocumentFormat::from_extension(declared_extension)?;
    scan_resume(bytes, format, pdf, engine)
}

/// Decode a document to plain text without running the extraction passes.
pub fn extract_text(
    bytes: &[u8],
    format: DocumentFormat,
    pdf: &dyn PdfExtractor,
) -> Result<String, ScanError> {
    extraction::load_text(bytes, format, pdf)
}
