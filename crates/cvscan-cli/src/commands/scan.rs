use cvscan_core::error::ScanError;
use cvscan_core::model::DocumentFormat;
use cvscan_core::vocab::load_vocabulary;
use cvscan_core::Engine;
use std::path::PathBuf;
use tracing::debug;

use crate::output;
use crate::PdfBackend;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    pdf_backend: PdfBackend,
    vocabulary: Option<PathBuf>,
    preview: usize,
) -> Result<(), ScanError> {
    let format = DocumentFormat::from_path(&input_file)?;
    let extractor = super::pdf_extractor(pdf_backend)?;
    let bytes = std::fs::read(&input_file)?;

    let mut engine = Engine::with_defaults()?;
    if let Some(path) = vocabulary {
        engine = engine.with_vocabulary(load_vocabulary(&path)?);
    }

    debug!(
        file = %input_file.display(),
        backend = extractor.backend_name(),
        vocabulary = %engine.vocabulary().name,
        "scanning"
    );

    let result = cvscan_core::scan_resume(&bytes, format, extractor.as_ref(), &engine)?;

    match output_format {
        "json" => output::json::print(&result)?,
        _ => output::table::print(&result, preview),
    }

    Ok(())
}
