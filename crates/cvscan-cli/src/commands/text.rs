use cvscan_core::error::ScanError;
use cvscan_core::model::DocumentFormat;
use std::path::PathBuf;

use crate::PdfBackend;

pub fn run(
    input_file: PathBuf,
    pdf_backend: PdfBackend,
    output_file: Option<PathBuf>,
) -> Result<(), ScanError> {
    let format = DocumentFormat::from_path(&input_file)?;
    let extractor = super::pdf_extractor(pdf_backend)?;
    let bytes = std::fs::read(&input_file)?;
    let text = cvscan_core::extract_text(&bytes, format, extractor.as_ref())?;

    match output_file {
        Some(path) => {
            std::fs::write(&path, &text)?;
            eprintln!(
                "Extracted {} character(s) from {} document, written to {}",
                text.chars().count(),
                format,
                path.display()
            );
        }
        None => {
            println!("{text}");
        }
    }

    Ok(())
}
