use cvscan_core::error::ScanError;
use cvscan_core::ExtractionResult;

pub fn print(result: &ExtractionResult) -> Result<(), ScanError> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}
