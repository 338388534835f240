use crate::error::ScanError;
use crate::extraction::{strip_page_markers, PdfExtractor};
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Runs in reading order (no `-layout`), so multi-column resumes come out
/// one column at a time.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, ScanError> {
        // pdftotext only reads from a path
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| ScanError::ParseFailure(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| ScanError::ParseFailure(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-enc")
            .arg("UTF-8")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ScanError::PdftotextNotFound
                } else {
                    ScanError::ParseFailure(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(exit_failure(output.status.code(), &stderr));
        }

        Ok(clean_output(&String::from_utf8_lossy(&output.stdout)))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// A non-zero exit means poppler could not read the document (corrupt,
/// encrypted, not a PDF).
fn exit_failure(code: Option<i32>, stderr: &str) -> ScanError {
    let code = code.map_or_else(|| "signal".to_string(), |c| c.to_string());
    let stderr = stderr.trim();
    if stderr.is_empty() {
        ScanError::ParseFailure(format!("pdftotext exited with {code}"))
    } else {
        ScanError::ParseFailure(format!("pdftotext exited with {code}: {stderr}"))
    }
}

/// pdftotext ends every page with "\n\x0c"; drop the markers and the
/// trailing empty page it leaves behind.
fn clean_output(raw: &str) -> String {
    let text = strip_page_markers(raw);
    if text.trim().is_empty() {
        String::new()
    } else {
        text
    }
}
