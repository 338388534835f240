use std::panic::{self, AssertUnwindSafe};

use crate::error::ScanError;
use crate::extraction::PdfExtractor;

/// In-process PDF extraction backed by the `pdf-extract` crate.
///
/// Needs no external tools, which makes it the default backend.
pub struct PdfExtractBackend;

impl PdfExtractBackend {
    pub fn new() -> Self {
        PdfExtractBackend
    }
}

impl Default for PdfExtractBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdfExtractBackend {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, ScanError> {
        // pdf-extract panics on some malformed inputs instead of returning Err.
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(pdf_bytes)
        }));

        match outcome {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(ScanError::ParseFailure(format!("failed to read pdf: {e}"))),
            Err(_) => Err(ScanError::ParseFailure(
                "failed to read pdf: document structure is corrupt".into(),
            )),
        }
    }

    fn backend_name(&self) -> &str {
        "pdf-extract"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::load_text;
    use crate::model::DocumentFormat;

    /// Single-page PDF with one Helvetica text line per entry, top to bottom.
    fn text_pdf(lines: &[&str]) -> Vec<u8> {
        let mut content = String::from("BT /F1 12 Tf 72 720 Td");
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                content.push_str(" 0 -18 Td");
            }
            content.push_str(&format!(" ({line}) Tj"));
        }
        content.push_str(" ET");

        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
                .to_string(),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
            format!(
                "<< /Length {} >>\nstream\n{}\nendstream",
                content.len(),
                content
            ),
        ];

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::new();
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
        }

        let xref_at = pdf.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f\r\n", objects.len() + 1);
        for offset in offsets {
            xref.push_str(&format!("{offset:010} 00000 n\r\n"));
        }
        pdf.extend_from_slice(xref.as_bytes());
        pdf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
                objects.len() + 1,
                xref_at
            )
            .as_bytes(),
        );
        pdf
    }

    #[test]
    fn reads_text_in_document_order() {
        let pdf = text_pdf(&["Jane Doe", "jane@doe.dev", "Python developer"]);
        let text = PdfExtractBackend::new().extract_text(&pdf).unwrap();

        let name = text.find("Jane Doe").expect("name extracted");
        let email = text.find("jane@doe.dev").expect("email extracted");
        let skill = text.find("Python developer").expect("skill line extracted");
        assert!(name < email && email < skill, "out of order: {text:?}");
    }

    #[test]
    fn loader_output_has_no_page_markers() {
        let pdf = text_pdf(&["Data Science lead", "8 years of experience"]);
        let text = load_text(&pdf, DocumentFormat::Pdf, &PdfExtractBackend::new()).unwrap();
        assert!(!text.contains('\x0c'));
        assert!(text.contains("8 years of experience"));
    }

    #[test]
    fn non_pdf_bytes_are_parse_failure() {
        let backend = PdfExtractBackend::new();
        let result = backend.extract_text(b"PK\x03\x04 definitely not a pdf");
        assert!(matches!(result, Err(ScanError::ParseFailure(_))));
    }

    #[test]
    fn empty_input_is_parse_failure() {
        let result = PdfExtractBackend::new().extract_text(&[]);
        assert!(matches!(result, Err(ScanError::ParseFailure(_))));
    }
}
