use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::ScanError;

/// Upload formats the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Pdf => write!(f, "pdf"),
            DocumentFormat::Docx => write!(f, "docx"),
        }
    }
}

impl DocumentFormat {
    /// Resolve a declared extension ("pdf", "DOCX", ".pdf").
    pub fn from_extension(ext: &str) -> Result<DocumentFormat, ScanError> {
        let lower = ext.trim().trim_start_matches('.').to_lowercase();
        match lower.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            _ => Err(ScanError::UnsupportedFormat(ext.trim().to_string())),
        }
    }

    /// Resolve the format from whatever follows the last '.' of the file name.
    pub fn from_path(path: &Path) -> Result<DocumentFormat, ScanError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match name.rsplit_once('.') {
            Some((_, ext)) => DocumentFormat::from_extension(ext),
            None => Err(ScanError::UnsupportedFormat(name)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityLabel {
    Person,
    Organization,
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityLabel::Person => write!(f, "PERSON"),
            EntityLabel::Organization => write!(f, "ORG"),
        }
    }
}

/// A labelled span found by an entity recognizer.
///
/// `start` and `end` are byte offsets into the analyzed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
}
