pub mod builtin;
pub mod schema;

use crate::error::ScanError;
use schema::VocabularyDef;
use std::collections::HashSet;
use std::path::Path;

/// Load a vocabulary from a JSON file.
pub fn load_vocabulary(path: &Path) -> Result<VocabularyDef, ScanError> {
    let content = std::fs::read_to_string(path).map_err(|e| ScanError::VocabularyLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_vocabulary(&content, path)
}

/// Parse a vocabulary from a JSON string.
pub fn parse_vocabulary(json: &str, source: &Path) -> Result<VocabularyDef, ScanError> {
    let vocabulary: VocabularyDef =
        serde_json::from_str(json).map_err(|e| ScanError::VocabularyLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_vocabulary(&vocabulary)?;
    Ok(vocabulary)
}

/// Parse a vocabulary from a JSON string (no file path context).
pub fn parse_vocabulary_str(json: &str) -> Result<VocabularyDef, ScanError> {
    let vocabulary: VocabularyDef = serde_json::from_str(json).map_err(ScanError::Json)?;
    validate_vocabulary(&vocabulary)?;
    Ok(vocabulary)
}

/// Validate that a vocabulary is well-formed.
pub fn validate_vocabulary(vocabulary: &VocabularyDef) -> Result<(), ScanError> {
    if vocabulary.terms.is_empty() {
        return Err(ScanError::VocabularyInvalid(
            "terms must not be empty".into(),
        ));
    }

    let mut seen = HashSet::new();
    for term in &vocabulary.terms {
        if term.trim().is_empty() {
            return Err(ScanError::VocabularyInvalid(
                "term must not be blank".into(),
            ));
        }

        if !seen.insert(term.to_lowercase()) {
            return Err(ScanError::VocabularyInvalid(format!(
                "term '{}' is listed more than once (matching ignores case)",
                term
            )));
        }
    }

    Ok(())
}
