use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::analysis::suggestion::Suggestion;

/// Everything extracted from one uploaded resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Full decoded document text.
    pub raw_text: String,
    /// Person names, in order of appearance.
    pub names: Vec<String>,
    /// Email-like tokens, left to right, duplicates kept.
    pub emails: Vec<String>,
    /// Phone-like tokens, left to right, duplicates kept.
    pub phones: Vec<String>,
    /// Vocabulary terms found in the text.
    pub skills: BTreeSet<String>,
    /// Largest stated years of experience; `None` when nothing matched.
    pub experience_years: Option<u64>,
    /// Whole-document polarity in [-1.0, 1.0].
    pub sentiment_score: f64,
    pub suggestion: Suggestion,
}

impl ExtractionResult {
    /// The first `max_chars` characters of the text.
    pub fn preview(&self, max_chars: usize) -> &str {
        match self.raw_text.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.raw_text[..idx],
            None => &self.raw_text,
        }
    }
}
