use std::collections::BTreeSet;

use crate::vocab::schema::VocabularyDef;

/// Vocabulary terms contained anywhere in `text`, ignoring case.
///
/// This is plain substring search: "Java" is found inside "JavaScript".
pub fn match_skills(text: &str, vocabulary: &VocabularyDef) -> BTreeSet<String> {
    let haystack = text.to_lowercase();
    vocabulary
        .terms
        .iter()
        .filter(|term| haystack.contains(&term.to_lowercase()))
        .cloned()
        .collect()
}
