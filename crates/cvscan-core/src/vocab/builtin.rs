use crate::error::ScanError;
use crate::vocab::schema::VocabularyDef;

const DEFAULT_SKILLS_JSON: &str = include_str!("../../../../data/skills.json");

/// The built-in twelve-term data science vocabulary.
pub fn default_vocabulary() -> Result<VocabularyDef, ScanError> {
    let vocabulary: VocabularyDef = serde_json::from_str(DEFAULT_SKILLS_JSON)?;
    Ok(vocabulary)
}
