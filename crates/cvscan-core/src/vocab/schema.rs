use serde::{Deserialize, Serialize};

/// A skill vocabulary matched against resume text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Terms in their canonical spelling; matching ignores case.
    pub terms: Vec<String>,
}
