use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::model::EntityLabel;
use crate::nlp::EntityRecognizer;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w\.-]+@[\w\.-]+\.\w+").expect("valid email pattern"));

// Loose on purpose: also hits number ranges and partial dates.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\d[\d -]{8,12}\d").expect("valid phone pattern"));

/// Contact details found in a document. The three lists are independent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub names: Vec<String>,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
}

pub fn extract_contact_info(text: &str, recognizer: &dyn EntityRecognizer) -> ContactInfo {
    ContactInfo {
        names: extract_names(text, recognizer),
        emails: extract_emails(text),
        phones: extract_phones(text),
    }
}

/// All email-like tokens, left to right, duplicates kept.
pub fn extract_emails(text: &str) -> Vec<String> {
    EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// All phone-like tokens, left to right, duplicates kept.
pub fn extract_phones(text: &str) -> Vec<String> {
    PHONE_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Every span the recognizer tags as a person, in order of appearance.
pub fn extract_names(text: &str, recognizer: &dyn EntityRecognizer) -> Vec<String> {
    let mut entities = recognizer.recognize(text);
    entities.sort_by_key(|e| e.start);
    entities
        .into_iter()
        .filter(|e| e.label == EntityLabel::Person)
        .map(|e| e.text)
        .collect()
}
