use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use crate::error::ScanError;
use crate::nlp::SentimentModel;

const LEXICON_JSON: &str = include_str!("../../../../data/sentiment-lexicon.json");

/// Factor applied to a sentiment word preceded by a negation.
const NEGATION_FACTOR: f64 = -0.5;

/// On-disk lexicon format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconDef {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub negations: Vec<String>,
    /// Word -> multiplier applied to the next sentiment word.
    #[serde(default)]
    pub intensifiers: BTreeMap<String, f64>,
    /// Word -> polarity in [-1.0, 1.0].
    pub words: BTreeMap<String, f64>,
}

/// Averages word polarities from a fixed lexicon.
///
/// Scoring runs clause by clause (split on sentence punctuation, commas
/// and newlines):
/// - an intensifier scales the next sentiment word;
/// - a negation ("not", "never", any "n't" contraction) flips it and halves it.
///
/// The document score is the mean over every sentiment word found, or 0.0
/// when there are none.
#[derive(Debug, Clone)]
pub struct LexiconSentiment {
    words: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl LexiconSentiment {
    /// The bundled lexicon.
    pub fn builtin() -> Result<Self, ScanError> {
        Self::from_json(LEXICON_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, ScanError> {
        let def: LexiconDef = serde_json::from_str(json)?;
        Self::from_def(def)
    }

    pub fn from_def(def: LexiconDef) -> Result<Self, ScanError> {
        if def.words.is_empty() {
            return Err(ScanError::LexiconInvalid("words must not be empty".into()));
        }

        for (word, polarity) in &def.words {
            if !polarity.is_finite() || !(-1.0..=1.0).contains(polarity) {
                return Err(ScanError::LexiconInvalid(format!(
                    "polarity of '{}' must be within [-1, 1], got {}",
                    word, polarity
                )));
            }
        }

        for (word, factor) in &def.intensifiers {
            if !factor.is_finite() || *factor <= 0.0 {
                return Err(ScanError::LexiconInvalid(format!(
                    "intensifier '{}' must be a positive factor, got {}",
                    word, factor
                )));
            }
        }

        Ok(LexiconSentiment {
            words: lowercase_keys(def.words),
            intensifiers: lowercase_keys(def.intensifiers),
            negations: def.negations.iter().map(|n| n.to_lowercase()).collect(),
        })
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.ends_with("n't") || word.ends_with("n’t")
    }
}

impl SentimentModel for LexiconSentiment {
    fn polarity(&self, text: &str) -> f64 {
        let mut scores = Vec::new();

        for clause in text.split(|c: char| matches!(c, '.' | '!' | '?' | ';' | ':' | ',' | '\n')) {
            let mut negated = false;
            let mut boost = 1.0;

            for raw in clause.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '’')) {
                let word = raw.trim_matches(|c| c == '\'' || c == '’').to_lowercase();
                if word.is_empty() {
                    continue;
                }

                if self.is_negation(&word) {
                    negated = true;
                } else if let Some(factor) = self.intensifiers.get(&word) {
                    boost *= factor;
                } else if let Some(polarity) = self.words.get(&word) {
                    let mut score = polarity * boost;
                    if negated {
                        score *= NEGATION_FACTOR;
                    }
                    scores.push(score.clamp(-1.0, 1.0));
                    negated = false;
                    boost = 1.0;
                } else {
                    // intensifiers only reach the adjacent word
                    boost = 1.0;
                }
            }
        }

        if scores.is_empty() {
            return 0.0;
        }
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        mean.clamp(-1.0, 1.0)
    }

    fn model_name(&self) -> &str {
        "lexicon"
    }
}

fn lowercase_keys(map: BTreeMap<String, f64>) -> HashMap<String, f64> {
    map.into_iter().map(|(k, v)| (k.to_lowercase(), v)).collect()
}

/// Coarse reading of a score for display: the sign only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Neutral,
    Negative,
}

impl Tone {
    pub fn of(score: f64) -> Tone {
        if score > 0.0 {
            Tone::Positive
        } else if score < 0.0 {
            Tone::Negative
        } else {
            Tone::Neutral
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tone::Positive => write!(f, "Positive"),
            Tone::Neutral => write!(f, "Neutral"),
            Tone::Negative => write!(f, "Negative"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> f64 {
        LexiconSentiment::builtin().unwrap().polarity(text)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_text_is_neutral() {
        assert_eq!(score(""), 0.0);
        assert_eq!(score("   \n\n"), 0.0);
    }

    #[test]
    fn text_without_lexicon_words_is_neutral() {
        assert_eq!(score("Python developer, 4 years experience."), 0.0);
    }

    #[test]
    fn single_word_polarity() {
        assert!(close(score("Excellent"), 1.0));
        assert!(close(score("a good engineer"), 0.7));
    }

    #[test]
    fn intensifier_scales_next_word() {
        assert!(close(score("very good"), 0.91));
        // too far away to apply
        assert!(close(score("very much good"), 0.7));
    }

    #[test]
    fn negation_flips_and_halves() {
        assert!(close(score("not good"), -0.35));
        assert!(close(score("I don't think it was bad"), 0.35));
    }

    #[test]
    fn negation_ends_at_clause_boundary() {
        assert!(close(score("not finished, good"), 0.7));
    }

    #[test]
    fn mean_of_all_sentiment_words() {
        assert!(close(score("good results. bad timing."), 0.0));
        assert!(close(score("excellent and successful"), 0.875));
    }

    #[test]
    fn score_stays_in_range() {
        assert!(close(score("extremely excellent"), 1.0));
        for text in [
            "worst worst terrible",
            "incredibly extremely very highly perfect",
            "not not not bad",
        ] {
            let s = score(text);
            assert!((-1.0..=1.0).contains(&s), "{text}: {s}");
        }
    }

    #[test]
    fn deterministic() {
        let text = "Highly motivated and successful engineer, not lazy.";
        assert_eq!(score(text), score(text));
    }

    #[test]
    fn invalid_polarity_rejected() {
        let json = r#"{ "name": "x", "version": "1", "words": { "great": 2.0 } }"#;
        assert!(matches!(
            LexiconSentiment::from_json(json),
            Err(ScanError::LexiconInvalid(_))
        ));
    }

    #[test]
    fn non_positive_intensifier_rejected() {
        let json = r#"{ "name": "x", "version": "1", "intensifiers": { "very": 0 }, "words": { "good": 0.5 } }"#;
        assert!(LexiconSentiment::from_json(json).is_err());
    }

    #[test]
    fn tone_from_sign() {
        assert_eq!(Tone::of(0.42), Tone::Positive);
        assert_eq!(Tone::of(-0.01), Tone::Negative);
        assert_eq!(Tone::of(0.0), Tone::Neutral);
    }
}
