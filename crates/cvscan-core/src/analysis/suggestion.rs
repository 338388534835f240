use serde::{Deserialize, Serialize};

const POSITIVE_MESSAGE: &str =
    "Your resume has a positive tone! It looks professional and well-structured.";
const NEUTRAL_MESSAGE: &str = "Your resume is neutral. Consider adding more action words and achievements to make it more impactful.";
const NEGATIVE_MESSAGE: &str = "Your resume has a negative tone. Try rephrasing sentences to be more confident and results-oriented.";

/// Score above which the tone counts as positive.
pub const POSITIVE_THRESHOLD: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionCategory {
    Positive,
    Neutral,
    Negative,
}

impl SuggestionCategory {
    /// Three-way threshold on the sentiment score. Zero (and NaN) fall
    /// into `Negative`.
    pub fn for_score(score: f64) -> SuggestionCategory {
        if score > POSITIVE_THRESHOLD {
            SuggestionCategory::Positive
        } else if score > 0.0 {
            SuggestionCategory::Neutral
        } else {
            SuggestionCategory::Negative
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            SuggestionCategory::Positive => POSITIVE_MESSAGE,
            SuggestionCategory::Neutral => NEUTRAL_MESSAGE,
            SuggestionCategory::Negative => NEGATIVE_MESSAGE,
        }
    }
}

/// Improvement advice derived from the sentiment score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: SuggestionCategory,
    pub message: String,
}

impl Suggestion {
    pub fn for_score(score: f64) -> Suggestion {
        let category = SuggestionCategory::for_score(score);
        Suggestion {
            category,
            message: category.message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        assert_eq!(SuggestionCategory::for_score(0.5), SuggestionCategory::Positive);
        assert_eq!(SuggestionCategory::for_score(0.1), SuggestionCategory::Neutral);
        assert_eq!(SuggestionCategory::for_score(-0.3), SuggestionCategory::Negative);
    }

    #[test]
    fn boundaries() {
        assert_eq!(SuggestionCategory::for_score(0.0), SuggestionCategory::Negative);
        assert_eq!(SuggestionCategory::for_score(0.2), SuggestionCategory::Neutral);
        assert_eq!(SuggestionCategory::for_score(0.2001), SuggestionCategory::Positive);
        assert_eq!(SuggestionCategory::for_score(f64::NAN), SuggestionCategory::Negative);
    }

    #[test]
    fn messages() {
        let neutral = Suggestion::for_score(0.1);
        assert!(neutral.message.contains("action words"));
        let negative = Suggestion::for_score(0.0);
        assert!(negative.message.contains("confident"));
        assert!(Suggestion::for_score(0.9).message.contains("positive"));
    }

    #[test]
    fn serializes_category_in_snake_case() {
        let json = serde_json::to_value(Suggestion::for_score(0.5)).unwrap();
        assert_eq!(json["category"], "positive");
    }
}
