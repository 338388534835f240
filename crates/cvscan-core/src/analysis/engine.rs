use tracing::debug;

use crate::analysis::outcome::ExtractionResult;
use crate::analysis::suggestion::Suggestion;
use crate::error::ScanError;
use crate::fields::{estimate_experience, extract_contact_info, match_skills};
use crate::nlp::{default_recognizer, EntityRecognizer, LexiconSentiment, SentimentModel};
use crate::vocab::builtin::default_vocabulary;
use crate::vocab::schema::VocabularyDef;

/// The read-only models every scan borrows.
///
/// Build one per process and pass it by reference to each scan.
pub struct Engine {
    recognizer: Box<dyn EntityRecognizer>,
    sentiment: Box<dyn SentimentModel>,
    vocabulary: VocabularyDef,
}

impl Engine {
    pub fn new(
        recognizer: Box<dyn EntityRecognizer>,
        sentiment: Box<dyn SentimentModel>,
        vocabulary: VocabularyDef,
    ) -> Self {
        Engine {
            recognizer,
            sentiment,
            vocabulary,
        }
    }

    /// Default recognizer, bundled lexicon and the default vocabulary.
    pub fn with_defaults() -> Result<Self, ScanError> {
        Ok(Engine::new(
            default_recognizer(),
            Box::new(LexiconSentiment::builtin()?),
            default_vocabulary()?,
        ))
    }

    /// Replace the skill vocabulary.
    pub fn with_vocabulary(mut self, vocabulary: VocabularyDef) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    pub fn vocabulary(&self) -> &VocabularyDef {
        &self.vocabulary
    }

    /// Run every extraction pass over `raw_text`.
    ///
    /// The contact, skill, experience and sentiment passes are independent;
    /// the suggestion only looks at the sentiment score.
    pub fn analyze(&self, raw_text: String) -> ExtractionResult {
        let contact = extract_contact_info(&raw_text, self.recognizer.as_ref());
        let skills = match_skills(&raw_text, &self.vocabulary);
        let experience_years = estimate_experience(&raw_text);
        let sentiment_score = bounded(self.sentiment.polarity(&raw_text));
        let suggestion = Suggestion::for_score(sentiment_score);

        debug!(
            recognizer = self.recognizer.model_name(),
            sentiment_model = self.sentiment.model_name(),
            vocabulary = %self.vocabulary.name,
            names = contact.names.len(),
            emails = contact.emails.len(),
            phones = contact.phones.len(),
            skills = skills.len(),
            ?experience_years,
            sentiment_score,
            "extraction passes finished"
        );

        ExtractionResult {
            raw_text,
            names: contact.names,
            emails: contact.emails,
            phones: contact.phones,
            skills,
            experience_years,
            sentiment_score,
            suggestion,
        }
    }
}

/// Keep third-party model output inside [-1, 1].
fn bounded(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::suggestion::SuggestionCategory;
    use crate::model::Entity;

    struct NoEntities;

    impl EntityRecognizer for NoEntities {
        fn recognize(&self, _text: &str) -> Vec<Entity> {
            Vec::new()
        }
    }

    struct FixedScore(f64);

    impl SentimentModel for FixedScore {
        fn polarity(&self, _text: &str) -> f64 {
            self.0
        }
    }

    fn engine_with_score(score: f64) -> Engine {
        Engine::new(
            Box::new(NoEntities),
            Box::new(FixedScore(score)),
            default_vocabulary().unwrap(),
        )
    }

    #[test]
    fn empty_text_yields_empty_fields() {
        let result = Engine::with_defaults().unwrap().analyze(String::new());
        assert_eq!(result.raw_text, "");
        assert!(result.names.is_empty());
        assert!(result.emails.is_empty());
        assert!(result.phones.is_empty());
        assert!(result.skills.is_empty());
        assert_eq!(result.experience_years, None);
        assert_eq!(result.sentiment_score, 0.0);
        assert_eq!(result.suggestion.category, SuggestionCategory::Negative);
    }

    #[test]
    fn all_passes_populate_result() {
        let text = "Jane Doe\njane@doe.dev | +1 555-123-4567\n\
                    Excellent Python and SQL engineer with 6 years of experience."
            .to_string();
        let result = Engine::with_defaults().unwrap().analyze(text);
        assert_eq!(result.names, vec!["Jane Doe"]);
        assert_eq!(result.emails, vec!["jane@doe.dev"]);
        assert_eq!(result.phones, vec!["+1 555-123-4567"]);
        assert_eq!(
            result.skills.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["Python", "SQL"]
        );
        assert_eq!(result.experience_years, Some(6));
        assert_eq!(result.sentiment_score, 1.0);
        assert_eq!(result.suggestion.category, SuggestionCategory::Positive);
    }

    #[test]
    fn name_heading_the_resume_is_found() {
        let text = "Lakshita Verma\nData Scientist\nlakshita@mail.com".to_string();
        let result = Engine::with_defaults().unwrap().analyze(text);
        assert_eq!(result.names, vec!["Lakshita Verma"]);
        assert_eq!(result.emails, vec!["lakshita@mail.com"]);
    }

    #[test]
    fn out_of_range_model_scores_are_bounded() {
        assert_eq!(engine_with_score(3.0).analyze("x".into()).sentiment_score, 1.0);
        assert_eq!(engine_with_score(-7.5).analyze("x".into()).sentiment_score, -1.0);
        assert_eq!(engine_with_score(f64::NAN).analyze("x".into()).sentiment_score, 0.0);
    }

    #[test]
    fn suggestion_follows_score() {
        let result = engine_with_score(0.1).analyze("anything".into());
        assert_eq!(result.suggestion.category, SuggestionCategory::Neutral);
    }

    #[test]
    fn custom_vocabulary_replaces_default() {
        let vocabulary = VocabularyDef {
            name: "Infra".into(),
            description: None,
            version: "1".into(),
            terms: vec!["Kubernetes".into()],
        };
        let engine = engine_with_score(0.0).with_vocabulary(vocabulary);
        let result = engine.analyze("Python on kubernetes".into());
        assert_eq!(result.skills.into_iter().collect::<Vec<_>>(), vec!["Kubernetes"]);
        assert_eq!(engine.vocabulary().name, "Infra");
    }

    #[test]
    fn preview_cuts_on_char_boundary() {
        let result = engine_with_score(0.0).analyze("Résumé of José".into());
        assert_eq!(result.preview(3), "Rés");
        assert_eq!(result.preview(500), "Résumé of José");
        assert_eq!(result.preview(0), "");
    }
}
