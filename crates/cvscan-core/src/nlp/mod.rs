#[cfg(feature = "bert")]
pub mod bert;
pub mod entities;
pub mod sentiment;

#[cfg(feature = "bert")]
pub use bert::BertRecognizer;
pub use entities::HeuristicRecognizer;
pub use sentiment::{LexiconSentiment, Tone};

use crate::model::Entity;

/// Trait for named-entity recognition backends.
///
/// Implementations are built once and shared read-only across scans.
pub trait EntityRecognizer: Send + Sync {
    /// Labelled spans found in `text`.
    fn recognize(&self, text: &str) -> Vec<Entity>;

    /// Name of this recognizer (for diagnostics).
    fn model_name(&self) -> &str {
        "custom"
    }
}

/// The best recognizer this build offers.
///
/// With the `bert` feature this is [`BertRecognizer`], falling back to
/// [`HeuristicRecognizer`] when the model cannot be loaded (offline, no
/// cached weights).
pub fn default_recognizer() -> Box<dyn EntityRecognizer> {
    #[cfg(feature = "bert")]
    match BertRecognizer::new() {
        Ok(recognizer) => return Box::new(recognizer),
        Err(e) => tracing::warn!(error = %e, "using heuristic entity recognizer"),
    }
    Box::new(HeuristicRecognizer::new())
}

/// Trait for whole-document sentiment models.
pub trait SentimentModel: Send + Sync {
    /// Polarity of `text` taken as one unit, in [-1.0, 1.0].
    /// Must be deterministic; empty text scores 0.0.
    fn polarity(&self, text: &str) -> f64;

    fn model_name(&self) -> &str {
        "custom"
    }
}
