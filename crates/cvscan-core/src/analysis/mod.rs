pub mod engine;
pub mod outcome;
pub mod suggestion;

pub use engine::Engine;
pub use outcome::ExtractionResult;
pub use suggestion::{Suggestion, SuggestionCategory};
