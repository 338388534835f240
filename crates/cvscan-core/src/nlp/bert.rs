//! Transformer NER through rust-bert (BERT fine-tuned on CoNLL-03).
//!
//! Needs libtorch at build time and downloads the model weights on first
//! use, so it sits behind the `bert` cargo feature.

use std::sync::Mutex;

use rust_bert::pipelines::ner::NERModel;
use rust_bert::pipelines::token_classification::TokenClassificationConfig;
use tracing::debug;

use crate::error::ScanError;
use crate::model::{Entity, EntityLabel};
use crate::nlp::EntityRecognizer;

/// Lines sent to the model per forward pass.
const BATCH_LINES: usize = 32;

pub struct BertRecognizer {
    // tch tensors are not Sync
    model: Mutex<NERModel>,
}

impl BertRecognizer {
    /// Load the default English NER model.
    pub fn new() -> Result<Self, ScanError> {
        let model = NERModel::new(TokenClassificationConfig::default())
            .map_err(|e| ScanError::ModelLoad(e.to_string()))?;
        Ok(BertRecognizer {
            model: Mutex::new(model),
        })
    }
}

impl EntityRecognizer for BertRecognizer {
    fn recognize(&self, text: &str) -> Vec<Entity> {
        // One line per input keeps each sequence well under the 512 token limit.
        let lines: Vec<(usize, &str)> = line_spans(text)
            .filter(|(_, line)| !line.trim().is_empty())
            .collect();
        if lines.is_empty() {
            return Vec::new();
        }

        let model = self.model.lock().unwrap_or_else(|p| p.into_inner());
        let mut entities = Vec::new();

        for batch in lines.chunks(BATCH_LINES) {
            let inputs: Vec<&str> = batch.iter().map(|(_, line)| *line).collect();
            let predictions = model.predict_full_entities(&inputs);

            for ((line_start, line), found) in batch.iter().zip(predictions) {
                entities.extend(found.into_iter().filter_map(|e| {
                    to_entity(line, *line_start, &e.label, e.offset.begin, e.offset.end)
                }));
            }
        }

        debug!(lines = lines.len(), entities = entities.len(), "bert ner finished");
        entities
    }

    fn model_name(&self) -> &str {
        "bert-ner"
    }
}

/// Byte offset and text of every line.
fn line_spans(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut start = 0;
    text.split('\n').map(move |line| {
        let span = (start, line);
        start += line.len() + 1;
        span
    })
}

/// Map a model span (character offsets within `line`) to a document entity.
///
/// Only PER and ORG are kept; LOC and MISC have no counterpart.
fn to_entity(line: &str, line_start: usize, label: &str, begin: u32, end: u32) -> Option<Entity> {
    let label = match label.trim_start_matches("B-").trim_start_matches("I-") {
        "PER" => EntityLabel::Person,
        "ORG" => EntityLabel::Organization,
        _ => return None,
    };

    let start = char_to_byte(line, begin as usize)?;
    let end = char_to_byte(line, end as usize)?;
    let span = line.get(start..end)?.trim();
    if span.is_empty() {
        return None;
    }
    let lead = line[start..end].len() - line[start..end].trim_start().len();

    Some(Entity {
        text: span.to_string(),
        label,
        start: line_start + start + lead,
        end: line_start + start + lead + span.len(),
    })
}

fn char_to_byte(line: &str, chars: usize) -> Option<usize> {
    line.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(line.len()))
        .nth(chars)
}
