//! # Token-classification seam
//!
//! [`TokenClassifier`] is the boundary where a real transformer pipeline
//! (BERTurk, DistilBERT, a fine-tuned checkpoint) plugs into the facade.
//! The trait mirrors the output contract of an aggregated token-classification
//! pipeline: a list of sub-word spans, each with a numeric label id, a label
//! string and a score.
//!
//! [`HeuristicClassifier`] is the bundled implementation: it segments the
//! sentence into sub-word chunks and emits deterministic labels. It stands in
//! for model inference while keeping the downstream contract — the alignment
//! in [`crate::finetuned`] and the success-gate in the transformer backend —
//! fully exercised.

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::TaggerError;

/// One aggregated span of classifier output.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedSpan {
    /// Surface text of the span (a sub-word chunk of the input).
    pub text: String,
    /// Numeric label id, resolved through the model's id→tag table.
    pub label_id: usize,
    /// Raw label string, used when no id→tag entry exists.
    pub label: String,
    pub score: f64,
}

/// A token-classification pipeline over a whole sentence.
pub trait TokenClassifier {
    /// Classifies the sentence into labeled sub-word spans, in reading order.
    fn classify(&self, sentence: &str) -> Result<Vec<ClassifiedSpan>, TaggerError>;

    /// Model identifier (ex: `"dbmdz/bert-base-turkish-cased"`).
    fn name(&self) -> &str;
}

/// Generic labels emitted by the heuristic stand-in, in id order.
const GENERIC_LABELS: &[&str] = &["B-NOUN", "I-NOUN", "B-VERB", "I-VERB", "B-ADJ", "O"];

/// Maximum graphemes per emitted sub-word chunk.
const CHUNK_LEN: usize = 4;

/// Deterministic sub-word segmenter with pipeline-shaped output.
pub struct HeuristicClassifier {
    model_name: String,
}

impl HeuristicClassifier {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
        }
    }
}

impl TokenClassifier for HeuristicClassifier {
    fn classify(&self, sentence: &str) -> Result<Vec<ClassifiedSpan>, TaggerError> {
        let mut spans = Vec::new();
        for word in sentence.unicode_words() {
            let graphemes: Vec<&str> = word.graphemes(true).collect();
            for (chunk_index, chunk) in graphemes.chunks(CHUNK_LEN).enumerate() {
                let text: String = chunk.concat();
                // First chunk of a word gets a B- label, continuations I-/O.
                let label_id = if chunk_index == 0 {
                    text.len() % 2
                } else {
                    2 + text.len() % (GENERIC_LABELS.len() - 2)
                };
                spans.push(ClassifiedSpan {
                    text,
                    label_id,
                    label: GENERIC_LABELS[label_id].to_string(),
                    score: 0.5 + 0.5 / (1.0 + chunk_index as f64),
                });
            }
        }
        Ok(spans)
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_cover_words_in_order() {
        let classifier = HeuristicClassifier::new("test-model");
        let spans = classifier.classify("Ali okula gitti").expect("classify");
        assert!(!spans.is_empty());
        // Concatenated span texts reproduce the words in order.
        let joined: String = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, "Aliokulagitti");
    }

    #[test]
    fn deterministic_output() {
        let classifier = HeuristicClassifier::new("test-model");
        let a = classifier.classify("bahçede oynuyorlar").expect("classify");
        let b = classifier.classify("bahçede oynuyorlar").expect("classify");
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.text, y.text);
            assert_eq!(x.label_id, y.label_id);
        }
    }

    #[test]
    fn label_ids_stay_in_range() {
        let classifier = HeuristicClassifier::new("test-model");
        for span in classifier.classify("Türkiye güzel bir ülkedir").expect("classify") {
            assert!(span.label_id < GENERIC_LABELS.len());
            assert_eq!(span.label, GENERIC_LABELS[span.label_id]);
        }
    }
}
