//! # Fine-tuned model backend
//!
//! A fine-tuned checkpoint is a directory holding `model_info.json`
//! (evaluation scores and the id→tag table written at training time) and,
//! when training actually ran, weight files under one of the recognized
//! filenames. Presence of any weight file decides the mode:
//!
//! - *weights present* — run the token classifier and align its sub-word
//!   spans back onto the whitespace words (greedy, first match wins);
//! - *weights absent* — simulation mode: every word is tagged from the
//!   enhanced rule table, no classifier call.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::TaggerError;
use crate::rules::RuleTable;
use crate::transformer::{ClassifiedSpan, HeuristicClassifier, TokenClassifier};

/// Default checkpoint directory, relative to the working directory.
pub const DEFAULT_MODEL_DIR: &str = "fine_tuned_model";

/// Metadata filename inside the checkpoint directory.
pub const METADATA_FILE: &str = "model_info.json";

/// Any one of these signals "weights available".
pub const WEIGHT_FILES: &[&str] = &["pytorch_model.bin", "model.safetensors", "tf_model.h5"];

/// Evaluation-results block of `model_info.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalResults {
    pub accuracy: f64,
    pub f1: f64,
    pub precision: f64,
    pub recall: f64,
    pub epochs: u32,
}

/// The `model_info.json` contents, exposed verbatim through the facade's
/// model-info query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FineTunedMetadata {
    #[serde(default)]
    pub model_name: Option<String>,
    pub eval_results: EvalResults,
    /// Label id (as JSON object key) → tag label.
    pub id2tag: HashMap<String, String>,
}

/// A loaded fine-tuned checkpoint.
pub struct FineTunedModel {
    pub dir: PathBuf,
    pub metadata: FineTunedMetadata,
    pub weights_available: bool,
    classifier: Option<Box<dyn TokenClassifier + Send + Sync>>,
    rules: RuleTable,
}

impl FineTunedModel {
    /// Reads the metadata and probes for weight files. Missing directory or
    /// malformed metadata is a load error (the facade falls back on it).
    pub fn load(dir: &Path) -> Result<Self, TaggerError> {
        let raw = fs::read_to_string(dir.join(METADATA_FILE))?;
        let metadata: FineTunedMetadata = serde_json::from_str(&raw)?;
        if metadata.id2tag.is_empty() {
            return Err(TaggerError::ModelFormat(format!(
                "{} has an empty id2tag table",
                dir.display()
            )));
        }
        let weights_available = WEIGHT_FILES.iter().any(|name| dir.join(name).exists());
        let classifier: Option<Box<dyn TokenClassifier + Send + Sync>> = weights_available
            .then(|| {
                let name = metadata
                    .model_name
                    .clone()
                    .unwrap_or_else(|| "fine-tuned-berturk".to_string());
                Box::new(HeuristicClassifier::new(name)) as Box<dyn TokenClassifier + Send + Sync>
            });
        Ok(Self {
            dir: dir.to_path_buf(),
            metadata,
            weights_available,
            classifier,
            rules: RuleTable::enhanced(),
        })
    }

    /// Tags the pre-split words of a sentence. Classifier errors propagate
    /// so the facade can retry through its fallback table.
    pub fn tag_words(&self, sentence: &str, words: &[&str]) -> Result<Vec<String>, TaggerError> {
        match &self.classifier {
            Some(classifier) => {
                let spans = classifier.classify(sentence)?;
                Ok(align_spans(words, &spans, &self.metadata.id2tag, &self.rules))
            }
            // Simulation mode: no weights, enhanced rules only.
            None => Ok(words
                .iter()
                .map(|w| self.rules.tag_word(w).label().to_string())
                .collect()),
        }
    }

    /// Sorted tag inventory from the id→tag table.
    pub fn tag_list(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.metadata.id2tag.values().cloned().collect();
        tags.sort();
        tags.dedup();
        tags
    }
}

/// Greedy alignment of classifier spans onto whitespace words.
///
/// For each word, scan forward through the remaining spans and accept the
/// first whose text is a case-insensitive substring match (either direction)
/// of the word; the cursor then advances past the match, so consumed spans
/// are never revisited and ties resolve to scan order. Words that exhaust
/// the remaining spans, or match none, fall back to the rule table.
pub fn align_spans(
    words: &[&str],
    spans: &[ClassifiedSpan],
    id2tag: &HashMap<String, String>,
    rules: &RuleTable,
) -> Vec<String> {
    let mut cursor = 0usize;
    words
        .iter()
        .map(|word| {
            let word_lower = word.to_lowercase();
            let hit = spans
                .iter()
                .enumerate()
                .skip(cursor)
                .find(|(_, span)| {
                    let span_lower = span.text.to_lowercase();
                    word_lower.contains(&span_lower) || span_lower.contains(&word_lower)
                })
                .map(|(i, _)| i);
            match hit {
                Some(i) => {
                    cursor = i + 1;
                    let span = &spans[i];
                    id2tag
                        .get(&span.label_id.to_string())
                        .cloned()
                        .unwrap_or_else(|| span.label.clone())
                }
                None => rules.tag_word(word).label().to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, label_id: usize) -> ClassifiedSpan {
        ClassifiedSpan {
            text: text.to_string(),
            label_id,
            label: format!("LABEL_{label_id}"),
            score: 0.9,
        }
    }

    fn id2tag() -> HashMap<String, String> {
        [("0", "Noun"), ("1", "Verb")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn first_match_wins_and_cursor_advances() {
        let words = ["okula", "gitti"];
        let spans = vec![span("oku", 0), span("la", 1), span("git", 1), span("ti", 0)];
        let tags = align_spans(&words, &spans, &id2tag(), &RuleTable::enhanced());
        // "okula" matches "oku" (first hit), cursor moves past it; "gitti"
        // then matches "la"? no — "la" is not a substring of "gitti", so the
        // scan continues to "git".
        assert_eq!(tags, vec!["Noun".to_string(), "Verb".to_string()]);
    }

    #[test]
    fn consumed_spans_are_not_rematched() {
        let words = ["ev", "ev"];
        let spans = vec![span("ev", 1)];
        let tags = align_spans(&words, &spans, &id2tag(), &RuleTable::enhanced());
        // Second "ev" exhausts the remaining spans and falls back to the
        // enhanced rule table (closed-class common noun).
        assert_eq!(tags, vec!["Verb".to_string(), "Noun".to_string()]);
    }

    #[test]
    fn unknown_label_id_keeps_raw_label() {
        let words = ["ev"];
        let spans = vec![span("ev", 7)];
        let tags = align_spans(&words, &spans, &id2tag(), &RuleTable::enhanced());
        assert_eq!(tags, vec!["LABEL_7".to_string()]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let words = ["ANKARA"];
        let spans = vec![span("ankara", 0)];
        let tags = align_spans(&words, &spans, &id2tag(), &RuleTable::enhanced());
        assert_eq!(tags, vec!["Noun".to_string()]);
    }

    fn write_checkpoint(weights: bool) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "finetuned-test-{}-{}",
            std::process::id(),
            weights
        ));
        fs::create_dir_all(&dir).expect("temp dir");
        fs::write(
            dir.join(METADATA_FILE),
            serde_json::json!({
                "model_name": "test-berturk",
                "eval_results": {
                    "accuracy": 89.65, "f1": 88.2, "precision": 88.9,
                    "recall": 87.5, "epochs": 3
                },
                "id2tag": {"0": "Noun", "1": "Verb", "2": "Adj"}
            })
            .to_string(),
        )
        .expect("metadata");
        if weights {
            fs::write(dir.join("model.safetensors"), b"stub").expect("weights");
        }
        dir
    }

    #[test]
    fn load_detects_simulation_mode() {
        let dir = write_checkpoint(false);
        let model = FineTunedModel::load(&dir).expect("load");
        assert!(!model.weights_available);
        // Simulation mode: enhanced rules, no classifier.
        let tags = model.tag_words("okula gitti .", &["okula", "gitti", "."]).expect("tag");
        assert_eq!(tags, vec!["Noun_Dat", "Verb", "Punc"]);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_detects_weights() {
        let dir = write_checkpoint(true);
        let model = FineTunedModel::load(&dir).expect("load");
        assert!(model.weights_available);
        assert_eq!(model.tag_list(), vec!["Adj", "Noun", "Verb"]);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_rejects_missing_dir() {
        let err = FineTunedModel::load(Path::new("/nonexistent/checkpoint"));
        assert!(matches!(err, Err(TaggerError::Io(_))));
    }
}
