//! # Tagger facade
//!
//! [`PosTagger`] selects one backend at construction, delegates tagging to
//! it, and degrades to the rule table whenever anything goes wrong:
//!
//! - a backend that fails to *load* is replaced by the rule-based backend
//!   (logged, selector overwritten) — construction is total;
//! - a backend that fails to *tag* triggers a rule-based retry of the
//!   sentence (logged) — `tag` never fails for any `&str`.
//!
//! Loading follows `Unloaded → Loading(selector) → Loaded(selector |
//! rule-based)`; a backend that failed at construction is never retried on
//! the same instance.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::brill::{BrillTagger, DEFAULT_MODEL_FILE};
use crate::error::TaggerError;
use crate::finetuned::{FineTunedModel, DEFAULT_MODEL_DIR};
use crate::rules::RuleTable;
use crate::transformer::{HeuristicClassifier, TokenClassifier};

/// Backend selector. Wire names (`legacy`, `berturk`, ...) match the values
/// accepted by the HTTP API and the CLIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    /// Serialized Brill-style tagger loaded from a JSON artifact.
    Legacy,
    /// Turkish BERT token-classification pipeline.
    Berturk,
    /// Multilingual DistilBERT token-classification pipeline.
    Distilbert,
    /// Fine-tuned checkpoint directory (metadata + optional weights).
    FineTuned,
    /// The deterministic rule table, also the universal fallback.
    RuleBased,
}

impl ModelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::Legacy => "legacy",
            ModelType::Berturk => "berturk",
            ModelType::Distilbert => "distilbert",
            ModelType::FineTuned => "fine_tuned",
            ModelType::RuleBased => "rule_based",
        }
    }

    pub fn all() -> [ModelType; 5] {
        [
            ModelType::Legacy,
            ModelType::Berturk,
            ModelType::Distilbert,
            ModelType::FineTuned,
            ModelType::RuleBased,
        ]
    }
}

impl std::fmt::Display for ModelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ModelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelType::all()
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown model type: {s}"))
    }
}

/// Construction-time configuration for [`PosTagger`].
#[derive(Debug, Clone)]
pub struct TaggerConfig {
    pub model_type: ModelType,
    /// Path of the serialized legacy artifact (default `my_tagger.json`).
    pub legacy_model_path: Option<PathBuf>,
    /// Fine-tuned checkpoint directory (default `fine_tuned_model`).
    pub fine_tuned_dir: Option<PathBuf>,
}

impl TaggerConfig {
    pub fn new(model_type: ModelType) -> Self {
        Self {
            model_type,
            legacy_model_path: None,
            fine_tuned_dir: None,
        }
    }
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self::new(ModelType::Berturk)
    }
}

/// One tagged word: original surface form plus the tag label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedWord {
    pub word: String,
    pub tag: String,
}

impl TaggedWord {
    fn new(word: &str, tag: impl Into<String>) -> Self {
        Self {
            word: word.to_string(),
            tag: tag.into(),
        }
    }
}

/// Read-only description of the loaded backend.
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub model_type: ModelType,
    /// Configured artifact path, or `"default"`.
    pub model_path: String,
    pub supports_batch: bool,
    pub language: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub f1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recall: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epochs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// The loaded backend. Variants own whatever state their load produced.
enum Backend {
    Legacy(BrillTagger),
    Transformer(Box<dyn TokenClassifier + Send + Sync>),
    FineTuned(FineTunedModel),
    RuleBased,
}

/// The tagger facade.
pub struct PosTagger {
    model_type: ModelType,
    backend: Backend,
    /// Basic rule table, the universal fallback for mid-sentence failures.
    fallback: RuleTable,
    config: TaggerConfig,
}

impl PosTagger {
    /// Constructs a tagger for the requested backend. Never fails: a backend
    /// that cannot be loaded is logged and replaced by the rule-based one,
    /// and the selector reported by [`model_type`](Self::model_type) and
    /// [`model_info`](Self::model_info) reflects what actually loaded.
    pub fn new(config: TaggerConfig) -> Self {
        let (model_type, backend) = match Self::load_backend(&config) {
            Ok(backend) => (config.model_type, backend),
            Err(e) => {
                warn!(
                    requested = %config.model_type,
                    error = %e,
                    "backend load failed, falling back to rule-based tagger"
                );
                (ModelType::RuleBased, Backend::RuleBased)
            }
        };
        Self {
            model_type,
            backend,
            fallback: RuleTable::basic(),
            config,
        }
    }

    fn load_backend(config: &TaggerConfig) -> Result<Backend, TaggerError> {
        match config.model_type {
            ModelType::Legacy => {
                let path = config
                    .legacy_model_path
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_FILE));
                Ok(Backend::Legacy(BrillTagger::load(&path)?))
            }
            ModelType::Berturk => Ok(Backend::Transformer(Box::new(HeuristicClassifier::new(
                "dbmdz/bert-base-turkish-cased",
            )))),
            ModelType::Distilbert => Ok(Backend::Transformer(Box::new(
                HeuristicClassifier::new("distilbert-base-multilingual-cased"),
            ))),
            ModelType::FineTuned => {
                let dir = config
                    .fine_tuned_dir
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_DIR));
                Ok(Backend::FineTuned(FineTunedModel::load(&dir)?))
            }
            ModelType::RuleBased => Ok(Backend::RuleBased),
        }
    }

    /// The backend that actually loaded (after any construction fallback).
    pub fn model_type(&self) -> ModelType {
        self.model_type
    }

    /// Tags one sentence. Words are the whitespace-separated tokens of the
    /// input; the result has exactly one entry per word, in order, with the
    /// original surface forms. Blank input yields an empty vec. Backend
    /// failures are absorbed by a rule-based retry — this method never
    /// panics for any `&str`.
    pub fn tag(&self, sentence: &str) -> Vec<TaggedWord> {
        if sentence.trim().is_empty() {
            return Vec::new();
        }
        let words: Vec<&str> = sentence.split_whitespace().collect();
        match self.tag_with_backend(sentence, &words) {
            Ok(tagged) => tagged,
            Err(e) => {
                warn!(model = %self.model_type, error = %e, "tagging failed, retrying with rule table");
                self.tag_with_rules(&words)
            }
        }
    }

    fn tag_with_backend(
        &self,
        sentence: &str,
        words: &[&str],
    ) -> Result<Vec<TaggedWord>, TaggerError> {
        match &self.backend {
            Backend::Legacy(tagger) => Ok(words
                .iter()
                .map(|word| {
                    // The legacy tagger consumes one lowercased word at a
                    // time; its tags are normalized to title case.
                    match tagger.tag_word(&word.to_lowercase()) {
                        Some(tag) => TaggedWord::new(word, title_case(&tag)),
                        None => TaggedWord::new(word, "UNKNOWN"),
                    }
                })
                .collect()),
            Backend::Transformer(classifier) => {
                // The pipeline output is deliberately not consulted for tag
                // selection; a successful run gates the rule-table tags.
                classifier.classify(sentence)?;
                Ok(self.tag_with_rules(words))
            }
            Backend::FineTuned(model) => {
                let tags = model.tag_words(sentence, words)?;
                Ok(words
                    .iter()
                    .zip(tags)
                    .map(|(word, tag)| TaggedWord::new(word, tag))
                    .collect())
            }
            Backend::RuleBased => Ok(self.tag_with_rules(words)),
        }
    }

    fn tag_with_rules(&self, words: &[&str]) -> Vec<TaggedWord> {
        words
            .iter()
            .map(|word| TaggedWord::new(word, self.fallback.tag_word(word).label()))
            .collect()
    }

    /// Tags each sentence independently, preserving input order. One
    /// sentence's (already absorbed) failure cannot affect another's result.
    pub fn batch_tag(&self, sentences: &[String]) -> Vec<Vec<TaggedWord>> {
        sentences.iter().map(|s| self.tag(s)).collect()
    }

    /// Describes the loaded backend. The fine-tuned backend additionally
    /// reports the evaluation scores and tag inventory from its metadata.
    pub fn model_info(&self) -> ModelInfo {
        let model_path = match self.model_type {
            ModelType::Legacy => self
                .config
                .legacy_model_path
                .as_ref()
                .map(|p| p.display().to_string()),
            ModelType::FineTuned => self
                .config
                .fine_tuned_dir
                .as_ref()
                .map(|p| p.display().to_string()),
            _ => None,
        };
        let mut info = ModelInfo {
            model_type: self.model_type,
            model_path: model_path.unwrap_or_else(|| "default".to_string()),
            supports_batch: true,
            language: "Turkish",
            accuracy: None,
            f1: None,
            precision: None,
            recall: None,
            epochs: None,
            tag_count: None,
            tags: None,
        };
        if let Backend::FineTuned(model) = &self.backend {
            let eval = &model.metadata.eval_results;
            info.accuracy = Some(eval.accuracy);
            info.f1 = Some(eval.f1);
            info.precision = Some(eval.precision);
            info.recall = Some(eval.recall);
            info.epochs = Some(eval.epochs);
            info.tag_count = Some(model.metadata.id2tag.len());
            info.tags = Some(model.tag_list());
        }
        info
    }
}

/// Title-cases a tag string: first character uppercased, rest lowercased
/// (`"VERB"` → `"Verb"`, `"noun"` → `"Noun"`).
fn title_case(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_based() -> PosTagger {
        PosTagger::new(TaggerConfig::new(ModelType::RuleBased))
    }

    #[test]
    fn title_case_normalizes() {
        assert_eq!(title_case("VERB"), "Verb");
        assert_eq!(title_case("noun"), "Noun");
        assert_eq!(title_case("Adj"), "Adj");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn blank_input_yields_empty() {
        let tagger = rule_based();
        assert!(tagger.tag("").is_empty());
        assert!(tagger.tag("   ").is_empty());
        assert!(tagger.tag("\t\n").is_empty());
    }

    #[test]
    fn one_tag_per_whitespace_word() {
        let tagger = rule_based();
        let sentence = "Bunu başından beri biliyordum zaten .";
        let tagged = tagger.tag(sentence);
        assert_eq!(tagged.len(), sentence.split_whitespace().count());
        // Surface forms are preserved in order.
        let words: Vec<&str> = tagged.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, sentence.split_whitespace().collect::<Vec<_>>());
    }

    #[test]
    fn rule_based_pinned_example() {
        let tagger = rule_based();
        let tagged = tagger.tag("Ali okula gitti .");
        let pairs: Vec<(&str, &str)> = tagged
            .iter()
            .map(|t| (t.word.as_str(), t.tag.as_str()))
            .collect();
        // The adjectival -li suffix also matches proper names like "Ali";
        // that misclassification is part of the pinned fallback behavior.
        assert_eq!(
            pairs,
            vec![("Ali", "Adj"), ("okula", "Noun"), ("gitti", "Noun"), (".", "Punc")]
        );
    }

    #[test]
    fn unavailable_legacy_model_degrades_to_rule_based() {
        let mut config = TaggerConfig::new(ModelType::Legacy);
        config.legacy_model_path = Some(PathBuf::from("/nonexistent/tagger.json"));
        let tagger = PosTagger::new(config);
        assert_eq!(tagger.model_type(), ModelType::RuleBased);
        assert_eq!(tagger.model_info().model_type, ModelType::RuleBased);
        // Still tags.
        assert_eq!(tagger.tag(".")[0].tag, "Punc");
    }

    #[test]
    fn unavailable_fine_tuned_dir_degrades_to_rule_based() {
        let mut config = TaggerConfig::new(ModelType::FineTuned);
        config.fine_tuned_dir = Some(PathBuf::from("/nonexistent/checkpoint"));
        let tagger = PosTagger::new(config);
        assert_eq!(tagger.model_type(), ModelType::RuleBased);
    }

    #[test]
    fn transformer_backend_tags_every_word() {
        let tagger = PosTagger::new(TaggerConfig::new(ModelType::Berturk));
        assert_eq!(tagger.model_type(), ModelType::Berturk);
        let sentence = "Türkiye güzel bir ülkedir .";
        let tagged = tagger.tag(sentence);
        assert_eq!(tagged.len(), 5);
        assert_eq!(tagged[4].tag, "Punc");
    }

    #[test]
    fn batch_tag_matches_individual_calls() {
        let tagger = rule_based();
        let sentences = vec![
            "Ali koştu .".to_string(),
            "".to_string(),
            "Bu kitap güzel .".to_string(),
        ];
        let batch = tagger.batch_tag(&sentences);
        assert_eq!(batch.len(), 3);
        for (result, sentence) in batch.iter().zip(&sentences) {
            assert_eq!(result, &tagger.tag(sentence));
        }
    }

    #[test]
    fn model_info_constants() {
        let info = rule_based().model_info();
        assert!(info.supports_batch);
        assert_eq!(info.language, "Turkish");
        assert_eq!(info.model_path, "default");
        assert!(info.accuracy.is_none());
    }

    #[test]
    fn model_type_wire_names() {
        assert_eq!(ModelType::FineTuned.as_str(), "fine_tuned");
        assert_eq!("berturk".parse::<ModelType>().ok(), Some(ModelType::Berturk));
        assert!("bert-large".parse::<ModelType>().is_err());
        let json = serde_json::to_string(&ModelType::RuleBased).expect("serialize");
        assert_eq!(json, "\"rule_based\"");
    }
}
