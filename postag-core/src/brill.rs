//! # Serialized Brill-style tagger
//!
//! The legacy backend: a pretrained unigram lexicon plus contextual patch
//! rules, persisted as JSON and loaded at facade construction. The artifact
//! is an external product of a separate training run; this module only
//! deserializes it and answers single-word lookups.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TaggerError;

/// Default artifact filename, relative to the working directory.
pub const DEFAULT_MODEL_FILE: &str = "my_tagger.json";

/// Condition under which a [`PatchRule`] fires.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum PatchCondition {
    /// The word ends with the given suffix.
    SuffixIs(String),
    /// The word starts with the given prefix.
    PrefixIs(String),
    /// The word equals the given form exactly.
    WordIs(String),
}

impl PatchCondition {
    fn matches(&self, word: &str) -> bool {
        match self {
            PatchCondition::SuffixIs(s) => word.ends_with(s.as_str()),
            PatchCondition::PrefixIs(p) => word.starts_with(p.as_str()),
            PatchCondition::WordIs(w) => word == w,
        }
    }
}

/// A Brill transformation: rewrite tag `from` into `to` when the condition
/// holds. Rules are applied in file order after the lexicon lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchRule {
    pub from: String,
    pub to: String,
    pub condition: PatchCondition,
}

/// The deserialized tagger artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrillTagger {
    /// Lowercased word form → tag.
    lexicon: HashMap<String, String>,
    /// Contextual patches, applied in order.
    #[serde(default)]
    rules: Vec<PatchRule>,
    /// Tag for out-of-lexicon words, if the training run produced one.
    #[serde(default)]
    default_tag: Option<String>,
}

impl BrillTagger {
    /// Loads and validates the artifact from `path`.
    pub fn load(path: &Path) -> Result<Self, TaggerError> {
        let raw = fs::read_to_string(path)?;
        let tagger: BrillTagger = serde_json::from_str(&raw)?;
        if tagger.lexicon.is_empty() {
            return Err(TaggerError::ModelFormat(format!(
                "{} has an empty lexicon",
                path.display()
            )));
        }
        Ok(tagger)
    }

    /// Tags one word (the tagger consumes one-word "sentences"). The input
    /// is expected lowercased; `None` means the word is out of lexicon and
    /// no default tag exists.
    pub fn tag_word(&self, word: &str) -> Option<String> {
        let mut tag = self
            .lexicon
            .get(word)
            .cloned()
            .or_else(|| self.default_tag.clone())?;
        for rule in &self.rules {
            if tag == rule.from && rule.condition.matches(word) {
                tag = rule.to.clone();
            }
        }
        Some(tag)
    }

    /// Number of entries in the lexicon.
    pub fn lexicon_size(&self) -> usize {
        self.lexicon.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BrillTagger {
        serde_json::from_value(serde_json::json!({
            "lexicon": {
                "gitti": "verb",
                "okul": "noun",
                "koştu": "verb"
            },
            "rules": [
                {"from": "noun", "to": "verb", "condition": {"kind": "suffix_is", "value": "mak"}}
            ],
            "default_tag": "noun"
        }))
        .expect("sample artifact")
    }

    #[test]
    fn lexicon_lookup() {
        let tagger = sample();
        assert_eq!(tagger.tag_word("gitti").as_deref(), Some("verb"));
        assert_eq!(tagger.tag_word("okul").as_deref(), Some("noun"));
    }

    #[test]
    fn patch_rule_rewrites_default() {
        let tagger = sample();
        // "okumak" is out of lexicon → default "noun", then the suffix patch
        // rewrites it to "verb".
        assert_eq!(tagger.tag_word("okumak").as_deref(), Some("verb"));
    }

    #[test]
    fn no_default_means_none() {
        let tagger: BrillTagger = serde_json::from_value(serde_json::json!({
            "lexicon": {"ev": "noun"}
        }))
        .expect("artifact");
        assert_eq!(tagger.tag_word("yok"), None);
    }

    #[test]
    fn load_rejects_missing_file() {
        let err = BrillTagger::load(Path::new("/nonexistent/tagger.json"));
        assert!(matches!(err, Err(TaggerError::Io(_))));
    }

    #[test]
    fn load_rejects_empty_lexicon() {
        let dir = std::env::temp_dir().join(format!("brill-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("empty.json");
        std::fs::write(&path, r#"{"lexicon": {}}"#).expect("write artifact");
        let err = BrillTagger::load(&path);
        assert!(matches!(err, Err(TaggerError::ModelFormat(_))));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
