//! # Evaluation harness
//!
//! Runs one or more facades over the demo corpus and produces a comparable
//! report per model: token counts, unique-tag inventory, coverage against
//! the base tag set, positional accuracy against the corpus' expected tags
//! and wall-clock timing. The report serializes to the
//! `simulation_results.json` shape consumed by the project report.

use std::collections::BTreeSet;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::corpus::{demo_sentences, EXPECTED_TAG_INVENTORY};
use crate::facade::{ModelType, PosTagger, TaggedWord, TaggerConfig};
use crate::tag::PosTag;

/// A sentence with its tagged output, kept as a worked example in reports.
#[derive(Debug, Clone, Serialize)]
pub struct TaggedExample {
    pub sentence: String,
    pub tagged: Vec<TaggedWord>,
}

/// Per-model evaluation results.
#[derive(Debug, Clone, Serialize)]
pub struct ModelReport {
    /// Requested selector; `loaded_as` records any construction fallback.
    pub model_type: ModelType,
    pub loaded_as: ModelType,
    pub sentences: usize,
    pub tokens: usize,
    pub unique_tags: Vec<String>,
    /// Share of the base tag inventory the model produced, in percent.
    pub coverage_percent: f64,
    /// Mean positional accuracy over sentences with expected tags, percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_accuracy: Option<f64>,
    pub elapsed_ms: u64,
    pub examples: Vec<TaggedExample>,
}

/// The full comparison report.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub timestamp: f64,
    pub models: Vec<ModelReport>,
    pub recommendation: String,
}

/// Seconds since the Unix epoch, as the report's timestamp.
pub fn unix_time() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

/// Positional accuracy of `tagged` against `expected`, in percent.
/// Mismatched lengths are scored against the longer side, so dropped or
/// invented tokens count as errors.
pub fn sentence_accuracy(tagged: &[TaggedWord], expected: &[&str]) -> f64 {
    let matches = tagged
        .iter()
        .zip(expected)
        .filter(|(t, e)| t.tag == **e)
        .count();
    let denom = tagged.len().max(expected.len());
    if denom == 0 {
        return 100.0;
    }
    matches as f64 / denom as f64 * 100.0
}

/// Evaluates one already-constructed tagger over the demo corpus.
pub fn evaluate_model(requested: ModelType, tagger: &PosTagger) -> ModelReport {
    let corpus = demo_sentences();
    let start = Instant::now();

    let mut tokens = 0usize;
    let mut unique: BTreeSet<String> = BTreeSet::new();
    let mut accuracies: Vec<f64> = Vec::new();
    let mut examples: Vec<TaggedExample> = Vec::new();

    for sentence in &corpus {
        let tagged = tagger.tag(sentence.text);
        tokens += tagged.len();
        for t in &tagged {
            unique.insert(t.tag.clone());
        }
        if let Some(expected) = sentence.expected {
            accuracies.push(sentence_accuracy(&tagged, expected));
        }
        if examples.len() < 3 {
            examples.push(TaggedExample {
                sentence: sentence.text.to_string(),
                tagged,
            });
        }
    }

    // Coverage over the coarse inventory: Noun_Dat etc. count as Noun.
    let base_tags: BTreeSet<&str> = unique
        .iter()
        .map(|t| PosTag::from_label(t).map(|p| p.base_label()).unwrap_or("Unknown"))
        .collect();
    let covered = EXPECTED_TAG_INVENTORY
        .iter()
        .filter(|t| base_tags.contains(**t))
        .count();
    let coverage_percent = covered as f64 / EXPECTED_TAG_INVENTORY.len() as f64 * 100.0;

    let avg_accuracy = if accuracies.is_empty() {
        None
    } else {
        Some(accuracies.iter().sum::<f64>() / accuracies.len() as f64)
    };

    ModelReport {
        model_type: requested,
        loaded_as: tagger.model_type(),
        sentences: corpus.len(),
        tokens,
        unique_tags: unique.into_iter().collect(),
        coverage_percent,
        avg_accuracy,
        elapsed_ms: start.elapsed().as_millis() as u64,
        examples,
    }
}

/// Evaluates each selector with a freshly constructed facade and picks a
/// recommendation (highest average accuracy, ties broken by coverage).
pub fn evaluate(models: &[ModelType]) -> EvaluationReport {
    let reports: Vec<ModelReport> = models
        .iter()
        .map(|&m| {
            let tagger = PosTagger::new(TaggerConfig::new(m));
            evaluate_model(m, &tagger)
        })
        .collect();

    let recommendation = reports
        .iter()
        .max_by(|a, b| {
            let ka = (a.avg_accuracy.unwrap_or(0.0), a.coverage_percent);
            let kb = (b.avg_accuracy.unwrap_or(0.0), b.coverage_percent);
            ka.partial_cmp(&kb).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|r| format!("Recommended model: {}", r.model_type))
        .unwrap_or_else(|| "No models evaluated".to_string());

    EvaluationReport {
        timestamp: unix_time(),
        models: reports,
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_scores_positionally() {
        let tagged = vec![
            TaggedWord { word: "Ali".into(), tag: "Noun".into() },
            TaggedWord { word: ".".into(), tag: "Punc".into() },
        ];
        assert_eq!(sentence_accuracy(&tagged, &["Noun", "Punc"]), 100.0);
        assert_eq!(sentence_accuracy(&tagged, &["Verb", "Punc"]), 50.0);
        // Length mismatch penalizes against the longer side.
        assert_eq!(sentence_accuracy(&tagged, &["Noun", "Punc", "Punc", "Punc"]), 50.0);
        assert_eq!(sentence_accuracy(&[], &[]), 100.0);
    }

    #[test]
    fn rule_based_report_is_populated() {
        let report = evaluate(&[ModelType::RuleBased]);
        assert_eq!(report.models.len(), 1);
        let model = &report.models[0];
        assert_eq!(model.loaded_as, ModelType::RuleBased);
        assert!(model.tokens > 0);
        assert!(model.unique_tags.contains(&"Punc".to_string()));
        assert!(model.coverage_percent > 0.0);
        assert!(model.avg_accuracy.is_some());
        assert_eq!(model.examples.len(), 3);
        assert!(report.recommendation.contains("rule_based"));
    }

    #[test]
    fn report_serializes_to_json() {
        let report = evaluate(&[ModelType::RuleBased]);
        let json = serde_json::to_value(&report).expect("serialize");
        assert!(json.get("models").is_some());
        assert!(json.get("recommendation").is_some());
    }
}
