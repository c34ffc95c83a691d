//! Axum REST service exposing the Turkish POS tagger: single-sentence and
//! batch tagging, the model catalog, runtime stats and a health probe.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use postag_core::eval::unix_time;
use postag_core::{ModelInfo, ModelType, PosTagger, TaggedWord, TaggerConfig};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

const VERSION: &str = "2.0.0";

/// Largest batch a single request may carry.
const MAX_BATCH: usize = 100;

/// Lazily constructed tagger per model type. Every [`ModelType`] gets its own
/// slot up front, so construction of one backend can never block or poison
/// another, and each backend loads at most once per process.
struct TaggerCache {
    slots: HashMap<ModelType, OnceLock<Arc<PosTagger>>>,
}

impl TaggerCache {
    fn new() -> Self {
        Self {
            slots: ModelType::all()
                .into_iter()
                .map(|m| (m, OnceLock::new()))
                .collect(),
        }
    }

    /// Returns the tagger for `model`, constructing it on first use.
    fn get(&self, model: ModelType) -> Arc<PosTagger> {
        // Slots are prefilled for every variant in `new`.
        self.slots[&model]
            .get_or_init(|| Arc::new(PosTagger::new(TaggerConfig::new(model))))
            .clone()
    }

    /// Model types whose tagger has already been constructed.
    fn loaded(&self) -> Vec<(ModelType, Arc<PosTagger>)> {
        ModelType::all()
            .into_iter()
            .filter_map(|m| self.slots[&m].get().map(|t| (m, t.clone())))
            .collect()
    }
}

struct AppState {
    cache: TaggerCache,
}

#[derive(Deserialize)]
struct TagRequest {
    sentence: String,
    #[serde(default)]
    model_type: Option<ModelType>,
}

#[derive(Deserialize)]
struct BatchRequest {
    sentences: Vec<String>,
    #[serde(default)]
    model_type: Option<ModelType>,
}

#[derive(Serialize)]
struct TagResponse {
    sentence: String,
    result: Vec<TaggedWord>,
    /// Seconds spent tagging.
    processing_time: f64,
    model_info: ModelInfo,
    timestamp: f64,
}

#[derive(Serialize)]
struct BatchItem {
    sentence: String,
    result: Vec<TaggedWord>,
}

#[derive(Serialize)]
struct BatchResponse {
    results: Vec<BatchItem>,
    total_sentences: usize,
    processing_time: f64,
    model_info: ModelInfo,
    timestamp: f64,
}

#[tokio::main]
async fn main() {
    let debug = std::env::var("DEBUG")
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    tracing_subscriber::fmt()
        .with_env_filter(if debug { "debug" } else { "info" })
        .init();

    let state = Arc::new(AppState {
        cache: TaggerCache::new(),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/api/tag", post(tag_handler))
        .route("/api/batch", post(batch_handler))
        .route("/api/models", get(models_handler))
        .route("/api/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(state);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let addr = format!("{host}:{port}");

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    info!("Turkish POS tagger API listening on http://{addr}");
    axum::serve(listener, app).await.unwrap();
}

async fn index_handler() -> impl IntoResponse {
    Html(include_str!("templates/index.html"))
}

fn bad_request(message: &str) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({"error": message})),
    )
        .into_response()
}

/// Tags one sentence with the requested model (default: berturk).
async fn tag_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TagRequest>,
) -> impl IntoResponse {
    if req.sentence.trim().is_empty() {
        return bad_request("sentence must not be empty");
    }

    let model = req.model_type.unwrap_or(ModelType::Berturk);
    let tagger = state.cache.get(model);

    let start = Instant::now();
    let result = tagger.tag(&req.sentence);
    let processing_time = start.elapsed().as_secs_f64();

    Json(TagResponse {
        sentence: req.sentence,
        result,
        processing_time,
        model_info: tagger.model_info(),
        timestamp: unix_time(),
    })
    .into_response()
}

/// Tags up to [`MAX_BATCH`] sentences. Blank sentences are skipped, not
/// errors; an oversized batch is rejected outright.
async fn batch_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BatchRequest>,
) -> impl IntoResponse {
    if req.sentences.is_empty() {
        return bad_request("sentences must not be empty");
    }
    if req.sentences.len() > MAX_BATCH {
        return bad_request("batch size exceeds the limit of 100 sentences");
    }

    let model = req.model_type.unwrap_or(ModelType::Berturk);
    let tagger = state.cache.get(model);

    let start = Instant::now();
    let results = batch_items(&tagger, req.sentences);
    let processing_time = start.elapsed().as_secs_f64();

    Json(BatchResponse {
        total_sentences: results.len(),
        results,
        processing_time,
        model_info: tagger.model_info(),
        timestamp: unix_time(),
    })
    .into_response()
}

/// Tags each non-blank sentence; sentences are trimmed before tagging and
/// echoed back in their trimmed form.
fn batch_items(tagger: &PosTagger, sentences: Vec<String>) -> Vec<BatchItem> {
    sentences
        .into_iter()
        .filter_map(|s| {
            let sentence = s.trim().to_string();
            if sentence.is_empty() {
                return None;
            }
            let result = tagger.tag(&sentence);
            Some(BatchItem { sentence, result })
        })
        .collect()
}

/// Static catalog of selectable models.
async fn models_handler() -> impl IntoResponse {
    let models: Vec<serde_json::Value> = ModelType::all()
        .into_iter()
        .map(|m| {
            serde_json::json!({
                "id": m.as_str(),
                "description": describe(m),
                "default": m == ModelType::Berturk,
            })
        })
        .collect();
    Json(serde_json::json!({ "models": models }))
}

fn describe(model: ModelType) -> &'static str {
    match model {
        ModelType::Legacy => "Serialized Brill-style tagger (lexicon + patch rules)",
        ModelType::Berturk => "Turkish BERT token-classification pipeline",
        ModelType::Distilbert => "Multilingual DistilBERT token-classification pipeline",
        ModelType::FineTuned => "Fine-tuned checkpoint with evaluation metadata",
        ModelType::RuleBased => "Deterministic rule table (universal fallback)",
    }
}

/// Runtime statistics: which taggers have been constructed so far and what
/// each reports about itself.
async fn stats_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let loaded = state.cache.loaded();
    let models: serde_json::Map<String, serde_json::Value> = loaded
        .iter()
        .map(|(m, tagger)| {
            let info = serde_json::to_value(tagger.model_info())
                .unwrap_or(serde_json::Value::Null);
            (m.as_str().to_string(), info)
        })
        .collect();

    Json(serde_json::json!({
        "loaded_models": loaded.len(),
        "available_models": ModelType::all().iter().map(|m| m.as_str()).collect::<Vec<_>>(),
        "models": models,
        "version": VERSION,
        "timestamp": unix_time(),
    }))
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": VERSION,
        "timestamp": unix_time(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_has_a_slot_per_model() {
        let cache = TaggerCache::new();
        assert_eq!(cache.slots.len(), ModelType::all().len());
        assert!(cache.loaded().is_empty());
    }

    #[test]
    fn cache_constructs_once_and_reports_loaded() {
        let cache = TaggerCache::new();
        let first = cache.get(ModelType::RuleBased);
        let second = cache.get(ModelType::RuleBased);
        assert!(Arc::ptr_eq(&first, &second));
        let loaded = cache.loaded();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].0, ModelType::RuleBased);
    }

    #[test]
    fn batch_items_trims_and_skips_blanks() {
        let cache = TaggerCache::new();
        let tagger = cache.get(ModelType::RuleBased);
        let items = batch_items(
            &tagger,
            vec![
                "  Ali okula gitti .  ".to_string(),
                "   ".to_string(),
                "Bu kitap güzel .".to_string(),
            ],
        );
        assert_eq!(items.len(), 2);
        // Echoed sentences carry no surrounding whitespace.
        assert_eq!(items[0].sentence, "Ali okula gitti .");
        assert_eq!(items[1].sentence, "Bu kitap güzel .");
        assert_eq!(items[0].result, tagger.tag("Ali okula gitti ."));
    }

    #[test]
    fn tag_request_defaults_model_type() {
        let req: TagRequest =
            serde_json::from_str(r#"{"sentence": "Ali okula gitti ."}"#).expect("parse");
        assert!(req.model_type.is_none());
        let req: TagRequest =
            serde_json::from_str(r#"{"sentence": "x", "model_type": "rule_based"}"#)
                .expect("parse");
        assert_eq!(req.model_type, Some(ModelType::RuleBased));
    }
}
