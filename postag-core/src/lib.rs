//! # postag-core — Turkish Part-of-Speech Tagging
//!
//! This crate wraps several ways of assigning POS tags to Turkish sentences
//! behind one facade, so callers (CLI demos, the evaluation harness, the web
//! service) never care which backend actually answered:
//!
//! 1. **Input**: a raw sentence (`&str`), split on whitespace.
//! 2. **Backend selection** ([`facade`]): a [`ModelType`] chosen at
//!    construction — the serialized Brill tagger ([`brill`]), a transformer
//!    token-classification pipeline ([`transformer`]), a fine-tuned
//!    checkpoint ([`finetuned`]) or the plain rule table ([`rules`]).
//! 3. **Degradation**: any load or tagging failure falls back to the rule
//!    table. Tagging never fails for any string input; the only observable
//!    downgrade is tag quality.
//! 4. **Output**: one [`TaggedWord`] per whitespace word, in input order.
//!
//! ## Example
//!
//! ```rust
//! use postag_core::{ModelType, PosTagger, TaggerConfig};
//!
//! let tagger = PosTagger::new(TaggerConfig::new(ModelType::RuleBased));
//! for tagged in tagger.tag("Ali okula gitti .") {
//!     println!("{}/{}", tagged.word, tagged.tag);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`facade`]: backend selection, fallback and the public tagging API.
//! - [`rules`]: the ordered rule tables (basic fallback + enhanced).
//! - [`brill`], [`transformer`], [`finetuned`]: the three model backends.
//! - [`corpus`], [`eval`]: demo sentences and the comparison harness.

pub mod brill;
pub mod corpus;
pub mod error;
pub mod eval;
pub mod facade;
pub mod finetuned;
pub mod rules;
pub mod tag;
pub mod transformer;

pub use error::TaggerError;
pub use facade::{ModelInfo, ModelType, PosTagger, TaggedWord, TaggerConfig};
pub use rules::RuleTable;
pub use tag::PosTag;
