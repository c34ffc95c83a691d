//! Demo CLI: tags the showcase sentences with each model and prints the
//! results side by side, plus the tag inventory with explanations.

use clap::Parser;
use postag_core::{ModelType, PosTag, PosTagger, TaggedWord, TaggerConfig};

#[derive(Parser)]
#[command(name = "demo", about = "Turkish POS tagger demo")]
struct Args {
    /// Tag only with this model (legacy, berturk, distilbert, fine_tuned, rule_based)
    #[arg(long)]
    model: Option<ModelType>,

    /// Tag this sentence instead of the built-in showcase sentences
    #[arg(long)]
    sentence: Option<String>,
}

const SHOWCASE: &[&str] = &[
    "Türkiye güzel bir ülkedir .",
    "Ali bugün okula gitti .",
    "Bu kitabı okumayı çok seviyorum .",
];

fn format_tagged(tagged: &[TaggedWord]) -> String {
    tagged
        .iter()
        .map(|t| format!("{}/{}", t.word, t.tag))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let models: Vec<ModelType> = match args.model {
        Some(m) => vec![m],
        None => vec![ModelType::FineTuned, ModelType::Legacy, ModelType::Berturk],
    };
    let sentences: Vec<&str> = match &args.sentence {
        Some(s) => vec![s.as_str()],
        None => SHOWCASE.to_vec(),
    };

    println!("=== Turkish POS Tagger Demo ===\n");

    for sentence in &sentences {
        println!("Sentence: \"{sentence}\"");
        for model in &models {
            let tagger = PosTagger::new(TaggerConfig::new(*model));
            let tagged = tagger.tag(sentence);
            let loaded = tagger.model_type();
            let note = if loaded == *model {
                String::new()
            } else {
                format!(" (fell back to {loaded})")
            };
            println!("  {:<12}{}: {}", model.to_string(), note, format_tagged(&tagged));
        }
        println!();
    }

    println!("Model info:");
    for model in &models {
        let tagger = PosTagger::new(TaggerConfig::new(*model));
        let info = tagger.model_info();
        match serde_json::to_string(&info) {
            Ok(json) => println!("  {}: {}", model, json),
            Err(e) => println!("  {}: <serialization error: {e}>", model),
        }
    }

    println!("\nSupported POS tags:");
    for tag in PosTag::all() {
        println!("  {:<10} -> {}", tag.label(), tag.description());
    }
}
