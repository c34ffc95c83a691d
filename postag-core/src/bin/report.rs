//! Report CLI: runs the evaluation harness over all (or selected) models,
//! prints a comparison table and writes the JSON results file.

use std::path::PathBuf;

use clap::Parser;
use postag_core::eval::evaluate;
use postag_core::ModelType;

#[derive(Parser)]
#[command(name = "report", about = "Turkish POS tagger evaluation report")]
struct Args {
    /// Comma-separated model list (default: legacy,fine_tuned,berturk,rule_based)
    #[arg(long, value_delimiter = ',')]
    models: Option<Vec<ModelType>>,

    /// Where to write the JSON results
    #[arg(long, default_value = "simulation_results.json")]
    output: PathBuf,
}

fn main() {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let models = args.models.unwrap_or_else(|| {
        vec![
            ModelType::Legacy,
            ModelType::FineTuned,
            ModelType::Berturk,
            ModelType::RuleBased,
        ]
    });

    println!("Running Turkish POS tagger evaluation");
    println!("{}", "=".repeat(60));

    let report = evaluate(&models);

    println!(
        "{:<12} {:<12} {:>7} {:>10} {:>10} {:>9}",
        "Requested", "Loaded", "Tokens", "Coverage", "Accuracy", "Time"
    );
    println!("{}", "-".repeat(64));
    for model in &report.models {
        let accuracy = model
            .avg_accuracy
            .map(|a| format!("{a:.1}%"))
            .unwrap_or_else(|| "N/A".to_string());
        println!(
            "{:<12} {:<12} {:>7} {:>9.1}% {:>10} {:>7}ms",
            model.model_type.to_string(),
            model.loaded_as.to_string(),
            model.tokens,
            model.coverage_percent,
            accuracy,
            model.elapsed_ms
        );
    }

    println!("\n{}", report.recommendation);

    match serde_json::to_string_pretty(&report) {
        Ok(json) => match std::fs::write(&args.output, json) {
            Ok(()) => println!("Results saved to {}", args.output.display()),
            Err(e) => eprintln!("Could not save results: {e}"),
        },
        Err(e) => eprintln!("Could not serialize results: {e}"),
    }
}
