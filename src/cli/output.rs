//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SentiraArgs};
use crate::error::Result;
use crate::inference::InferenceResult;
use crate::model::SentimentModel;

/// Summary of a loaded model for the `inspect` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelSummary {
    pub classes: Vec<String>,
    pub vocabulary_size: usize,
    pub feature_count: usize,
}

impl ModelSummary {
    /// Build a summary from a loaded model.
    pub fn from_model(model: &SentimentModel) -> Self {
        Self {
            classes: model.classes.clone(),
            vocabulary_size: model.vocabulary_size(),
            feature_count: model.feature_count(),
        }
    }
}

/// Print an inference result in the requested format.
pub fn print_inference(args: &SentiraArgs, classes: &[String], result: &InferenceResult) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(args, result),
        OutputFormat::Human => {
            println!(
                "Prediction: {} ({:.1}% confidence)",
                result.predicted_class,
                result.confidence * 100.0
            );
            println!();
            for (name, probability) in classes.iter().zip(&result.probabilities) {
                println!("  {name:<12} {:>5.1}%", probability * 100.0);
            }
            println!();
            if result.cues.is_empty() {
                println!("No strong token cues detected.");
            } else {
                println!("Cues:");
                for cue in &result.cues {
                    println!("  {:<16} {:+.3}", cue.token, cue.score);
                }
            }
            Ok(())
        }
    }
}

/// Print a model summary in the requested format.
pub fn print_model_summary(args: &SentiraArgs, summary: &ModelSummary) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(args, summary),
        OutputFormat::Human => {
            println!("Classes:    {}", summary.classes.join(" / "));
            println!("Vocabulary: {} terms", summary.vocabulary_size);
            println!("Features:   {}", summary.feature_count);
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(args: &SentiraArgs, value: &T) -> Result<()> {
    let rendered = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
