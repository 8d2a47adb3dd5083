//! Command execution logic for the Sentira CLI.

use std::io::Read;
use std::sync::Arc;

use crate::cli::args::{ClassifyArgs, Command, InspectArgs, SentiraArgs};
use crate::cli::output::{ModelSummary, print_inference, print_model_summary};
use crate::error::Result;
use crate::inference::{LinearPipeline, SentimentBackend};
use crate::model::SentimentModel;

/// Execute the parsed CLI command.
pub fn execute_command(args: SentiraArgs) -> Result<()> {
    match args.command.clone() {
        Command::Classify(cmd) => execute_classify(&args, &cmd),
        Command::Inspect(cmd) => execute_inspect(&args, &cmd),
    }
}

fn execute_classify(args: &SentiraArgs, cmd: &ClassifyArgs) -> Result<()> {
    let model = Arc::new(SentimentModel::from_json_file(&cmd.model)?);
    let pipeline = LinearPipeline::with_cue_limit(Arc::clone(&model), cmd.cues)?;

    let text = match &cmd.text {
        Some(text) => text.clone(),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let result = pipeline.infer(&text)?;
    print_inference(args, &model.classes, &result)
}

fn execute_inspect(args: &SentiraArgs, cmd: &InspectArgs) -> Result<()> {
    let model = SentimentModel::from_json_file(&cmd.model)?;
    print_model_summary(args, &ModelSummary::from_model(&model))
}
