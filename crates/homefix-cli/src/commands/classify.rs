//! Classify command implementation

use super::{parse_discipline, pipeline};
use crate::cli::ClassifyArgs;
use crate::output::OutputWriter;
use crate::output_types::{ClassifyOutput, ScoreRow};
use anyhow::Result;
use homefix_classify::score;
use homefix_core::config::LayeredConfig;

pub async fn execute(args: ClassifyArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let preselected = parse_discipline(args.discipline.as_deref())?;

    let classification =
        pipeline(config).classify(&args.text, args.image.as_deref(), preselected).await;

    let scores: Option<Vec<ScoreRow>> = args
        .explain
        .then(|| score(&args.text).into_iter().filter(|s| s.hits > 0).map(ScoreRow::from).collect());
    let result = ClassifyOutput::new(&classification, scores);

    if output.is_json() {
        return output.result(result);
    }

    output.section("Classification");
    output.kv("Discipline", result.discipline.label());
    output.kv("Urgency", result.urgency);
    output.kv("Diagnosis", &result.diagnosis);
    output.kv("Source", format!("{:?}", result.source).to_lowercase());

    if let Some(scores) = result.scores {
        output.section("Keyword hits");
        output.table(scores);
    }

    Ok(())
}
