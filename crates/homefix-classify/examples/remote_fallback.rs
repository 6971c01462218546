//! Example demonstrating the remote classifier with local fallback
//!
//! Points the pipeline at a classification service. When nothing is listening
//! the local keyword classifier answers instead.
//!
//! To run: cargo run --example remote_fallback -- http://localhost:8080

use std::sync::Arc;
use std::time::Duration;

use homefix_classify::{ClassificationPipeline, HttpRemoteClassifier};
use homefix_core::models::ServiceRequestDraft;

#[tokio::main]
async fn main() {
    let base_url = std::env::args().nth(1).unwrap_or_else(|| "http://localhost:8080".to_string());

    println!("Homefix Classify - Remote Fallback Example");
    println!("==========================================\n");
    println!("Remote classifier: {}", base_url);

    let timeout = Duration::from_millis(2000);
    let remote = HttpRemoteClassifier::new(base_url, timeout);
    let pipeline = ClassificationPipeline::with_remote(Arc::new(remote), timeout);

    let drafts = vec![
        ServiceRequestDraft::new("se me poncho un cable, necesito un electricista urgente"),
        ServiceRequestDraft::new("tengo fuga en el baño"),
        ServiceRequestDraft::new("quiero instalar un minisplit").with_turn("en la recamara"),
    ];

    for draft in &drafts {
        let classification = pipeline.classify_draft(draft).await;
        println!("\n\"{}\"", draft.combined_text());
        println!("  Discipline: {}", classification.discipline());
        println!("  Urgency:    {}", classification.urgency());
        println!("  Diagnosis:  {}", classification.diagnosis());
        println!("  Source:     {:?}", classification.source());
    }
}
