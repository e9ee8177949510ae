use clap::Parser;
use roster_labeler::config::event::load_event;
use roster_labeler::utils::{logger, validation::Validate};
use roster_labeler::{ActionConfig, GitHubClient, LabelEngine, LabelerError};

#[tokio::main]
async fn main() {
    let config = ActionConfig::parse();

    logger::init_action_logger(config.verbose);
    tracing::info!("Starting roster-labeler");

    if let Err(e) = run(config).await {
        tracing::error!("Labeling failed: {} (kind: {:?})", e, e.kind());
        // Workflow command so the failure shows up as an annotation
        println!("::error::{}", e);
        std::process::exit(1);
    }
}

async fn run(config: ActionConfig) -> Result<(), LabelerError> {
    config.validate()?;

    let event = load_event(config.event_path.as_deref())?;

    let source = GitHubClient::new(config.api_url.clone(), config.roster_token());
    let sink = GitHubClient::new(config.api_url.clone(), config.repo_token.clone());
    let engine = LabelEngine::new(source, sink, config);

    let labels = engine.run(&event).await?;
    if labels.is_empty() {
        println!("No matching team, pull request left unlabeled");
    } else {
        println!("Applied labels: {}", labels.as_slice().join(", "));
    }

    Ok(())
}
