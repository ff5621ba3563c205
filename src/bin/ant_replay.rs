//! Replays `PreviouslyParsed*.json` into a running API.
use ant_hub::config::ReplayConfig;
use ant_hub::replay::{StepOutcome, run_replay};
use ant_hub::telemetry::init_tracing;
use anyhow::Result;
use std::time::Duration;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "replay failed");
        eprintln!("replay failed: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ReplayConfig::from_env()?;
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    tracing::info!(
        data_dir = config.data_dir(),
        api = config.api_base_url(),
        "starting replay"
    );
    for step in run_replay(&config, client).await {
        match step.outcome {
            StepOutcome::Sent(summary) => println!(
                "{} -> {}: {} sent, {} failed",
                step.file,
                step.endpoint,
                summary.succeeded,
                summary.failed()
            ),
            StepOutcome::Skipped(reason) => println!("{} skipped: {reason}", step.file),
        }
    }
    Ok(())
}
