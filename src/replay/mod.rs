// src/replay/mod.rs
//! Pushes previously scraped catalogs, articles and contents into the API.
pub mod loader;
pub mod records;
pub mod sender;

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};
use std::fmt::Display;

use crate::config::ReplayConfig;
use loader::load_records;
use records::{ArticleRecord, CatalogRecord, ContentRecord};
use sender::{RecordSender, SendSummary};

pub const CATALOGS_FILE: &str = "PreviouslyParsedCatalogs.json";
pub const ARTICLES_FILE: &str = "PreviouslyParsedArticles.json";
pub const CONTENTS_FILE: &str = "PreviouslyParsedContents.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Sent(SendSummary),
    Skipped(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub file: &'static str,
    pub endpoint: &'static str,
    pub outcome: StepOutcome,
}

/// Replays the three files in dependency order: catalogs, articles, contents.
pub async fn run_replay(config: &ReplayConfig, client: reqwest::Client) -> Vec<StepReport> {
    let sender = RecordSender::new(client, config.api_base_url());
    let dir = Path::new(config.data_dir());

    vec![
        replay_file::<CatalogRecord>(&sender, dir, CATALOGS_FILE, "api/catalogs/").await,
        replay_file::<ArticleRecord>(&sender, dir, ARTICLES_FILE, "api/articles/").await,
        replay_file::<ContentRecord>(&sender, dir, CONTENTS_FILE, "api/contents/").await,
    ]
}

async fn replay_file<T>(
    sender: &RecordSender,
    dir: &Path,
    file: &'static str,
    endpoint: &'static str,
) -> StepReport
where
    T: DeserializeOwned + Serialize + Display,
{
    let outcome = match load_records::<T>(&dir.join(file)).await {
        Ok(records) => {
            tracing::info!(file, endpoint, records = records.len(), "replaying file");
            let summary = sender.send_all(endpoint, &records).await;
            tracing::info!(
                file,
                sent = summary.succeeded,
                failed = summary.failed(),
                "file replayed"
            );
            StepOutcome::Sent(summary)
        }
        Err(err) => {
            tracing::warn!(file, error = %err, "skipping file");
            StepOutcome::Skipped(err.to_string())
        }
    };

    StepReport {
        file,
        endpoint,
        outcome,
    }
}
