// src/replay/sender.rs
use reqwest::Client;
use serde::Serialize;
use std::fmt::Display;

/// Counts for one replayed file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SendSummary {
    pub attempted: usize,
    pub succeeded: usize,
}

impl SendSummary {
    pub fn failed(&self) -> usize {
        self.attempted - self.succeeded
    }
}

pub struct RecordSender {
    client: Client,
    base_url: String,
}

impl RecordSender {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { client, base_url }
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// POSTs every record in order. A failed request is logged and counted;
    /// it does not stop the remaining records.
    pub async fn send_all<T>(&self, endpoint: &str, records: &[T]) -> SendSummary
    where
        T: Serialize + Display,
    {
        let url = self.endpoint_url(endpoint);
        let mut summary = SendSummary::default();

        for record in records {
            summary.attempted += 1;
            match self.client.post(&url).json(record).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        summary.succeeded += 1;
                        tracing::info!(%record, %status, "record sent");
                    } else {
                        tracing::warn!(%record, %status, "record rejected");
                    }
                }
                Err(err) => {
                    tracing::error!(%record, error = %err, url = %url, "request failed");
                }
            }
        }

        summary
    }
}
