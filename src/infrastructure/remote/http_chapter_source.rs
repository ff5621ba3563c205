// src/infrastructure/remote/http_chapter_source.rs
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::application::dto::{ChapterDto, PagedResponse};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::sync::{PageKey, RemoteChapterSource, RemotePage};

/// Reads chapter pages from the content API over HTTP.
pub struct HttpChapterSource {
    client: Client,
    base_url: String,
}

impl HttpChapterSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("ant_sync/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn page_url(&self, key: PageKey) -> String {
        format!(
            "{}/api/chapters/{}?pageNumber={}",
            self.base_url,
            key.catalog_id(),
            key.page_number()
        )
    }
}

#[async_trait]
impl RemoteChapterSource for HttpChapterSource {
    async fn fetch_page(&self, key: PageKey) -> DomainResult<Option<RemotePage>> {
        let url = self.page_url(key);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| DomainError::Remote(format!("GET {url} failed: {err}")))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(DomainError::Remote(format!("GET {url} returned {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|err| DomainError::Remote(format!("reading {url} failed: {err}")))?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        let page: PagedResponse<ChapterDto> = serde_json::from_str(&body)
            .map_err(|err| DomainError::Remote(format!("malformed chapter page: {err}")))?;

        Ok(Some(RemotePage {
            page_number: page.page_number,
            page_size: page.page_size,
            total_records: page.total_records,
            articles: page.data.into_iter().map(Into::into).collect(),
        }))
    }
}
