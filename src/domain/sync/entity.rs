// src/domain/sync/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::NaiveDate;

/// Identifies one cached page of a catalog on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageKey {
    catalog_id: i64,
    page_number: i64,
}

impl PageKey {
    pub fn new(catalog_id: i64, page_number: i64) -> DomainResult<Self> {
        if catalog_id <= 0 {
            return Err(DomainError::Validation("catalog id must be positive".into()));
        }
        if page_number < 1 {
            return Err(DomainError::Validation(
                "page number must be at least 1".into(),
            ));
        }
        Ok(Self {
            catalog_id,
            page_number,
        })
    }

    pub fn catalog_id(&self) -> i64 {
        self.catalog_id
    }

    pub fn page_number(&self) -> i64 {
        self.page_number
    }
}

/// An article as the client keeps it: the chapter wire shape, flattened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncedArticle {
    pub id: i64,
    pub catalog_id: i64,
    pub catalog_name: String,
    pub title: String,
    pub description: String,
    pub date_or_banner: String,
    pub content: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePage {
    pub page_number: i64,
    pub page_size: i64,
    pub total_records: i64,
    pub articles: Vec<SyncedArticle>,
}

/// Watermark: the last calendar day a page was refreshed from the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleStatus {
    pub id: i64,
    pub key: PageKey,
    pub current_date: NaiveDate,
}

impl ArticleStatus {
    pub fn is_current(&self, today: NaiveDate) -> bool {
        self.current_date == today
    }
}
